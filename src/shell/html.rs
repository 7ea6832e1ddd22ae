//! Document wrapper for composed pages.

use maud::{html, Markup, DOCTYPE};

/// Wrap composed sections into a full HTML5 document.
pub fn document(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
            }
            body { (body) }
        }
    }
}
