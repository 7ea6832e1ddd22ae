use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use playground_shell::config::{load_config, ConfigError, ShellConfig};
use playground_shell::http::X_SHELL_VIEW;
use playground_shell::routing::ROUTES;
use playground_shell::shell::{Composer, LinkTarget};
use serde_json::json;

#[derive(Parser)]
#[command(name = "shell-cli")]
#[command(about = "Inspect routes and pages of the playground shell", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which view a location resolves to
    Route {
        path: String,
        /// Print JSON instead of the view name
        #[arg(long)]
        json: bool,
    },
    /// List the route table in match order
    Routes,
    /// Print the composed HTML document for a location
    Render {
        path: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the navigation links
    Links {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate a configuration file
    Check { file: PathBuf },
    /// Request a location from a running server
    Fetch {
        path: String,
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Route { path, json } => {
            let route = ROUTES.resolve(&path);
            if json {
                let out = json!({
                    "path": path,
                    "route": route.name,
                    "pattern": route.pattern.to_string(),
                    "view": route.view,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", playground_shell::resolve(&path));
            }
        }
        Commands::Routes => {
            for (i, route) in ROUTES.routes().iter().enumerate() {
                println!(
                    "{}. {:<16} {:<10} {}",
                    i + 1,
                    route.pattern.to_string(),
                    route.name,
                    route.view
                );
            }
        }
        Commands::Render { path, config } => {
            let config = config_or_default(config.as_deref())?;
            let (_, document) = Composer::from_config(&config.app).render_document(&path);
            print!("{}", document);
        }
        Commands::Links { config } => {
            let config = config_or_default(config.as_deref())?;
            let composer = Composer::from_config(&config.app);
            for link in composer.nav().links() {
                let kind = match link.target {
                    LinkTarget::Internal => "internal",
                    LinkTarget::External => "external",
                };
                println!("{:<8} {:<8} {}", kind, link.label, link.href);
            }
        }
        Commands::Check { file } => match load_config(&file) {
            Ok(config) => println!(
                "{}: ok (revision {}, bind {})",
                file.display(),
                config.app.revision,
                config.listener.bind_address
            ),
            Err(ConfigError::Validation(errors)) => {
                eprintln!("{}: {} problem(s)", file.display(), errors.len());
                for e in &errors {
                    eprintln!("  - {}", e);
                }
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Fetch { path, url } => {
            let target = format!("{}{}", url.trim_end_matches('/'), path);
            let res = reqwest::get(&target).await?;
            let view = res
                .headers()
                .get(X_SHELL_VIEW.as_str())
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-")
                .to_string();
            println!("{} {} view={}", res.status().as_u16(), target, view);
        }
    }

    Ok(())
}

fn config_or_default(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ShellConfig::default()),
    }
}
