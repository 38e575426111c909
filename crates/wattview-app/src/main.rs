mod pages;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wattview_app::{bootstrap, AppConfig};

#[derive(Parser)]
#[command(name = "wattview")]
#[command(version, about = "Wattview dashboard routing shell", long_about = None)]
struct Cli {
    /// Configuration file (defaults to wattview.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table in declaration order
    Routes,

    /// Navigate to each location in turn and print the rendered view
    Resolve {
        /// Locations to navigate to (paths, or full locations with ?query
        /// and #fragment)
        #[arg(required = true)]
        locations: Vec<String>,
    },
}

fn load_config(path: Option<PathBuf>) -> AppConfig {
    let path = path.unwrap_or_else(|| PathBuf::from("wattview.toml"));

    if path.exists() {
        AppConfig::from_file(&path).unwrap_or_else(|e| {
            eprintln!("Failed to load {}: {e}, using built-in table", path.display());
            AppConfig::dashboard()
        })
    } else {
        AppConfig::dashboard()
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = load_config(cli.config);
    let mut app = bootstrap(config, pages::registry())?;

    match cli.command {
        Commands::Routes => {
            for route in app.table().routes() {
                println!(
                    "{:<28} {:<22} component={} props={}",
                    route.pattern(),
                    route.name(),
                    route.component(),
                    route.props()
                );
            }
        }
        Commands::Resolve { locations } => {
            for location in &locations {
                let view = app.navigate(location.as_str())?;
                match &view.route {
                    Some(route) => println!("{location} -> {route} ({})", view.path),
                    None => println!("{location} -> no match ({})", view.path),
                }
                println!("  {}", view.html);
            }
        }
    }

    Ok(())
}
