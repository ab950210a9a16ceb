mod api;
mod app;
mod config;
mod fetch;
mod form;
mod logging;
mod text;
mod timefmt;
mod ui;
mod wall;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;

use app::App;
use config::Config;

struct Args {
    config_path: Option<PathBuf>,
    page: Option<String>,
}

fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args {
        config_path: None,
        page: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-V" => {
                println!("souvenir {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    parsed.config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "--page" | "-p" => {
                if i + 1 < args.len() {
                    parsed.page = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --page requires a page name");
                    std::process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    parsed
}

fn print_help() {
    println!(
        r#"souvenir - TUI client for a personal memory gallery and guestbook

USAGE:
    souvenir [OPTIONS]

OPTIONS:
    --config, -c PATH   Path to config file
    --page, -p NAME     Start on a page (home|photos|videos|timeline|messages)
    --version, -V       Show version
    --help, -h          Show this help message

ENVIRONMENT:
    SOUVENIR_LOG        Log level (trace, debug, info, warn, error)

Config file location: $XDG_CONFIG_HOME/souvenir/config.toml"#
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = parse_args();

    // Initialize logging (uses journald on Linux, file fallback otherwise)
    let _ = logging::init(Some(Config::config_dir().join("logs")));

    // Load configuration
    let config = match args.config_path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app; App::new activates the home page
    let mut app = App::new(config)?;
    if let Some(page) = args.page {
        app.show_page_named(&page);
    }
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
