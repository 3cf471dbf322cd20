use std::fs;
use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use roster::banner::{BannerInfo, print_banner, print_session_summary};
use roster::commands::{CommandRegistry, CommandResult};
use roster::config::{Config, resolve_api_url};
use roster::consts::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, default_db_path};
use roster::input::StdinInput;
use roster::render;
use roster::session::Session;
use roster::source::UserSource;
use roster::source::http::HttpSource;

#[derive(Parser)]
#[command(name = "roster", version, about = "List, search, and edit users from a REST API.")]
struct Cli {
    /// Base URL of the REST API serving `/users` (overrides the saved endpoint)
    #[arg(short, long)]
    api_url: Option<String>,

    /// SQLite database for settings (use :memory: for ephemeral)
    #[arg(short, long)]
    db: Option<String>,

    /// HTTP timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Start with an empty list instead of fetching
    #[arg(long, default_value_t = false)]
    no_fetch: bool,

    /// Run a single command and exit (non-interactive)
    #[arg(short, long)]
    run: Option<String>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn open_config(db: Option<String>) -> anyhow::Result<(Config, String)> {
    let path = match db {
        Some(path) => path,
        None => {
            let path = default_db_path()?;
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            path.to_string_lossy().into_owned()
        }
    };
    let config = Config::open(&path)?;
    Ok((config, path))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (config, db_path) = open_config(cli.db)?;
    let api_url = resolve_api_url(cli.api_url.as_deref(), config.api_url()?, DEFAULT_API_URL);
    let timeout = Duration::from_secs(cli.timeout);
    let source = HttpSource::new(&api_url, timeout)?;

    let settings_label = if db_path == ":memory:" {
        "ephemeral".to_string()
    } else {
        db_path
    };

    let interactive = cli.run.is_none();
    if interactive {
        print_banner(&BannerInfo {
            endpoint: &source.describe(),
            settings: &settings_label,
            timeout_secs: cli.timeout,
        });
    }

    let mut session = Session::new(Box::new(source), Box::new(StdinInput::new()), config)
        .with_timeout(timeout)
        .with_spinner(std::io::stderr().is_terminal());
    let registry = CommandRegistry::new();

    if !cli.no_fetch {
        let interrupted = tokio::select! {
            _ = session.fetch_users() => false,
            _ = tokio::signal::ctrl_c() => true,
        };
        if interrupted {
            session.interrupted();
            println!("\ninterrupted");
        }
    }

    // Single command mode
    if let Some(line) = cli.run {
        registry.run_line(&line, &mut session).await;
        return Ok(());
    }

    print!("{}", render::user_list(session.state(), session.search()));

    loop {
        // Read next line, interruptible by Ctrl+C
        let line = tokio::select! {
            result = session.read_line("\nroster> ") => {
                match result {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        // Ctrl+D (EOF)
                        println!();
                        break;
                    }
                    Err(e) => {
                        eprintln!("input error: {e}");
                        break;
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        // Ctrl+C during a command (e.g. a slow fetch) cancels it, not the REPL
        let interrupted = tokio::select! {
            result = registry.run_line(&line, &mut session) => {
                if result == CommandResult::Quit {
                    break;
                }
                false
            }
            _ = tokio::signal::ctrl_c() => true,
        };
        if interrupted {
            session.interrupted();
            println!("\n\ninterrupted");
        }
    }

    print_session_summary(session.stats());
    Ok(())
}
