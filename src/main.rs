use std::io::Read;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

mod app;
mod handler;
mod tui;
mod ui;

use app::App;
use dapp_form::{form, logging, BackendClient, Config, TokenRequest};

#[derive(Parser)]
#[command(name = "dapp-form", version)]
#[command(about = "Deploy Solana tokens and request AI recommendations from a dApp backend")]
struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, env = "DAPP_FORM_BASE_URL", global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a token described by a JSON file ("-" reads stdin)
    Deploy {
        /// Path to the token JSON
        file: PathBuf,
    },
    /// Ask the backend for recommendations
    Recommend {
        /// Your question
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },
    /// Print an example token JSON
    Template,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::new(), Some(e)),
    };
    // A read-only home should not stop the one-shot commands
    if let Err(e) = logging::init(config.log_filter.as_deref()) {
        eprintln!("warning: file logging disabled: {:#}", e);
    }
    if let Some(e) = config_error {
        tracing::warn!("ignoring unreadable config: {:#}", e);
    }

    let base_url = config.resolve_base_url(cli.base_url.as_deref());
    tracing::info!(%base_url, "using backend");
    let backend = BackendClient::new(&base_url);

    match cli.command {
        None => run_tui(backend).await?,
        Some(Commands::Deploy { file }) => {
            let draft = read_draft(&file)?;
            println!("{}", form::deploy_token(&backend, &draft).await);
        }
        Some(Commands::Recommend { prompt }) => {
            let prompt = prompt.join(" ");
            println!("{}", form::request_recommendations(&backend, &prompt).await);
        }
        Some(Commands::Template) => println!("{}", TokenRequest::example_json()),
    }

    Ok(())
}

fn read_draft(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut draft = String::new();
        std::io::stdin()
            .read_to_string(&mut draft)
            .context("reading token JSON from stdin")?;
        return Ok(draft);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

async fn run_tui(backend: BackendClient) -> Result<()> {
    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = tui::EventHandler::new();
    let mut app = App::new(backend);

    let result = run_app(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

async fn run_app(
    terminal: &mut tui::Tui,
    app: &mut App,
    events: &mut tui::EventHandler,
) -> Result<()> {
    let sender = events.sender();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event, &sender),
            None => break,
        }
    }

    tracing::info!("exiting");
    Ok(())
}
