use ragchat::cli::{
    parse_args, run_interactive, run_once, version_line, CliCommand, USAGE,
};
use ragchat::client::RagClient;
use ragchat::config::ClientConfig;
use ragchat::render::TerminalRenderer;
use ragchat::session::ChatSession;

use color_eyre::Result;
use tokio::io::BufReader;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "RAGCHAT_LOG";

fn init_tracing() {
    // Logs go to stderr so the streamed answer on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let invocation = parse_args(std::env::args())?;

    let mut config = ClientConfig::from_env();
    if let Some(url) = invocation.url {
        config = config.with_base_url(url);
    }

    match invocation.command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    tracing::debug!(url = %config.ask_url(), "starting");

    let preview_chars = config.preview_chars;
    let mut session = ChatSession::new(RagClient::new(config)?);
    let mut renderer = TerminalRenderer::stdout(preview_chars);

    match invocation.command {
        CliCommand::Ask(query) => run_once(&mut session, &mut renderer, &query).await,
        _ => run_interactive(&mut session, &mut renderer, BufReader::new(tokio::io::stdin())).await,
    }
}
