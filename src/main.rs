//! grapho - CLI entry point.

use std::path::PathBuf;

use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

use grapho::config::ConfigStore;
use grapho::git::{GitCli, SystemRunner};
use grapho::lang::Language;
use grapho::llm::GroqClient;
use grapho::session::{Session, TermPrompter};

/// Stage files and commit with AI-generated conventional commit messages.
#[derive(Parser, Debug)]
#[command(name = "grapho")]
#[command(about = "Stage files and commit with AI-generated commit messages")]
#[command(version)]
struct Cli {
    /// Interface language for prompts and notices
    #[arg(long, value_enum, default_value = "id")]
    lang: Language,

    /// Path to the config file holding the API key (defaults to
    /// ~/.grapho-config.json)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("grapho=warn".parse().expect("valid filter directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let messages = cli.lang.messages();

    // Every failure is reported but never changes the exit code. Files
    // staged before a failure stay staged.
    if let Err(error) = run(cli).await {
        eprintln!("{} {error:#}", style(messages.error_occurred).red());
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => ConfigStore::default_path()?,
    };

    let store = ConfigStore::new(config_path);
    let git = GitCli::new(SystemRunner, cli.lang.messages());
    let completer = GroqClient::new();
    let prompter = TermPrompter;

    let session = Session {
        git: &git,
        completer: &completer,
        store: &store,
        prompter: &prompter,
        language: cli.lang,
    };

    session.run().await?;
    Ok(())
}
