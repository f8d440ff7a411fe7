use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use walletchat_core::session::TOKEN_KEY;
use walletchat_core::{ChatClient, ChatRequest, Config, SessionStore};

#[derive(Parser)]
#[command(name = "walletchat")]
#[command(about = "Ask the expense tracker AI about your wallets", long_about = None)]
struct Cli {
    /// Session file holding the bearer token
    #[arg(long, default_value = "walletchat-session.json", global = true)]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the AI assistant a question about a wallet
    Ask {
        /// The question to send
        question: String,

        /// Wallet to ask about
        #[arg(short, long)]
        wallet: String,
    },

    /// Manage the stored bearer token
    Token {
        #[command(subcommand)]
        command: TokenCommands,
    },
}

#[derive(Subcommand)]
enum TokenCommands {
    /// Store a bearer token in the session file
    Set {
        /// Token value, as issued at sign-in
        token: String,
    },

    /// Show whether a token is currently stored
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let session = SessionStore::load(&cli.session)?;

    match cli.command {
        Commands::Ask { question, wallet } => {
            ask_command(&session, question, wallet).await?;
        }
        Commands::Token { command } => match command {
            TokenCommands::Set { token } => {
                let mut session = session;
                session.set(TOKEN_KEY, token);
                session.save()?;
                println!("Token stored in {}", session.path().display());
            }
            TokenCommands::Show => {
                match session.token() {
                    Some(_) => println!("A token is stored in {}", session.path().display()),
                    None => println!("No token stored (requests will be unauthenticated)"),
                }
            }
        },
    }

    Ok(())
}

async fn ask_command(session: &SessionStore, question: String, wallet: String) -> Result<()> {
    let config = Config::from_env()?;
    debug!(base_url = %config.api_base_url, "using backend");

    let client = ChatClient::from_parts(&config, session);
    let answer = client
        .send_chat_message(&ChatRequest::new(question, wallet))
        .await
        .context("Chat request failed")?;

    println!("{answer}");
    Ok(())
}
