use clap::{Parser, Subcommand};
use ghup::format_error_with_help;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "ghup")]
#[command(about = "Upload a file to a GitHub repository")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a single file through the GitHub contents API
    Upload {
        /// Local file to upload
        file: PathBuf,
        /// Personal access token (falls back to GITHUB_TOKEN, then the keychain)
        #[arg(short, long)]
        token: Option<String>,
        /// Repository owner (user or organization)
        #[arg(short, long)]
        owner: Option<String>,
        /// Repository name
        #[arg(short, long)]
        repo: Option<String>,
        /// Target branch [default: main]
        #[arg(short, long)]
        branch: Option<String>,
        /// Path in the repository [default: the file name]
        #[arg(short, long)]
        path: Option<String>,
        /// Commit message
        #[arg(short, long)]
        message: Option<String>,
        /// GitHub API base URL
        #[arg(long)]
        api_url: Option<String>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Store a GitHub token in the OS keychain
    Login {
        /// Token to store (prompted for when omitted)
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Remove the stored GitHub token
    Logout,
    /// Manage saved defaults
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Save default owner, repository, branch or API URL (an empty value clears it)
    Set {
        #[arg(long)]
        owner: Option<String>,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Show current settings
    Show,
    /// Reset settings to defaults
    Clear,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so `--json` output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Upload {
            file,
            token,
            owner,
            repo,
            branch,
            path,
            message,
            api_url,
            json,
        } => {
            cli::upload::run(cli::upload::UploadOptions {
                file,
                token,
                owner,
                repo,
                branch,
                path,
                message,
                api_url,
                json,
            })
            .await
        }
        Commands::Login { token } => cli::login::run(token).await,
        Commands::Logout => cli::logout::run(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Set {
                owner,
                repo,
                branch,
                api_url,
            } => cli::config::set(cli::config::ConfigUpdate {
                owner,
                repo,
                branch,
                api_url,
            }),
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Clear => cli::config::clear(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
