use colored::Colorize;
use ghup::core::format::format_size;
use ghup::token::{resolve_token, TOKEN_ENV};
use ghup::upload::{ClientSettings, ContentsClient, ContentsProvider, FileInput, UploadForm};
use ghup::{Config, GhupResult, KeychainStore, SecretStore, UploadResponse, UploadedFile};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

pub struct UploadOptions {
    pub file: PathBuf,
    pub token: Option<String>,
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub branch: Option<String>,
    pub path: Option<String>,
    pub message: Option<String>,
    pub api_url: Option<String>,
    pub json: bool,
}

pub async fn run(options: UploadOptions) -> GhupResult<()> {
    let config = Config::load()?;

    let mut settings = ClientSettings::from_config(&config);
    if let Some(ref api_url) = options.api_url {
        settings.api_url = api_url.clone();
    }
    let client = ContentsClient::new(&settings)?;

    run_with(options, &config, &KeychainStore, &client).await
}

pub async fn run_with(
    options: UploadOptions,
    config: &Config,
    store: &dyn SecretStore,
    provider: &dyn ContentsProvider,
) -> GhupResult<()> {
    let json = options.json;
    let result = upload_file(options, config, store, provider).await;

    if json {
        let envelope = match &result {
            Ok(file) => UploadResponse::success(file),
            Err(e) => UploadResponse::failure(e.public_message()),
        };
        let text = serde_json::to_string_pretty(&envelope)
            .map_err(|e| ghup::GhupError::Config(format!("Failed to render JSON: {}", e)))?;
        println!("{}", text);
    } else if let Ok(ref file) = result {
        println!("{} Uploaded to GitHub", "✓".green());
        println!("  File:     {}", file.html_url);
        println!("  Download: {}", file.download_url);
    }

    result.map(|_| ())
}

/// Build the form from flags, saved defaults and the token sources, then upload.
async fn upload_file(
    options: UploadOptions,
    config: &Config,
    store: &dyn SecretStore,
    provider: &dyn ContentsProvider,
) -> GhupResult<UploadedFile> {
    let file = FileInput::read(&options.file)?;

    let token = resolve_token(options.token, std::env::var(TOKEN_ENV).ok(), store);
    if let Some((_, source)) = &token {
        tracing::debug!("Using token from {}", source);
    }

    let form = UploadForm {
        token: token.map(|(t, _)| t),
        owner: options.owner.or_else(|| config.owner.clone()),
        repo: options.repo.or_else(|| config.repo.clone()),
        branch: options.branch.or_else(|| config.branch.clone()),
        path: options.path,
        commit_message: options.message,
        file: Some(file),
    };

    if options.json {
        return ghup::upload::upload(provider, form).await;
    }

    // Validate up front so the summary line shows the resolved defaults
    let request = form.clone().validate()?;
    println!(
        "Uploading {} ({}) to {}/{}@{}:{}",
        options.file.display(),
        format_size(request.content().len() as u64),
        request.owner(),
        request.repo(),
        request.branch(),
        request.path()
    );

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Waiting for GitHub...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = ghup::upload::upload(provider, form).await;
    spinner.finish_and_clear();
    result
}
