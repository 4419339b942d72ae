//! CLI entrypoint for folio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use folio_application::LoadPageUseCase;
use folio_infrastructure::{ConfigLoader, FileConfig, LocalPhotoLoader, TomlContentSource};
use folio_presentation::{Cli, ConsoleFormatter, DumpFormat, TuiApp};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = file_config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    // Logging must outlive the TUI; the guard flushes the file writer on drop
    let _log_guard = init_logging(&cli, &file_config)?;
    info!("Starting folio");

    let mut config = file_config.to_folio_config();
    if cli.no_rotate {
        config.rotation = config.rotation.with_enabled(false);
    }
    if cli.no_reveal {
        config.reveal = config.reveal.with_enabled(false);
    }

    // === Dependency Injection ===
    let content_path = cli
        .content
        .clone()
        .or_else(|| file_config.content.path.as_ref().map(PathBuf::from));

    // Photo paths in a content file resolve against that file's directory
    let mut photo_loader = LocalPhotoLoader::new();
    if let Some(dir) = content_path.as_deref().and_then(Path::parent)
        && !dir.as_os_str().is_empty()
    {
        photo_loader = photo_loader.with_base_dir(dir);
    }

    let photo_override = match &cli.photo {
        Some(path) => Some(absolute_from_cwd(path)),
        None => file_config.photo.path.clone(),
    };

    let content_source = Arc::new(TomlContentSource::new(content_path));
    let use_case = LoadPageUseCase::new(content_source, Arc::new(photo_loader))
        .with_photo(photo_override);
    let page = use_case.execute().context("Failed to load page content")?;

    // Non-interactive output
    if let Some(format) = cli.dump {
        let output = match format {
            DumpFormat::Text => ConsoleFormatter::format(&page),
            DumpFormat::Json => ConsoleFormatter::format_json(&page),
        };
        println!("{}", output);
        return Ok(());
    }

    let mut app = TuiApp::new(page, config)
        .with_tick_rate(Duration::from_millis(file_config.tui.tick_ms));
    app.run().await.context("Terminal UI failed")?;

    info!("folio exited");
    Ok(())
}

/// Initialize tracing. The TUI owns the terminal, so interactive runs log to
/// a file; `--dump` runs log to stderr.
fn init_logging(cli: &Cli, config: &FileConfig) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.dump.is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.tui.log_file.as_ref().map(PathBuf::from))
        .or_else(default_log_path);
    let Some(log_path) = log_path else {
        // Nowhere to write; stay silent rather than corrupt the screen
        return Ok(None);
    };

    let dir = match log_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", log_path.display()))?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(non_blocking)
        .init();

    info!("Logging to {}", log_path.display());
    Ok(Some(guard))
}

/// `$XDG_STATE_HOME/folio/folio.log`, falling back to the cache directory
fn default_log_path() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .map(|dir| dir.join("folio").join("folio.log"))
}

fn absolute_from_cwd(path: &str) -> String {
    let path = Path::new(path);
    if path.is_absolute() {
        return path.display().to_string();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path).display().to_string())
        .unwrap_or_else(|_| path.display().to_string())
}
