pub mod content;

use std::{path::PathBuf, process::ExitCode, sync::Arc};

use clap::Parser;
use readtime::Settings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File or directory with content to measure
    path: PathBuf,
    /// Reading speed, takes precedence over the settings file
    #[arg(short, long)]
    words_per_minute: Option<u32>,
    /// Path to a JSON settings file, e.g. `{ "wordsPerMinute": 200 }`
    #[arg(short, long)]
    settings: Option<PathBuf>,
    /// Round to whole minutes and leave seconds out
    #[arg(long)]
    hide_seconds: bool,
    /// Interval template such as "%h hours, %i minutes, %s seconds"
    #[arg(short, long)]
    format: Option<String>,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    pub fn show_seconds(&self) -> bool {
        !self.hide_seconds
    }
}

#[derive(Debug)]
pub struct Context {
    args: Args,
    settings: Settings,
}

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(debug_assertions)]
    let mut logger;
    #[cfg(not(debug_assertions))]
    let logger;

    logger = tracing_subscriber::fmt().with_writer(std::io::stderr);
    #[cfg(debug_assertions)]
    {
        logger = logger.with_max_level(tracing::Level::TRACE);
    }
    logger.init();

    let args = Args::parse();
    let settings = match load_settings(&args).await {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("Failed to load settings: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let context = Arc::new(Context { args, settings });
    let reports = match content::process_content(&context).await {
        Ok(reports) => reports,
        Err(err) => {
            tracing::error!("Failed to process content: {}", err);
            return ExitCode::FAILURE;
        }
    };

    match content::render(&context, &reports) {
        Ok(output) => print!("{output}"),
        Err(err) => {
            tracing::error!("Failed to render report: {}", err);
            return ExitCode::FAILURE;
        }
    }

    tracing::info!("Measured {} files.", reports.len());
    ExitCode::SUCCESS
}

async fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = match &args.settings {
        Some(path) => {
            let json = tokio::fs::read_to_string(path).await?;
            Settings::from_json(&json)?
        }
        None => Settings::default(),
    };

    if let Some(words_per_minute) = args.words_per_minute {
        settings = Settings::new(words_per_minute)?;
    }

    tracing::debug!(
        "Reading at {} words per minute.",
        settings.words_per_minute
    );
    Ok(settings)
}
