use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use readtime::DurationResult;
use tokio::task::JoinSet;
use walkdir::WalkDir;

use crate::Context;

use self::analysis::ContentKind;

pub mod analysis;
pub mod markdown;
pub mod report;

pub use report::FileReport;

pub async fn process_content(context: &Arc<Context>) -> anyhow::Result<Vec<FileReport>> {
    let files = collect_files_for_processing(&context.args.path);
    if files.is_empty() {
        anyhow::bail!(
            "No supported content found at '{}'.",
            context.args.path.display()
        );
    }

    let mut set = JoinSet::new();
    for file in files {
        let context = context.clone();
        set.spawn(async move { analysis::analyze_file(context, file).await });
    }

    let mut reports = Vec::new();
    while let Some(result) = set.join_next().await {
        let result = match result {
            Ok(report) => report,
            Err(error) => {
                tracing::error!("Error in processing content: {}", error);
                continue;
            }
        };

        match result {
            Ok(report) => reports.push(report),
            Err(error) => {
                tracing::error!("Error in processing content: {}", error);
                continue;
            }
        }
    }

    reports.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(reports)
}

pub fn render(context: &Context, reports: &[FileReport]) -> anyhow::Result<String> {
    if context.args.json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }

    let mut output = report::render_lines(reports);
    if reports.len() > 1 {
        let seconds: u64 = reports.iter().map(|report| report.seconds).sum();
        let total = DurationResult::new(seconds, context.args.show_seconds());
        let display = report::display(&total, context.args.format.as_deref());
        output.push_str(&format!("total: {display}\n"));
    }

    Ok(output)
}

fn collect_files_for_processing(path: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for file in WalkDir::new(path).into_iter().filter_map(|file| file.ok()) {
        if !file.file_type().is_file() {
            continue;
        }

        if ContentKind::from_path(file.path()).is_none() {
            tracing::trace!("Skipped file '{}'.", file.path().display());
            continue;
        }

        files.push(file.path().to_path_buf());
        tracing::trace!(
            "Added file '{}' to processing tasks.",
            file.path().display()
        );
    }

    files
}
