use std::path::PathBuf;

use readtime::DurationResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
    pub human: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
}

impl FileReport {
    pub fn new(
        path: PathBuf,
        title: Option<String>,
        result: &DurationResult,
        format: Option<&str>,
    ) -> Self {
        Self {
            path,
            title,
            seconds: result.seconds(),
            minutes: result.minutes(),
            hours: result.hours(),
            human: result.human(),
            interval: format.map(|format| result.interval(format)),
        }
    }
}

/// The interval rendering when a format was given, the human one otherwise.
pub fn display(result: &DurationResult, format: Option<&str>) -> String {
    match format {
        Some(format) => result.interval(format),
        None => result.human(),
    }
}

pub fn render_lines(reports: &[FileReport]) -> String {
    let mut output = String::new();
    for report in reports {
        let duration = report.interval.as_deref().unwrap_or(&report.human);
        match &report.title {
            Some(title) => output.push_str(&format!(
                "{} ({}): {}\n",
                report.path.display(),
                title,
                duration
            )),
            None => output.push_str(&format!("{}: {}\n", report.path.display(), duration)),
        }
    }

    output
}
