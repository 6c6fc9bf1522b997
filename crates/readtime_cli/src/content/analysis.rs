use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use readtime::{FieldValue, ReadTimeInput};
use tokio::fs;

use crate::Context;

use super::{markdown, report::FileReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Json,
    Markdown,
    Html,
    Text,
}

impl ContentKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ParsedContent {
    pub title: Option<String>,
    pub input: ReadTimeInput,
}

pub async fn analyze_file(context: Arc<Context>, path: PathBuf) -> anyhow::Result<FileReport> {
    tracing::info!("Analyzing file '{}'", path.display());

    let Some(kind) = ContentKind::from_path(&path) else {
        anyhow::bail!("Unsupported content file '{}'.", path.display());
    };

    let file_content = fs::read_to_string(&path).await?;
    let parsed = parse_content(kind, file_content)?;
    let result = readtime::read_time(&parsed.input, context.args.show_seconds(), &context.settings);

    Ok(FileReport::new(
        path,
        parsed.title,
        &result,
        context.args.format.as_deref(),
    ))
}

pub fn parse_content(kind: ContentKind, mut file_content: String) -> anyhow::Result<ParsedContent> {
    let parsed = match kind {
        ContentKind::Json => {
            let input = ReadTimeInput::from_json_str(&file_content)?;
            let title = match &input {
                ReadTimeInput::Document(document) => document.title.clone(),
                _ => None,
            };

            ParsedContent { title, input }
        }
        ContentKind::Markdown => {
            let mut front_matter = markdown::extract_front_matter(&mut file_content);
            ParsedContent {
                title: front_matter.remove("title"),
                input: ReadTimeInput::Value(FieldValue::Markdown(file_content)),
            }
        }
        ContentKind::Html => ParsedContent {
            title: None,
            input: ReadTimeInput::Value(FieldValue::RichText(file_content)),
        },
        ContentKind::Text => ParsedContent {
            title: None,
            input: ReadTimeInput::Value(FieldValue::Text(file_content)),
        },
    };

    Ok(parsed)
}
