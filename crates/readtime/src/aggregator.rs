use std::num::NonZeroU32;

use crate::{
    content::{Block, ContentDocument, Field, FieldLayout, FieldValue, ReadTimeInput},
    duration::DurationResult,
    settings::Settings,
    word_counter,
};

/// Repeater levels walked below a document: a repeater field, and one more
/// repeater inside its blocks.
const MAX_REPEATER_DEPTH: usize = 2;

/// Read time of anything accepted as [`ReadTimeInput`].
pub fn read_time(input: &ReadTimeInput, show_seconds: bool, settings: &Settings) -> DurationResult {
    match input {
        ReadTimeInput::Document(document) => {
            compute_from_document(document, show_seconds, settings)
        }
        ReadTimeInput::Blocks(blocks) => compute_from_blocks(blocks, show_seconds, settings),
        ReadTimeInput::Value(value) => compute_from_value(value, show_seconds, settings),
    }
}

/// Sums every field of the document, descending into repeater blocks and
/// into repeaters nested one level inside those blocks.
#[tracing::instrument(skip_all, fields(title = document.title.as_deref()))]
pub fn compute_from_document(
    document: &ContentDocument,
    show_seconds: bool,
    settings: &Settings,
) -> DurationResult {
    let words_per_minute = settings.words_per_minute;
    let seconds: u64 = document
        .fields()
        .iter()
        .map(|field| field_seconds(field, 0, words_per_minute))
        .sum();

    tracing::trace!("Document read time: {} seconds.", seconds);
    DurationResult::new(seconds, show_seconds)
}

/// Sums the fields of already extracted repeater blocks. Nested repeaters are
/// not walked here and count as zero.
#[tracing::instrument(skip_all, fields(blocks = blocks.len()))]
pub fn compute_from_blocks(
    blocks: &[Block],
    show_seconds: bool,
    settings: &Settings,
) -> DurationResult {
    let words_per_minute = settings.words_per_minute;
    let seconds: u64 = blocks
        .iter()
        .flat_map(|block| block.fields())
        .map(|field| scalar_seconds(field, words_per_minute))
        .sum();

    tracing::trace!("Blocks read time: {} seconds.", seconds);
    DurationResult::new(seconds, show_seconds)
}

pub fn compute_from_value(
    value: &FieldValue,
    show_seconds: bool,
    settings: &Settings,
) -> DurationResult {
    let seconds = match value.to_text() {
        Ok(text) => word_counter::seconds_for_text(&text, settings.words_per_minute),
        Err(failure) => {
            tracing::debug!("Unable to convert value to text: {}.", failure);
            0
        }
    };

    DurationResult::new(seconds, show_seconds)
}

/// `depth` is the number of repeaters already entered above `field`.
fn field_seconds(field: &Field, depth: usize, words_per_minute: NonZeroU32) -> u64 {
    match &field.value {
        FieldValue::Repeater(blocks) if depth < MAX_REPEATER_DEPTH => blocks
            .iter()
            .flat_map(|block| block.fields())
            .map(|nested| field_seconds(nested, depth + 1, words_per_minute))
            .sum(),
        _ => scalar_seconds(field, words_per_minute),
    }
}

fn scalar_seconds(field: &Field, words_per_minute: NonZeroU32) -> u64 {
    match field.value.to_text() {
        Ok(text) => {
            let seconds = word_counter::seconds_for_text(&text, words_per_minute);
            tracing::trace!("Field '{}' adds {} seconds.", field.handle, seconds);
            seconds
        }
        Err(failure) => {
            tracing::debug!("Skipping field '{}': {}.", field.handle, failure);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(count: usize) -> String {
        vec!["word"; count].join(" ")
    }

    fn text(handle: &str, count: usize) -> Field {
        Field::new(handle, FieldValue::Text(words(count)))
    }

    fn block(fields: Vec<Field>) -> Block {
        Block {
            block_type: None,
            fields,
        }
    }

    fn repeater(handle: &str, blocks: Vec<Block>) -> Field {
        Field::new(handle, FieldValue::Repeater(blocks))
    }

    fn document(fields: Vec<Field>) -> ContentDocument {
        ContentDocument { title: None, fields }
    }

    fn settings(words_per_minute: u32) -> Settings {
        Settings::new(words_per_minute).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let result = compute_from_document(&document(Vec::new()), true, &settings(200));
        assert_eq!(result.seconds(), 0);
    }

    #[test]
    fn test_single_scalar() {
        let document = document(vec![text("body", 200)]);
        let result = compute_from_document(&document, true, &settings(200));
        assert_eq!(result.seconds(), 60);
        assert!(result.show_seconds());
    }

    #[test]
    fn test_repeater_blocks_are_summed() {
        let body = repeater(
            "body",
            vec![block(vec![text("copy", 100)]), block(vec![text("copy", 100)])],
        );

        let result = compute_from_document(&document(vec![body]), false, &settings(200));
        assert_eq!(result.seconds(), 60);
        assert!(!result.show_seconds());
    }

    #[test]
    fn test_failing_field_contributes_zero() {
        let fields = vec![
            text("intro", 120),
            Field::new("gallery", FieldValue::Unsupported("assets".to_owned())),
            Field::new("related", FieldValue::Unsupported("entries".to_owned())),
        ];

        let result = compute_from_document(&document(fields), true, &settings(120));
        assert_eq!(result.seconds(), 60);
    }

    #[test]
    fn test_rich_text_with_literal_bracket_is_counted() {
        let html = format!("<p>{}</p><p>and 3 < 4", words(200));
        let body = Field::new("body", FieldValue::RichText(html));

        let result = compute_from_document(&document(vec![body]), true, &settings(200));
        assert!((60..=61).contains(&result.seconds()), "{}", result.seconds());
    }

    #[test]
    fn test_nested_repeater() {
        let nested = repeater("columns", vec![block(vec![text("cell", 50)])]);
        let table = repeater("table", vec![block(vec![nested, text("caption", 100)])]);
        let document = document(vec![table, text("title", 100)]);

        let result = compute_from_document(&document, true, &settings(100));
        assert_eq!(result.seconds(), 30 + 60 + 60);
    }

    #[test]
    fn test_third_level_repeater_is_not_walked() {
        let deepest = repeater("deepest", vec![block(vec![text("lost", 100)])]);
        let nested = repeater("nested", vec![block(vec![deepest, text("kept", 100)])]);
        let outer = repeater("outer", vec![block(vec![nested])]);

        let result = compute_from_document(&document(vec![outer]), true, &settings(100));
        assert_eq!(result.seconds(), 60);
    }

    #[test]
    fn test_each_field_is_rounded_down_separately() {
        // 50 words at 200 wpm is 15 seconds, 1 word is 0.3 seconds.
        let fields = vec![text("a", 50), text("b", 1), text("c", 1)];
        let result = compute_from_document(&document(fields), true, &settings(200));
        assert_eq!(result.seconds(), 15);
    }

    #[test]
    fn test_blocks_do_not_recurse() {
        let nested = repeater("nested", vec![block(vec![text("skipped", 100)])]);
        let blocks = vec![block(vec![text("copy", 100), nested]), block(vec![text("copy", 50)])];

        let result = compute_from_blocks(&blocks, true, &settings(100));
        assert_eq!(result.seconds(), 90);
    }

    #[test]
    fn test_single_value() {
        let result = compute_from_value(&FieldValue::Text(words(400)), true, &settings(200));
        assert_eq!(result.seconds(), 120);

        let result = compute_from_value(&FieldValue::Repeater(Vec::new()), true, &settings(200));
        assert_eq!(result.seconds(), 0);
    }

    #[test]
    fn test_read_time_dispatch() {
        let settings = settings(60);
        let input = ReadTimeInput::Value(FieldValue::Markdown("**one** two".to_owned()));
        assert_eq!(read_time(&input, true, &settings).seconds(), 2);

        let input = ReadTimeInput::Blocks(vec![block(vec![text("copy", 3)])]);
        assert_eq!(read_time(&input, true, &settings).seconds(), 3);

        let input = ReadTimeInput::Document(document(vec![text("copy", 4)]));
        assert_eq!(read_time(&input, false, &settings), DurationResult::new(4, false));
    }
}
