use std::borrow::Cow;

use pulldown_cmark::{Event, Parser, TagEnd};
use quick_xml::{events::Event as XmlEvent, Reader};

/// Drops tags from rich text, keeping only the readable content. Element
/// boundaries become spaces so `<p>a</p><p>b</p>` counts as two words.
///
/// Never loses content: if the markup cannot be read past some point, the
/// rest of the input is kept as is.
pub(super) fn strip_markup(html: &str) -> String {
    let html = escape_stray_brackets(html);
    let mut reader = Reader::from_str(&html);
    reader.check_end_names(false);

    let mut text = String::with_capacity(html.len());
    loop {
        let position = reader.buffer_position();
        match reader.read_event() {
            Ok(XmlEvent::Text(e)) => match e.unescape() {
                Ok(unescaped) => text.push_str(&unescaped),
                // Unknown HTML entities such as `&nbsp;`.
                Err(_) => text.push_str(&String::from_utf8_lossy(&e)),
            },
            Ok(XmlEvent::CData(e)) => text.push_str(&String::from_utf8_lossy(&e)),
            Ok(XmlEvent::Start(_)) | Ok(XmlEvent::End(_)) | Ok(XmlEvent::Empty(_)) => {
                text.push(' ')
            }
            Ok(XmlEvent::Eof) => break,
            Ok(_) => (),
            Err(error) => {
                tracing::debug!(
                    "Unable to read markup at position {}, keeping the rest as text: {}",
                    position,
                    error
                );
                text.push(' ');
                text.push_str(html.get(position..).unwrap_or_default());
                break;
            }
        }
    }

    text
}

/// A `<` that cannot open a tag is text, as in `3 < 4`.
fn escape_stray_brackets(html: &str) -> Cow<'_, str> {
    let is_stray = |index: usize| {
        !matches!(
            html[index + 1..].chars().next(),
            Some(c) if c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?')
        )
    };

    if !html.match_indices('<').any(|(index, _)| is_stray(index)) {
        return Cow::Borrowed(html);
    }

    let mut escaped = String::with_capacity(html.len() + 8);
    for (index, c) in html.char_indices() {
        if c == '<' && is_stray(index) {
            escaped.push_str("&lt;");
        } else {
            escaped.push(c);
        }
    }

    Cow::Owned(escaped)
}

pub(super) fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::with_capacity(markdown.len());
    for event in Parser::new(markdown) {
        match event {
            Event::Text(value) | Event::Code(value) => text.push_str(&value),
            Event::Html(html) | Event::InlineHtml(html) => text.push_str(&strip_markup(&html)),
            // Inline formatting may sit inside a word.
            Event::End(
                TagEnd::Emphasis
                | TagEnd::Strong
                | TagEnd::Strikethrough
                | TagEnd::Link
                | TagEnd::Image,
            ) => (),
            Event::SoftBreak | Event::HardBreak | Event::End(_) => text.push(' '),
            _ => (),
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<&str> {
        text.split_whitespace().collect()
    }

    #[test]
    fn test_strip_markup() {
        let text = strip_markup("<p>Hello <strong>big</strong> world</p><p>again</p>");
        assert_eq!(words(&text), ["Hello", "big", "world", "again"]);
    }

    #[test]
    fn test_strip_markup_keeps_entities() {
        let text = strip_markup("<p>fish &amp; chips</p>");
        assert_eq!(text.trim(), "fish & chips");

        let text = strip_markup("<p>a&nbsp;b</p>");
        assert!(text.contains("&nbsp;"));
    }

    #[test]
    fn test_strip_markup_tolerates_unclosed_elements() {
        let text = strip_markup("<p>first<br>second</p>");
        assert_eq!(words(&text), ["first", "second"]);
    }

    #[test]
    fn test_strip_markup_keeps_literal_brackets() {
        let text = strip_markup("<p>one two</p><p>if a < b then</p>");
        assert_eq!(words(&text), ["one", "two", "if", "a", "<", "b", "then"]);

        let text = strip_markup("<p>and 3 < 4");
        assert_eq!(words(&text), ["and", "3", "<", "4"]);

        let text = strip_markup("x <= y <");
        assert_eq!(words(&text), ["x", "<=", "y", "<"]);
    }

    #[test]
    fn test_strip_markup_keeps_text_before_truncated_tag() {
        let text = strip_markup("<p>text here</p><img src=\"a.png\"");
        let words = words(&text);
        assert_eq!(words[..2], ["text", "here"]);
        assert!(words.len() > 2);
    }

    #[test]
    fn test_markdown_to_text() {
        let text = markdown_to_text("# Title\n\nSome *emphasis* and `code`.\n\n- one\n- two\n");
        assert_eq!(
            words(&text),
            ["Title", "Some", "emphasis", "and", "code.", "one", "two"]
        );
    }

    #[test]
    fn test_markdown_inline_emphasis_keeps_words_whole() {
        let text = markdown_to_text("**un**believable and [linked](https://example.com)text");
        assert_eq!(words(&text), ["unbelievable", "and", "linkedtext"]);
    }

    #[test]
    fn test_markdown_counts_embedded_html() {
        let text = markdown_to_text(
            "Intro\n\n<div>\nhidden block words\n</div>\n\nsome <span>inline</span> html\n",
        );
        assert_eq!(
            words(&text),
            ["Intro", "hidden", "block", "words", "some", "inline", "html"]
        );
    }
}
