use std::collections::HashMap;

const FRONT_MATTER_KEY: &str = "---";

/// Removes a leading front matter block from `file_content` and returns its
/// `key: value` pairs. The block must open on the first line with `---`, hold
/// only `key: value` or blank lines, and close with a `---` line. Anything else,
/// such as a document opening with a thematic break, is left untouched.
pub fn extract_front_matter(file_content: &mut String) -> HashMap<String, String> {
    let Some(body) = file_content
        .strip_prefix("---\n")
        .or_else(|| file_content.strip_prefix("---\r\n"))
    else {
        return HashMap::default();
    };

    let mut result = HashMap::new();
    let mut end = None;
    let mut offset = file_content.len() - body.len();
    for line in body.split_inclusive('\n') {
        offset += line.len();

        let line = line.trim_end();
        if line == FRONT_MATTER_KEY {
            end = Some(offset);
            break;
        }

        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = parse_variable(line) else {
            return HashMap::default();
        };
        result.insert(key.to_owned(), value.to_owned());
    }

    let Some(end) = end else {
        return HashMap::default();
    };

    file_content.replace_range(..end, "");
    tracing::trace!("Extracted {} front matter variables.", result.len());
    result
}

fn parse_variable(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let is_key = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    if !is_key {
        return None;
    }

    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|value| value.strip_suffix('"'))
        .unwrap_or(value);
    Some((key, value))
}
