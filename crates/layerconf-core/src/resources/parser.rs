//! `key=value` property text parser

use crate::types::PropertySet;

use super::traits::{LoadError, LoadResult};

/// Parse property-file text into an ordered set
///
/// A leading byte-order mark is ignored. Each non-blank, non-comment line is split at its first `=` and both
/// sides are trimmed. A line without `=` fails the whole parse. When a key
/// repeats, the last value wins and the first position is kept.
///
/// `name` is only used for error reporting.
///
/// # Example
///
/// ```
/// use layerconf_core::resources::parse_properties;
///
/// let props = parse_properties("app", "# app\nname = demo\nurl=http://x?a=b\n").unwrap();
/// assert_eq!(props.get("name"), Some("demo"));
/// assert_eq!(props.get("url"), Some("http://x?a=b"));
/// ```
pub fn parse_properties(name: &str, text: &str) -> LoadResult<PropertySet> {
    let mut props = PropertySet::new();
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(LoadError::Malformed {
                name: name.to_string(),
                line: idx + 1,
                content: trimmed.to_string(),
            });
        };

        props.insert(key.trim(), value.trim());
    }

    Ok(props)
}
