use std::collections::HashMap;
use uuid::Uuid;

use crate::error::{Result, TrackerError};

/// Metadata keys understood by the `log` and `edit-log` commands.
pub const SESSION_KEYS: [&str; 4] = ["date", "type", "notes", "topic"];

#[derive(Debug, PartialEq)]
pub struct ParsedInput {
    pub name: String,
    pub metadata: HashMap<String, String>,
}

/// Splits free-form arguments into plain words and `key:value` pairs.
pub fn parse_args(args: &[String]) -> ParsedInput {
    let mut name_parts = Vec::new();
    let mut metadata = HashMap::new();

    for arg in args {
        if let Some((key, value)) = arg.split_once(':') {
            if !key.is_empty() && !key.contains(' ') {
                metadata.insert(key.to_string(), value.to_string());
                continue;
            }
        }
        name_parts.push(arg.as_str());
    }

    ParsedInput {
        name: name_parts.join(" "),
        metadata,
    }
}

pub fn expand_key(key: &str, candidates: &[&str]) -> Result<String> {
    if candidates.contains(&key) {
        return Ok(key.to_string());
    }

    let matches: Vec<&str> = candidates
        .iter()
        .filter(|&&c| c.starts_with(key))
        .cloned()
        .collect();

    match matches.len() {
        1 => Ok(matches[0].to_string()),
        0 => Err(TrackerError::UnknownKey(key.to_string())),
        _ => Err(TrackerError::AmbiguousKey {
            key: key.to_string(),
            candidates: matches.into_iter().map(str::to_string).collect(),
        }),
    }
}

/// Expands every metadata key, failing on the first unknown or ambiguous one.
pub fn normalize_metadata(
    metadata: HashMap<String, String>,
    candidates: &[&str],
) -> Result<HashMap<String, String>> {
    metadata
        .into_iter()
        .map(|(key, value)| Ok((expand_key(&key, candidates)?, value)))
        .collect()
}

/// Resolves a full ID or a unique prefix of one (as printed in short form).
pub fn resolve_id<I>(input: &str, ids: I) -> Result<Option<Uuid>>
where
    I: IntoIterator<Item = Uuid>,
{
    let needle = input.trim().to_lowercase();
    if let Ok(id) = Uuid::parse_str(&needle) {
        return Ok(ids.into_iter().find(|candidate| *candidate == id));
    }
    if needle.is_empty() {
        return Ok(None);
    }

    let mut found = ids
        .into_iter()
        .filter(|id| id.to_string().starts_with(&needle));
    match (found.next(), found.next()) {
        (Some(id), None) => Ok(Some(id)),
        (None, _) => Ok(None),
        (Some(_), Some(_)) => Err(TrackerError::AmbiguousId(input.to_string())),
    }
}

/// Like [`resolve_id`], but a well-formed ID or prefix with no match is
/// reported as `NotFound`; anything else is a parse error.
pub fn find_id<I>(kind: &'static str, input: &str, ids: I) -> Result<Uuid>
where
    I: IntoIterator<Item = Uuid>,
{
    if let Some(id) = resolve_id(input, ids)? {
        return Ok(id);
    }
    let needle = input.trim();
    if !needle.is_empty() && needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        Err(TrackerError::NotFound {
            kind,
            id: needle.to_string(),
        })
    } else {
        Err(TrackerError::Parse {
            what: "ID",
            input: input.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let args = vec![
            "Docker".to_string(),
            "networking".to_string(),
            "date:yesterday".to_string(),
            "type:evening".to_string(),
        ];
        let parsed = parse_args(&args);
        assert_eq!(parsed.name, "Docker networking");
        assert_eq!(parsed.metadata.get("date"), Some(&"yesterday".to_string()));
        assert_eq!(parsed.metadata.get("type"), Some(&"evening".to_string()));
    }

    #[test]
    fn test_leading_colon_is_part_of_topic() {
        let parsed = parse_args(&[":colon".to_string()]);
        assert_eq!(parsed.name, ":colon");
        assert!(parsed.metadata.is_empty());
    }

    #[test]
    fn test_expand_key() {
        assert_eq!(expand_key("d", &SESSION_KEYS).unwrap(), "date");
        assert_eq!(expand_key("ty", &SESSION_KEYS).unwrap(), "type");
        assert_eq!(expand_key("n", &SESSION_KEYS).unwrap(), "notes");
        assert_eq!(expand_key("topic", &SESSION_KEYS).unwrap(), "topic");

        // Ambiguous: type, topic
        assert!(matches!(
            expand_key("t", &SESSION_KEYS),
            Err(TrackerError::AmbiguousKey { .. })
        ));
        assert!(matches!(
            expand_key("x", &SESSION_KEYS),
            Err(TrackerError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_normalize_metadata() {
        let parsed = parse_args(&["d:today".to_string(), "ty:morning".to_string()]);
        let normalized = normalize_metadata(parsed.metadata, &SESSION_KEYS).unwrap();
        assert_eq!(normalized.get("date").map(String::as_str), Some("today"));
        assert_eq!(normalized.get("type").map(String::as_str), Some("morning"));
    }

    #[test]
    fn test_resolve_id() {
        let a = Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000001").unwrap();
        let b = Uuid::parse_str("a1b2ffff-0000-4000-8000-000000000002").unwrap();
        let ids = [a, b];

        assert_eq!(resolve_id(&a.to_string(), ids).unwrap(), Some(a));
        assert_eq!(resolve_id("a1b2c3", ids).unwrap(), Some(a));
        assert_eq!(resolve_id("A1B2F", ids).unwrap(), Some(b));
        assert_eq!(resolve_id("ffff", ids).unwrap(), None);
        assert!(matches!(resolve_id("a1b2", ids), Err(TrackerError::AmbiguousId(_))));
    }

    #[test]
    fn test_find_id_distinguishes_unknown_from_malformed() {
        let a = Uuid::parse_str("a1b2c3d4-0000-4000-8000-000000000001").unwrap();

        assert_eq!(find_id("Thing", "a1b2", [a]).unwrap(), a);
        assert!(matches!(
            find_id("Thing", "ffff", [a]),
            Err(TrackerError::NotFound { kind: "Thing", .. })
        ));
        assert!(matches!(
            find_id("Thing", "00000000-0000-4000-8000-000000000000", [a]),
            Err(TrackerError::NotFound { .. })
        ));
        assert!(matches!(find_id("Thing", "zzzz", [a]), Err(TrackerError::Parse { .. })));
        assert!(matches!(find_id("Thing", "  ", [a]), Err(TrackerError::Parse { .. })));
    }
}
