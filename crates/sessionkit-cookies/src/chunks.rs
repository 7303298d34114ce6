//! Splitting oversized cookie values across multiple cookies.

/// Largest percent-encoded value size stored in a single cookie.
///
/// Browsers cap a whole cookie around 4096 bytes; this leaves room for the
/// name and attributes.
pub const MAX_CHUNK_SIZE: usize = 3180;

/// One cookie-sized slice of a stored value.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    /// Cookie name this slice is stored under.
    pub name: String,
    /// Slice of the stored value.
    pub value: String,
}

/// Splits `value` into cookies whose encoded form fits `chunk_size`
/// (defaulting to [`MAX_CHUNK_SIZE`]).
///
/// A value that fits is returned as a single entry under `key`; larger
/// values become `key.0`, `key.1`, ... slices, split on character
/// boundaries.
pub fn create_chunks(key: &str, value: &str, chunk_size: Option<usize>) -> Vec<Chunk> {
    let chunk_size = chunk_size.unwrap_or(MAX_CHUNK_SIZE);
    if encoded_len(value) <= chunk_size {
        return vec![Chunk {
            name: key.to_string(),
            value: value.to_string(),
        }];
    }

    let mut slices = Vec::new();
    let mut head = String::new();
    let mut head_encoded = 0;
    for ch in value.chars() {
        let ch_encoded = encoded_char_len(ch);
        if head_encoded + ch_encoded > chunk_size && !head.is_empty() {
            slices.push(std::mem::take(&mut head));
            head_encoded = 0;
        }
        head.push(ch);
        head_encoded += ch_encoded;
    }
    if !head.is_empty() {
        slices.push(head);
    }

    slices
        .into_iter()
        .enumerate()
        .map(|(i, value)| Chunk {
            name: format!("{key}.{i}"),
            value,
        })
        .collect()
}

/// Reassembles a value stored by [`create_chunks`].
///
/// The unchunked cookie under `key` wins when present; otherwise `key.0`,
/// `key.1`, ... are concatenated until the first miss. An empty value
/// reads as a miss, since deletion stages an empty value.
pub fn combine_chunks(key: &str, get: impl Fn(&str) -> Option<String>) -> Option<String> {
    if let Some(value) = get(key).filter(|value| !value.is_empty()) {
        return Some(value);
    }

    let mut combined = String::new();
    for i in 0.. {
        match get(&format!("{key}.{i}")).filter(|chunk| !chunk.is_empty()) {
            Some(chunk) => combined.push_str(&chunk),
            None => break,
        }
    }

    if combined.is_empty() {
        None
    } else {
        Some(combined)
    }
}

fn encoded_len(value: &str) -> usize {
    value.chars().map(encoded_char_len).sum()
}

// Percent-encoded size of one character in a cookie value.
fn encoded_char_len(ch: char) -> usize {
    if ch.is_ascii_alphanumeric()
        || matches!(ch, '-' | '_' | '.' | '!' | '~' | '*' | '\'' | '(' | ')')
    {
        1
    } else {
        3 * ch.len_utf8()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn as_map(chunks: &[Chunk]) -> HashMap<String, String> {
        chunks
            .iter()
            .map(|chunk| (chunk.name.clone(), chunk.value.clone()))
            .collect()
    }

    #[test]
    fn test_small_value_stays_unchunked() {
        let chunks = create_chunks("session", "short", None);

        assert_eq!(
            chunks,
            vec![Chunk {
                name: "session".to_string(),
                value: "short".to_string(),
            }]
        );
    }

    #[test]
    fn test_large_value_is_chunked_and_recombines() {
        let value = "a".repeat(9000);
        let chunks = create_chunks("session", &value, None);

        assert!(chunks.len() > 1);
        assert_eq!(chunks[0].name, "session.0");
        assert_eq!(chunks[1].name, "session.1");

        let stored = as_map(&chunks);
        let combined = combine_chunks("session", |name| stored.get(name).cloned());
        assert_eq!(combined, Some(value));
    }

    #[test]
    fn test_chunks_respect_encoded_budget() {
        // Every character percent-encodes to three bytes.
        let value = ";".repeat(300);
        let chunks = create_chunks("session", &value, Some(100));

        for chunk in &chunks {
            assert!(chunk.value.len() * 3 <= 100);
        }

        let stored = as_map(&chunks);
        assert_eq!(
            combine_chunks("session", |name| stored.get(name).cloned()),
            Some(value)
        );
    }

    #[test]
    fn test_multibyte_values_split_on_char_boundaries() {
        let value = "ü".repeat(200);
        let chunks = create_chunks("session", &value, Some(60));

        let stored = as_map(&chunks);
        assert_eq!(
            combine_chunks("session", |name| stored.get(name).cloned()),
            Some(value)
        );
    }

    #[test]
    fn test_combine_prefers_unchunked_cookie() {
        let mut stored = HashMap::new();
        stored.insert("session".to_string(), "whole".to_string());
        stored.insert("session.0".to_string(), "stale".to_string());

        assert_eq!(
            combine_chunks("session", |name| stored.get(name).cloned()),
            Some("whole".to_string())
        );
    }

    #[test]
    fn test_combine_treats_empty_as_missing() {
        let mut stored = HashMap::new();
        stored.insert("session".to_string(), String::new());
        stored.insert("session.0".to_string(), "from-chunks".to_string());

        assert_eq!(
            combine_chunks("session", |name| stored.get(name).cloned()),
            Some("from-chunks".to_string())
        );
    }

    #[test]
    fn test_combine_with_nothing_stored() {
        assert_eq!(combine_chunks("session", |_| None), None);
    }
}
