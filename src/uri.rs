// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Concept-URI and relation-URI normalization, and the handful of constant
//! URI fragments used when completing an edge.

/// License URI attached to every edge this crate produces.
pub const CC_SHAREALIKE: &str = "cc:by-sa/4.0";

/// Joins URI path components with `/`, trimming any empty components.
pub fn join_uri(pieces: &[&str]) -> String {
    let mut uri = String::new();
    for piece in pieces {
        let piece = piece.trim_matches('/');
        if piece.is_empty() {
            continue;
        }
        uri.push('/');
        uri.push_str(piece);
    }
    if uri.is_empty() {
        uri.push('/');
    }
    uri
}

/// Lowercases and collapses whitespace the way ConceptNet-style concept URIs
/// expect their surface-form segments to be normalized.
fn normalize_segment(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Builds a normalized concept URI of the shape `/c/<lang>/<word>[/<pos>[/<sense>]]`.
///
/// `language` is expected to already be a short code; if it's absent we fall
/// back to `und` (undetermined), since a concept URI always needs a language
/// segment.
pub fn normalized_concept_uri(
    language: Option<&str>,
    word: &str,
    pos: Option<&str>,
    sense: Option<&str>,
) -> String {
    let language = language.unwrap_or("und");
    let mut pieces = vec!["c".to_string(), language.to_string(), normalize_segment(word)];
    if let Some(pos) = pos {
        pieces.push(pos.to_string());
        if let Some(sense) = sense {
            let sense = normalize_segment(sense);
            if !sense.is_empty() {
                pieces.push(sense);
            }
        }
    }
    let refs: Vec<&str> = pieces.iter().map(|s| s.as_str()).collect();
    join_uri(&refs)
}

/// Builds a relation URI of the shape `/r/<Relation>`.
pub fn relation_uri(relation: &str) -> String {
    join_uri(&["r", relation])
}

/// Builds the source-web-page URI for a head word.
pub fn wiki_page_uri(headword: &str) -> String {
    join_uri(&["s", "web", "en.wiktionary.org", "wiki", headword])
}

/// Builds the source-rule URI for a named extraction rule.
pub fn rule_uri(rule_name: &str) -> String {
    join_uri(&["s", "rule", rule_name])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_basic_word() {
        assert_eq!(normalized_concept_uri(Some("en"), "Water", None, None), "/c/en/water");
    }

    #[test]
    fn normalizes_with_pos_and_sense() {
        assert_eq!(
            normalized_concept_uri(Some("en"), "chat", Some("n"), Some("conversation")),
            "/c/en/chat/n/conversation"
        );
    }

    #[test]
    fn missing_language_falls_back_to_und() {
        assert_eq!(normalized_concept_uri(None, "foo", None, None), "/c/und/foo");
    }

    #[test]
    fn relation_and_rule_uris() {
        assert_eq!(relation_uri("IsA"), "/r/IsA");
        assert_eq!(rule_uri("translation_section"), "/s/rule/translation_section");
        assert_eq!(wiki_page_uri("water"), "/s/web/en.wiktionary.org/wiki/water");
    }
}
