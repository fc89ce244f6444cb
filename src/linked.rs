// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! The two value types every section and template handler folds into:
//! [`LinkedText`] (rendered text plus the edges embedded in it) and
//! [`EdgeInfo`] (a partially-resolved edge awaiting head-word context).

use std::ops::Add;

use crate::uri::{join_uri, normalized_concept_uri, relation_uri, rule_uri, wiki_page_uri, CC_SHAREALIKE};

/// A completed, serializable knowledge-graph edge.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub relation_uri: String,
    pub start_uri: String,
    pub end_uri: String,
    pub dataset: String,
    pub license: String,
    pub sources: Vec<String>,
    pub weight: f64,
}

/// A partial parse result: rendered text plus the edge stubs collected while
/// rendering it.
///
/// `text` may be empty but is never absent. `links` may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkedText {
    pub text: String,
    pub links: Vec<EdgeInfo>,
}

impl LinkedText {
    pub fn new(text: impl Into<String>, links: Vec<EdgeInfo>) -> Self {
        LinkedText {
            text: text.into(),
            links,
        }
    }

    pub fn text_only(text: impl Into<String>) -> Self {
        LinkedText::new(text, vec![])
    }

    pub fn links_only(links: Vec<EdgeInfo>) -> Self {
        LinkedText::new(String::new(), links)
    }

    /// Folds a possibly-empty list of mixed fragments into one `LinkedText`.
    ///
    /// Plain strings contribute only their text; `LinkedText` fragments
    /// contribute both their text and their links; `None` entries (standing
    /// in for unhandled templates, which render as nothing) contribute
    /// nothing.
    pub fn join<I>(fragments: I) -> Self
    where
        I: IntoIterator<Item = Option<LinkedText>>,
    {
        let mut text = String::new();
        let mut links = vec![];
        for fragment in fragments {
            if let Some(fragment) = fragment {
                text.push_str(&fragment.text);
                links.extend(fragment.links);
            }
        }
        LinkedText { text, links }
    }
}

impl Add for LinkedText {
    type Output = LinkedText;

    fn add(self, other: LinkedText) -> LinkedText {
        let mut text = self.text;
        text.push(' ');
        text.push_str(&other.text);
        let mut links = self.links;
        links.extend(other.links);
        LinkedText { text, links }
    }
}

/// A partially-resolved edge: the target side of a relation, waiting on the
/// head word's language/POS context to be completed into an [`Edge`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeInfo {
    pub language: Option<String>,
    pub target: String,
    pub sense: Option<String>,
    pub relation: Option<String>,
}

impl EdgeInfo {
    /// Constructs an `EdgeInfo`. Returns `None` if `target` is empty, which
    /// stands in for the source's "constructing with a null target fails"
    /// contract in a language where `target` can't be null to begin with.
    pub fn new(language: Option<String>, target: impl Into<String>) -> Option<Self> {
        let target = target.into();
        if target.trim().is_empty() {
            return None;
        }
        Some(EdgeInfo {
            language,
            target,
            sense: None,
            relation: None,
        })
    }

    pub fn with_relation(language: Option<String>, target: impl Into<String>, relation: &str) -> Option<Self> {
        EdgeInfo::new(language, target).map(|info| info.set_relation(Some(relation.to_string())))
    }

    #[must_use]
    pub fn set_language(&self, language: Option<String>) -> Self {
        EdgeInfo {
            language,
            ..self.clone()
        }
    }

    /// Fills `language` only if it is not already set.
    #[must_use]
    pub fn set_default_language(&self, language: Option<String>) -> Self {
        if self.language.is_some() {
            self.clone()
        } else {
            self.set_language(language)
        }
    }

    /// Fills `relation` only if it is not already set.
    #[must_use]
    pub fn set_default_relation(&self, relation: Option<String>) -> Self {
        if self.relation.is_some() {
            self.clone()
        } else {
            self.set_relation(relation)
        }
    }

    #[must_use]
    pub fn set_sense(&self, sense: Option<String>) -> Self {
        EdgeInfo {
            sense,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn set_relation(&self, relation: Option<String>) -> Self {
        EdgeInfo {
            relation,
            ..self.clone()
        }
    }

    /// Completes the edge using head-word context, resolving relation
    /// inversion and normalizing both endpoint URIs.
    pub fn complete_edge(
        &self,
        rule_name: &str,
        head_lang: &str,
        head_word: &str,
        head_pos: Option<&str>,
        bad_names: &[&str],
    ) -> Edge {
        let sense = if head_pos.is_none() {
            None
        } else {
            self.sense.as_deref().filter(|s| !bad_names.contains(s))
        };

        let mut start_uri = normalized_concept_uri(Some(head_lang), head_word, head_pos, sense);
        let mut end_uri = normalized_concept_uri(self.language.as_deref(), &self.target, None, None);

        let rel = self.relation.as_deref().unwrap_or("RelatedTo");
        let rel = if let Some(stripped) = rel.strip_prefix('~') {
            std::mem::swap(&mut start_uri, &mut end_uri);
            stripped
        } else {
            rel
        };

        Edge {
            relation_uri: relation_uri(rel),
            start_uri,
            end_uri,
            dataset: join_uri(&["d", "wiktionary", "en", head_lang]),
            license: CC_SHAREALIKE.to_string(),
            sources: vec![wiki_page_uri(head_word), rule_uri(rule_name)],
            weight: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_text_add_joins_text_with_space_and_concatenates_links() {
        let a = LinkedText::new("a", vec![EdgeInfo::new(Some("en".into()), "x").unwrap()]);
        let b = LinkedText::new("b", vec![EdgeInfo::new(Some("en".into()), "y").unwrap()]);
        let sum = a.clone() + b.clone();
        assert_eq!(sum.text, "a b");
        assert_eq!(sum.links, [a.links, b.links].concat());
    }

    #[test]
    fn join_single_linked_text_is_identity_modulo_whitespace() {
        let lt = LinkedText::new("hello", vec![EdgeInfo::new(Some("en".into()), "world").unwrap()]);
        let joined = LinkedText::join(vec![Some(lt.clone())]);
        assert_eq!(joined, lt);
    }

    #[test]
    fn join_ignores_none_fragments() {
        let lt = LinkedText::text_only("kept");
        let joined = LinkedText::join(vec![None, Some(lt.clone()), None]);
        assert_eq!(joined.text, "kept");
    }

    #[test]
    fn edge_info_rejects_empty_target() {
        assert!(EdgeInfo::new(Some("en".into()), "").is_none());
        assert!(EdgeInfo::new(Some("en".into()), "   ").is_none());
    }

    #[test]
    fn set_default_language_is_identity_when_already_set() {
        let info = EdgeInfo::new(Some("fr".into()), "eau").unwrap();
        let updated = info.set_default_language(Some("en".to_string()));
        assert_eq!(updated.language.as_deref(), Some("fr"));
    }

    #[test]
    fn set_default_language_fills_when_absent() {
        let info = EdgeInfo::new(None, "eau").unwrap();
        let updated = info.set_default_language(Some("fr".to_string()));
        assert_eq!(updated.language.as_deref(), Some("fr"));
    }

    #[test]
    fn set_default_relation_keeps_existing_relation() {
        let info = EdgeInfo::with_relation(Some("en".into()), "black", "DerivedFrom").unwrap();
        let updated = info.set_default_relation(Some("EtymologicallyDerivedFrom".to_string()));
        assert_eq!(updated.relation.as_deref(), Some("DerivedFrom"));
    }

    #[test]
    fn set_default_relation_fills_when_absent() {
        let info = EdgeInfo::new(Some("fro".into()), "chien").unwrap();
        let updated = info.set_default_relation(Some("EtymologicallyDerivedFrom".to_string()));
        assert_eq!(updated.relation.as_deref(), Some("EtymologicallyDerivedFrom"));
    }

    #[test]
    fn complete_edge_inverts_relation_and_swaps_endpoints() {
        let info = EdgeInfo::with_relation(Some("en".into()), "poodle", "~IsA").unwrap();
        let edge = info.complete_edge("link_section", "en", "dog", None, &[]);
        assert_eq!(edge.relation_uri, "/r/IsA");
        assert_eq!(edge.start_uri, "/c/en/poodle");
        assert_eq!(edge.end_uri, "/c/en/dog");
    }

    #[test]
    fn complete_edge_keeps_order_without_inversion() {
        let info = EdgeInfo::with_relation(Some("en".into()), "mammal", "IsA").unwrap();
        let edge = info.complete_edge("link_section", "en", "dog", None, &[]);
        assert_eq!(edge.start_uri, "/c/en/dog");
        assert_eq!(edge.end_uri, "/c/en/mammal");
    }

    #[test]
    fn complete_edge_drops_sense_without_pos() {
        let info = EdgeInfo::new(Some("en".into()), "x").unwrap().set_sense(Some("gloss".into()));
        let edge = info.complete_edge("definition_section", "en", "word", None, &[]);
        assert_eq!(edge.start_uri, "/c/en/word");
    }
}
