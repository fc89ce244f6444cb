// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! German (`de.wiktionary.org`) `{{Übersetzungen}}` section handling. Unlike
//! the English edition's prose-and-template blocks, German translation
//! lines are bulleted, each starting with an optional bracketed sense-number
//! list (`[1,2]`) and a colon-terminated language name, and naming the
//! translation with one or more `Ü`-family mention templates
//! (`{{Ü|en|water}}`, `{{Üt|en|water}}`, `{{Üxr|en|Water}}`).
//!
//! Since the head word of a German-edition entry is itself German, every
//! edge this section produces runs "from German" (the German headword is
//! the relation's target, via [`from_german`]) — there is no symmetric
//! "to German" direction to parse here, unlike link/compound templates
//! which are direction-agnostic.

use parse_wiki_text::Node;

use crate::context::{template_name, Context, TemplateArgs};
use crate::linked::EdgeInfo;
use crate::sense_num::parse_sense_num;

/// An edge pointing from the (implicitly German) head word to a foreign
/// translation.
pub fn from_german(language: Option<String>, target: &str) -> Option<EdgeInfo> {
    EdgeInfo::with_relation(language, target, "TranslationOf")
}

/// The mirror direction, used only if a line is ever found naming German as
/// the target of a translation recorded under a foreign headword. Exposed
/// for callers parsing non-German editions that still embed `{{Ü}}`
/// mentions (rare, but the upstream tool keeps this as a distinct rule).
pub fn to_german(language: Option<String>, target: &str) -> Option<EdgeInfo> {
    EdgeInfo::with_relation(language, target, "~TranslationOf")
}

pub fn translation_section_de(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        if let Node::UnorderedList { items, .. } = node {
            for item in items {
                edges.extend(translation_line_de(context, &item.nodes));
            }
        }
    }
    edges
}

fn translation_line_de(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let senses = leading_sense_numbers(nodes);
    let mut edges = vec![];

    for node in nodes {
        if let Node::Template { name, parameters, .. } = node {
            let Some(template) = template_name(name) else { continue };
            if template == "Übersetzungen umleiten" {
                // A pure redirect notice: this entry's translations live
                // under a different headword. No edge of our own to emit.
                continue;
            }
            if template.starts_with('Ü') {
                let args = TemplateArgs::parse(context, parameters);
                let language = args.positional_text(1).map(str::to_string);
                if let Some(target) = args.positional_text(2) {
                    if let Some(info) = from_german(language, target) {
                        edges.push(info);
                    }
                }
            }
        }
    }

    if senses.is_empty() {
        return edges;
    }
    // Multiple applicable senses: the original grammar records one edge per
    // (mention, sense) pair rather than a comma-joined sense string.
    let mut stamped = vec![];
    for info in edges {
        for sense in &senses {
            stamped.push(info.set_sense(Some(sense.clone())));
        }
    }
    stamped
}

/// Looks for a leading `[1,2]`-style bracketed sense-number list in the
/// line's first text node.
fn leading_sense_numbers(nodes: &[Node]) -> Vec<String> {
    let Some(Node::Text { value, .. }) = nodes.first() else { return vec![] };
    let trimmed = value.trim_start();
    let Some(rest) = trimmed.strip_prefix('[') else { return vec![] };
    let Some(end) = rest.find(']') else { return vec![] };
    parse_sense_num(&rest[..end]).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use parse_wiki_text::{ListItem, Parameter};

    fn text_node(value: &'static str) -> Node<'static> {
        Node::Text { end: value.len(), start: 0, value }
    }

    #[test]
    fn u_template_produces_from_german_edge() {
        let context = Context::new("de", false);
        let item = ListItem {
            end: 0,
            start: 0,
            nodes: vec![Node::Template {
                end: 0,
                start: 0,
                name: vec![text_node("Ü")],
                parameters: vec![
                    Parameter { end: 0, start: 0, name: None, value: vec![text_node("en")] },
                    Parameter { end: 0, start: 0, name: None, value: vec![text_node("water")] },
                ],
            }],
        };
        let edges = translation_section_de(
            &context,
            &[Node::UnorderedList { end: 0, start: 0, items: vec![item] }],
        );
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "water");
        assert_eq!(edges[0].relation.as_deref(), Some("TranslationOf"));
    }

    #[test]
    fn leading_sense_brackets_are_parsed() {
        let nodes = vec![text_node("[1,2] foo")];
        assert_eq!(leading_sense_numbers(&nodes), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn redirect_template_produces_no_edge() {
        let context = Context::new("de", false);
        let item = ListItem {
            end: 0,
            start: 0,
            nodes: vec![Node::Template {
                end: 0,
                start: 0,
                name: vec![text_node("Übersetzungen umleiten")],
                parameters: vec![Parameter { end: 0, start: 0, name: None, value: vec![text_node("Wasser")] }],
            }],
        };
        let edges = translation_section_de(
            &context,
            &[Node::UnorderedList { end: 0, start: 0, items: vec![item] }],
        );
        assert!(edges.is_empty());
    }
}
