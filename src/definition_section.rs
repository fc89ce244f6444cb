// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! English `# Definition` line handling (§4.E). Unlike every other section,
//! a definition line recognizes no special templates at all: only bare wiki
//! links inside an ordered-list definition item contribute edges, always
//! with the default `RelatedTo` relation and no sense (a definition line has
//! no sense number of its own to stamp — it *is* one sense of the entry).

use parse_wiki_text::Node;

use crate::context::{wiki_link, Context};
use crate::linked::EdgeInfo;

pub fn definition_section(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        match node {
            Node::OrderedList { items, .. } => {
                for item in items {
                    edges.extend(definition_line(context, &item.nodes));
                }
            }
            Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(definition_line(context, &item.nodes));
                }
            }
            _ => {}
        }
    }
    edges
}

fn definition_line(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        match node {
            Node::Link { target, text, .. } => {
                edges.extend(wiki_link(context, target, text).links);
            }
            Node::OrderedList { items, .. } | Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(definition_line(context, &item.nodes));
                }
            }
            _ => {}
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use parse_wiki_text::ListItem;

    #[test]
    fn bare_link_in_definition_produces_related_to_edge() {
        let context = Context::new("en", false);
        let item = ListItem {
            end: 0,
            start: 0,
            nodes: vec![Node::Link { end: 0, start: 0, target: "canine", text: vec![] }],
        };
        let edges = definition_section(&context, &[Node::OrderedList { end: 0, start: 0, items: vec![item] }]);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].target, "canine");
        assert_eq!(edges[0].relation, None);
    }

    #[test]
    fn templates_in_definitions_contribute_no_edges() {
        let context = Context::new("en", false);
        let item = ListItem {
            end: 0,
            start: 0,
            nodes: vec![Node::Template {
                end: 0,
                start: 0,
                name: vec![Node::Text { end: 1, start: 0, value: "l" }],
                parameters: vec![],
            }],
        };
        let edges = definition_section(&context, &[Node::OrderedList { end: 0, start: 0, items: vec![item] }]);
        assert!(edges.is_empty());
    }
}
