// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! English `===Etymology===` section handling (§4.E). Etymology prose mixes
//! plain wiki links, the link-template family (`compound`, `prefix`,
//! `borrowing`, ...), and the legacy `{{etyl|lang}}` template, which names a
//! source language for whatever wiki link immediately follows it rather
//! than carrying a target of its own.

use parse_wiki_text::Node;

use crate::context::{template_name, wiki_link, Context, TemplateArgs};
use crate::linked::EdgeInfo;
use crate::templates::link_template;

const RELATION: &str = "EtymologicallyDerivedFrom";

pub fn etymology_section(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    let mut pending_etyl_lang: Option<String> = None;

    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => {
                let Some(template) = template_name(name) else { continue };
                let args = TemplateArgs::parse(context, parameters);
                if template == "etyl" {
                    pending_etyl_lang = args.positional_text(1).map(str::to_string);
                    continue;
                }
                let linked = link_template(context, &template, &args);
                for info in linked.links {
                    edges.push(info.set_default_relation(Some(RELATION.to_string())));
                }
                pending_etyl_lang = None;
            }
            Node::Link { target, text, .. } => {
                if let Some(language) = pending_etyl_lang.take() {
                    if let Some(info) = EdgeInfo::with_relation(Some(language), *target, RELATION) {
                        edges.push(info);
                    }
                } else {
                    let linked = wiki_link(context, target, text);
                    for info in linked.links {
                        edges.push(info.set_default_relation(Some(RELATION.to_string())));
                    }
                }
            }
            Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(etymology_section(context, &item.nodes));
                }
            }
            _ => {}
        }
    }

    edges
}

/// The upstream tool never filled in a German etymology grammar; entries
/// under `===Herkunft===` are walked (so nested POS sections still get
/// visited) but produce no edges of their own.
pub fn etymology_section_de(_context: &Context, _nodes: &[Node]) -> Vec<EdgeInfo> {
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_node(value: &'static str) -> Node<'static> {
        Node::Text { end: value.len(), start: 0, value }
    }

    #[test]
    fn etyl_binds_language_to_following_link() {
        let context = Context::new("en", false);
        let nodes = vec![
            Node::Template {
                end: 0,
                start: 0,
                name: vec![text_node("etyl")],
                parameters: vec![parse_wiki_text::Parameter {
                    end: 0,
                    start: 0,
                    name: None,
                    value: vec![text_node("fro")],
                }],
            },
            Node::Link { end: 0, start: 0, target: "chien", text: vec![] },
        ];
        let edges = etymology_section(&context, &nodes);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].language.as_deref(), Some("fro"));
        assert_eq!(edges[0].target, "chien");
        assert_eq!(edges[0].relation.as_deref(), Some("EtymologicallyDerivedFrom"));
    }

    #[test]
    fn etymology_section_de_is_a_stub() {
        let context = Context::new("de", false);
        assert!(etymology_section_de(&context, &[]).is_empty());
    }
}
