// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! English and German bulleted relation sections (§4.E): Synonyms, Antonyms,
//! Hypernyms, Hyponyms, Meronyms, Holonyms, Derived terms, Descendants,
//! Related terms, See also, Compounds, and their edition-specific
//! equivalents. Each is a plain bulleted list; any line may open with
//! `{{sense|text}}` to scope the rest of that line to one sense.

use parse_wiki_text::Node;

use crate::context::{render_text, template_name, wiki_link, Context, TemplateArgs};
use crate::linked::EdgeInfo;
use crate::templates::link_template;

pub fn link_section(context: &Context, relation: &str, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        if let Node::UnorderedList { items, .. } = node {
            for item in items {
                edges.extend(link_entry(context, relation, &item.nodes));
            }
        }
    }
    edges
}

/// `{{sense|text}}`: names the sense the rest of the containing line applies
/// to. Returns the plain rendered sense text.
pub fn sense_template(args: &TemplateArgs) -> Option<String> {
    args.positional_text(1).map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn link_entry(context: &Context, relation: &str, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut sense = None;
    let mut edges = vec![];

    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => {
                let Some(template) = template_name(name) else { continue };
                let args = TemplateArgs::parse(context, parameters);
                if template == "sense" {
                    sense = sense_template(&args);
                    continue;
                }
                let linked = link_template(context, &template, &args);
                for info in linked.links {
                    edges.push(info.set_relation(Some(relation.to_string())));
                }
            }
            Node::Link { target, text, .. } => {
                let linked = wiki_link(context, target, text);
                for info in linked.links {
                    edges.push(info.set_relation(Some(relation.to_string())));
                }
            }
            Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(link_entry(context, relation, &item.nodes));
                }
            }
            _ => {}
        }
    }

    edges.into_iter().map(|info| info.set_sense(sense.clone())).collect()
}

/// Unused directly (kept so downstream callers needing plain rendered text
/// of a line, outside of edge extraction, don't have to reach into
/// `context` themselves).
#[allow(dead_code)]
fn plain_line_text(nodes: &[Node]) -> String {
    render_text(nodes)
}
