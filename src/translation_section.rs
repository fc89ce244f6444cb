// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! English `===Translations===` section handling (§4.E). A translation
//! section is a sequence of `{{trans-top|sense}}` / `{{checktrans-top}}` /
//! `{{trans-bottom}}` markers interleaved with bulleted lists, each list
//! item naming one language and holding one or more `{{t|...}}`-family
//! templates. Every edge produced between a `trans-top` and the next
//! `trans-bottom` (or another `trans-top`) is stamped with that block's
//! sense.

use parse_wiki_text::Node;

use crate::context::{template_name, Context, TemplateArgs};
use crate::linked::EdgeInfo;
use crate::templates::{checktrans_top_template, sensetrans_top_template, translation_template};

const TRANSLATION_TEMPLATE_NAMES: &[&str] = &["t", "t+", "t-", "t-simple", "t0", "tø"];

pub fn translation_section(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    let mut current_sense: Option<String> = None;

    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => {
                let Some(template) = template_name(name) else { continue };
                match template.as_str() {
                    "trans-top" => {
                        let args = TemplateArgs::parse(context, parameters);
                        current_sense = sensetrans_top_template(&args);
                    }
                    "checktrans-top" => current_sense = checktrans_top_template(),
                    "trans-bottom" => current_sense = None,
                    _ => {}
                }
            }
            Node::UnorderedList { items, .. } => {
                for item in items {
                    for info in translation_entry(context, &item.nodes) {
                        edges.push(info.set_sense(current_sense.clone()));
                    }
                }
            }
            _ => {}
        }
    }

    edges
}

/// One bulleted translation line: `Language: {{t|fr|eau}}, {{t|de|Wasser}}`.
fn translation_entry(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        match node {
            Node::Template { name, parameters, .. } => {
                let Some(template) = template_name(name) else { continue };
                if TRANSLATION_TEMPLATE_NAMES.contains(&template.as_str()) {
                    let args = TemplateArgs::parse(context, parameters);
                    if let Some(info) = translation_template(&args) {
                        edges.push(info);
                    }
                }
            }
            Node::Link { target, text, .. } => {
                let linked = crate::context::wiki_link(context, target, text);
                for info in linked.links {
                    edges.push(info.set_relation(Some("TranslationOf".to_string())));
                }
            }
            Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(translation_entry(context, &item.nodes));
                }
            }
            _ => {}
        }
    }
    edges
}
