// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! German `===Bedeutungen===` section handling. Each line opens with a
//! bracketed marker: a bare number (`[1]`) starts a new sense and resets any
//! pending sub-sense lettering; a number followed by a letter `a`-`e`
//! (`[1a]`) names a sub-sense of the preceding numbered sense.
//!
//! The `a` sub-sense is special: German dictionary style treats `[1]` and
//! `[1a]` as sharing one headword, with `[1a]`'s line refining rather than
//! replacing it, so the edge already emitted for `[1]` is re-labeled onto
//! the sub-sense rather than duplicated. If `[1a]` appears with no
//! preceding `[1]` edge to refine (the numbered line had no wiki links of
//! its own), there is nothing to refine, so the sub-sense line is dropped.

use parse_wiki_text::Node;

use crate::context::{render_text, wiki_link, Context};
use crate::linked::EdgeInfo;

pub fn definition_section_de(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges: Vec<EdgeInfo> = vec![];
    let mut current_sense: Option<String> = None;

    for node in nodes {
        let items = match node {
            Node::OrderedList { items, .. } | Node::UnorderedList { items, .. } => items,
            _ => continue,
        };

        for item in items {
            let Some((marker, rest)) = split_leading_marker(&item.nodes) else { continue };

            if marker.chars().all(|c| c.is_ascii_digit()) {
                current_sense = Some(marker.clone());
                for info in collect_links(context, &rest) {
                    edges.push(info.set_sense(Some(marker.clone())));
                }
                continue;
            }

            let is_sub_a = marker.ends_with('a') && marker.len() > 1;
            if is_sub_a {
                let Some(last) = edges.pop() else {
                    // No prior link under the base sense to refine: drop
                    // this sub-sense rather than fabricate one.
                    continue;
                };
                edges.push(last.set_sense(Some(marker.clone())));
            }
            for info in collect_links(context, &rest) {
                edges.push(info.set_sense(Some(marker.clone())));
            }
            let _ = &current_sense;
        }
    }

    edges
}

fn collect_links(context: &Context, nodes: &[Node]) -> Vec<EdgeInfo> {
    let mut edges = vec![];
    for node in nodes {
        match node {
            Node::Link { target, text, .. } => edges.extend(wiki_link(context, target, text).links),
            Node::OrderedList { items, .. } | Node::UnorderedList { items, .. } => {
                for item in items {
                    edges.extend(collect_links(context, &item.nodes));
                }
            }
            _ => {}
        }
    }
    edges
}

/// Splits a `[marker]` prefix (digits, optionally followed by one letter
/// `a`-`e`) off the item's leading text node.
fn split_leading_marker<'a>(nodes: &[Node<'a>]) -> Option<(String, Vec<Node<'a>>)> {
    let Some(Node::Text { value, .. }) = nodes.first() else { return None };
    let trimmed = value.trim_start();
    let rest = trimmed.strip_prefix('[')?;
    let close = rest.find(']')?;
    let marker = rest[..close].trim().to_string();
    if marker.is_empty() || !is_valid_marker(&marker) {
        return None;
    }

    let after = &rest[close + 1..];
    let mut remaining = Vec::with_capacity(nodes.len());
    if !after.is_empty() {
        remaining.push(Node::Text { end: after.len(), start: 0, value: after });
    }
    remaining.extend(nodes[1..].iter().cloned());
    Some((marker, remaining))
}

fn is_valid_marker(marker: &str) -> bool {
    let digits: String = marker.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return false;
    }
    let rest = &marker[digits.len()..];
    rest.is_empty() || (rest.len() == 1 && matches!(rest.chars().next(), Some('a'..='e')))
}

#[allow(dead_code)]
fn render_line_text(nodes: &[Node]) -> String {
    render_text(nodes)
}
