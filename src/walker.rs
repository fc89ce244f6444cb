// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! The entry walker (§5): recognizes `==Language==` headings, dispatches
//! nested headings to the right section handler, and completes every edge
//! a section produces with the entry's head word, language, and (where a
//! part-of-speech heading is in scope) part-of-speech code.

use parse_wiki_text::Node;

use crate::configuration::create_configuration;
use crate::context::{render_text, Context};
use crate::definition_section::definition_section;
use crate::definition_section_de::definition_section_de;
use crate::dispatch::{pos_for_heading, rule_for_heading, SectionRule};
use crate::error::WiktGraphError;
use crate::etymology_section::{etymology_section, etymology_section_de};
use crate::language::{language_code_for_name, Language};
use crate::link_section::link_section;
use crate::linked::{Edge, EdgeInfo};
use crate::oracle::TitleOracle;
use crate::translation_section::translation_section;
use crate::translation_section_de::translation_section_de;

/// Entries in these languages are recognized (so nothing downstream trips
/// over them) but deliberately produce no edges: Lojban and American Sign
/// Language aren't in scope for a lexical-*translation* graph, and
/// "Translingual" headings describe symbols (taxonomic names, currency
/// signs) rather than words in any one language.
const SKIP_LANGUAGES: &[&str] = &["Lojban", "Translingual", "American Sign Language"];

/// Sense names that never carry useful information and are dropped instead
/// of recorded, mirroring the upstream tool's denylist of placeholder
/// gloss text left behind by incomplete edits.
const BAD_SENSE_NAMES: &[&str] = &["", "?", "?.", "please add this translation if you can"];

pub fn parse_entry(
    oracle: &dyn TitleOracle,
    title: &str,
    wikitext: &str,
    edition: Language,
    trace: bool,
) -> Result<Vec<Edge>, WiktGraphError> {
    let configuration = create_configuration();
    let output = configuration.parse(wikitext);

    let mut walker = Walker {
        oracle,
        title: title.to_string(),
        edition,
        failures: 0,
        edges: vec![],
        trace,
    };
    walker.walk_entry(&output.nodes)?;
    Ok(walker.edges)
}

struct Walker<'o> {
    oracle: &'o dyn TitleOracle,
    title: String,
    /// The Wiktionary edition this whole run dispatches sections for. Every
    /// entry's subheadings (`===Noun===`, `===Translations===`, ...) are
    /// spelled in this edition's language, regardless of which
    /// `==Language==` heading the entry itself sits under: the English
    /// edition documents French, German, and every other language's words
    /// under English subheadings.
    edition: Language,
    failures: u32,
    edges: Vec<Edge>,
    trace: bool,
}

impl Walker<'_> {
    fn walk_entry(&mut self, nodes: &[Node]) -> Result<(), WiktGraphError> {
        for (heading, section_nodes) in split_sections(nodes, 2) {
            self.walk_language(&heading, section_nodes)?;
        }
        Ok(())
    }

    fn walk_language(&mut self, heading: &str, nodes: &[Node]) -> Result<(), WiktGraphError> {
        if SKIP_LANGUAGES.contains(&heading) {
            return Ok(());
        }
        let Some(code) = language_code_for_name(heading) else {
            return Ok(());
        };
        self.trace(&format!("==={heading}=== (language {code}) under the {} edition", self.edition.code()));
        let context = Context::new(&code, self.trace);

        for (sub_heading, sub_nodes) in split_sections(nodes, 3) {
            self.walk_section(&context, &code, &sub_heading, sub_nodes, None)?;
        }
        Ok(())
    }

    fn walk_section(
        &mut self,
        context: &Context,
        code: &str,
        heading: &str,
        nodes: &[Node],
        current_pos: Option<&'static str>,
    ) -> Result<(), WiktGraphError> {
        let body = leading_content(nodes);
        let edition = self.edition;

        if let Some(pos) = pos_for_heading(edition, heading) {
            self.trace(&format!("section {heading:?} is part-of-speech {pos:?}"));
            let edges = match edition {
                Language::En => definition_section(context, body),
                Language::De => definition_section_de(context, body),
                _ => vec![],
            };
            self.complete_and_push(edges, "definition_section", code, heading, Some(pos))?;

            for (sub_heading, sub_nodes) in split_sections(nodes, 4) {
                self.walk_section(context, code, &sub_heading, sub_nodes, Some(pos))?;
            }
            return Ok(());
        }

        match rule_for_heading(edition, heading) {
            Some(SectionRule::Translations) => {
                let edges = match edition {
                    Language::En => translation_section(context, body),
                    Language::De => translation_section_de(context, body),
                    _ => vec![],
                };
                self.complete_and_push(edges, "translation_section", code, heading, current_pos)?;
            }
            Some(SectionRule::Link(relation)) => {
                let edges = link_section(context, relation, body);
                self.complete_and_push(edges, "link_section", code, heading, current_pos)?;
            }
            Some(SectionRule::Etymology) => {
                let edges = match edition {
                    Language::En => etymology_section(context, body),
                    Language::De => etymology_section_de(context, body),
                    _ => vec![],
                };
                self.complete_and_push(edges, "etymology_section", code, heading, current_pos)?;
            }
            Some(SectionRule::Definition) => {
                let edges = match edition {
                    Language::En => definition_section(context, body),
                    _ => vec![],
                };
                self.complete_and_push(edges, "definition_section", code, heading, current_pos)?;
            }
            None => {}
        }

        for (sub_heading, sub_nodes) in split_sections(nodes, 4) {
            self.walk_section(context, code, &sub_heading, sub_nodes, current_pos)?;
        }
        Ok(())
    }

    /// Completes and records every edge a section produced. A title-oracle
    /// failure while disambiguating one edge's language only fails that
    /// edge's section (§7); the walk continues into the entry's other
    /// sections, and only a second section failure in the same entry aborts
    /// it (via [`WiktGraphError::EntryFailure`]).
    fn complete_and_push(
        &mut self,
        edges: Vec<EdgeInfo>,
        rule_name: &str,
        code: &str,
        heading: &str,
        pos: Option<&str>,
    ) -> Result<(), WiktGraphError> {
        for info in edges {
            let info = match self.disambiguate_default_language(info, code) {
                Ok(info) => info,
                Err(err) => {
                    self.record_section_failure(heading, code, err.to_string())?;
                    continue;
                }
            };
            self.edges
                .push(info.complete_edge(rule_name, code, &self.title, pos, BAD_SENSE_NAMES));
        }
        Ok(())
    }

    /// A bare link inside an English section defaults to the entry's own
    /// edition language. If the title oracle says that word doesn't exist
    /// in that language but does exist in English, the link almost
    /// certainly meant English Wiktionary's far larger vocabulary (the
    /// common case: a gloss links a word with no entry of its own yet in
    /// the edition being parsed).
    fn disambiguate_default_language(&self, info: EdgeInfo, code: &str) -> Result<EdgeInfo, WiktGraphError> {
        if info.language.as_deref() != Some(code) || code == "en" {
            return Ok(info);
        }
        if self.oracle.exists(code, &info.target)? {
            return Ok(info);
        }
        if self.oracle.exists("en", &info.target)? {
            log::debug!("{:?}: {code}/{:?} not found, falling back to en/{:?}", self.title, info.target, info.target);
            return Ok(info.set_language(Some("en".to_string())));
        }
        Ok(info)
    }

    fn record_section_failure(&mut self, heading: &str, language: &str, text: String) -> Result<(), WiktGraphError> {
        self.failures += 1;
        let failure = WiktGraphError::SectionFailure {
            heading: heading.to_string(),
            language: language.to_string(),
            text,
        };
        log::error!("{:?}: {failure}", self.title);
        if self.failures > 1 {
            return Err(WiktGraphError::EntryFailure {
                title: self.title.clone(),
                failures: self.failures,
            });
        }
        Ok(())
    }

    fn trace(&self, message: &str) {
        if self.trace {
            log::trace!("{}: {message}", self.title);
        }
    }
}

/// Nodes up to (but not including) the first heading of any level: the
/// prose/lists that belong directly to a heading, before any subheading.
fn leading_content(nodes: &[Node]) -> &[Node] {
    let end = nodes
        .iter()
        .position(|node| matches!(node, Node::Heading { .. }))
        .unwrap_or(nodes.len());
    &nodes[..end]
}

/// Splits a node slice into `(heading text, section body)` pairs for every
/// heading at exactly `level`. A section's body runs until the next
/// heading at `level` or shallower (a deeper heading belongs to the
/// section and is left for the recursive call to find).
fn split_sections<'a>(nodes: &'a [Node<'a>], level: u8) -> Vec<(String, &'a [Node<'a>])> {
    let mut sections = vec![];
    let mut i = 0;
    while i < nodes.len() {
        if let Node::Heading {
            level: heading_level,
            nodes: heading_nodes,
            ..
        } = &nodes[i]
        {
            if *heading_level == level {
                let heading_text = render_text(heading_nodes);
                let start = i + 1;
                let mut end = nodes.len();
                for (offset, node) in nodes[start..].iter().enumerate() {
                    if let Node::Heading { level: next_level, .. } = node {
                        if *next_level <= level {
                            end = start + offset;
                            break;
                        }
                    }
                }
                sections.push((heading_text, &nodes[start..end]));
                i = end;
                continue;
            }
        }
        i += 1;
    }
    sections
}
