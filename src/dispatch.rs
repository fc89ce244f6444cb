// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Heading-driven dispatch tables (§4.F): which handler a `===Heading===`
//! maps to, and which part-of-speech code a `===Heading===` declares.
//!
//! Both tables are per Wiktionary edition, since the same English word
//! ("Noun") and the same relation ("Synonyms") are spelled differently (or
//! not recognized at all) in the German edition.

use crate::language::Language;

/// The section handler a heading dispatches to, and (for relation
/// sections) the relation name every edge it produces is stamped with.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SectionRule {
    Translations,
    Link(&'static str),
    Etymology,
    Definition,
}

/// Looks up the part-of-speech code for a heading text, for the given
/// edition. `None` means the heading isn't a recognized part-of-speech
/// heading (it might still be a relation or translation heading).
pub fn pos_for_heading(language: Language, heading: &str) -> Option<&'static str> {
    match language {
        Language::En => match heading {
            "Noun" | "Proper noun" => Some("n"),
            "Verb" => Some("v"),
            "Adjective" => Some("a"),
            "Adverb" => Some("r"),
            _ => None,
        },
        Language::De => match heading {
            "Substantiv" | "Eigenname" | "Nachname" | "Vorname" | "Toponym" => Some("n"),
            "Verb" => Some("v"),
            "Adjektiv" => Some("a"),
            "Adverb" => Some("r"),
            _ => None,
        },
        _ => None,
    }
}

/// Looks up the section handler a non-POS heading dispatches to.
///
/// English has one extra rule the table doesn't capture directly: any
/// heading starting with `Etymology` (`Etymology`, `Etymology 1`, ...)
/// dispatches to [`SectionRule::Etymology`] regardless of exact text, and a
/// heading matching no table entry at all still defaults to
/// [`SectionRule::Definition`] (an unrecognized heading is assumed to
/// introduce prose glosses, which is the common case for the many
/// lightly-used headings this table doesn't special-case). German has no
/// such defaults: an unrecognized German heading produces no edges.
pub fn rule_for_heading(language: Language, heading: &str) -> Option<SectionRule> {
    match language {
        Language::En => {
            if heading.starts_with("Etymology") {
                return Some(SectionRule::Etymology);
            }
            if let Some(rule) = english_rules_and_relations(heading) {
                return Some(rule);
            }
            Some(SectionRule::Definition)
        }
        Language::De => german_rules_and_relations(heading),
        _ => None,
    }
}

fn english_rules_and_relations(heading: &str) -> Option<SectionRule> {
    Some(match heading {
        "Translations" => SectionRule::Translations,
        "Synonyms" => SectionRule::Link("Synonym"),
        "Antonyms" => SectionRule::Link("Antonym"),
        "Hypernyms" => SectionRule::Link("IsA"),
        "Hyponyms" => SectionRule::Link("~IsA"),
        "Meronyms" => SectionRule::Link("PartOf"),
        "Holonyms" => SectionRule::Link("PartOf"),
        "Derived terms" => SectionRule::Link("~DerivedFrom"),
        "Descendants" => SectionRule::Link("~DerivedFrom"),
        "Related terms" => SectionRule::Link("RelatedTo"),
        "See also" => SectionRule::Link("RelatedTo"),
        "Compounds" => SectionRule::Link("~CompoundDerivedFrom"),
        _ => return None,
    })
}

fn german_rules_and_relations(heading: &str) -> Option<SectionRule> {
    Some(match heading {
        "Übersetzungen" => SectionRule::Translations,
        "Synonyme" => SectionRule::Link("Synonym"),
        "Gegenwörter" => SectionRule::Link("Antonym"),
        "Oberbegriffe" => SectionRule::Link("IsA"),
        "Unterbegriffe" => SectionRule::Link("~IsA"),
        "Sinnverwandte Wörter" => SectionRule::Link("RelatedTo"),
        "Wortbildungen" => SectionRule::Link("~DerivedFrom"),
        "Herkunft" => SectionRule::Etymology,
        "Bedeutungen" => SectionRule::Definition,
        _ => return None,
    })
}
