// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! End-to-end scenarios exercising a full entry through [`parse_entry`],
//! one per worked example.

use wikt_graph::language::Language;
use wikt_graph::oracle::fake::FakeTitleOracle;
use wikt_graph::walker::parse_entry;

#[test]
fn english_translation_section_produces_sense_stamped_edges() {
    let oracle = FakeTitleOracle::new([]);
    let wikitext = concat!(
        "==English==\n",
        "===Noun===\n",
        "# a clear liquid\n",
        "\n",
        "====Translations====\n",
        "{{trans-top|clear liquid}}\n",
        "* French: {{t|fr|eau}}\n",
        "* German: {{t|de|Wasser}}\n",
        "{{trans-bottom}}\n",
    );
    let edges = parse_entry(&oracle, "water", wikitext, Language::En, false).unwrap();
    let eau = edges.iter().find(|e| e.end_uri == "/c/fr/eau").unwrap();
    assert_eq!(eau.relation_uri, "/r/TranslationOf");
    assert_eq!(eau.start_uri, "/c/en/water/n");
    assert!(edges.iter().any(|e| e.end_uri == "/c/de/wasser" || e.end_uri == "/c/de/Wasser"));
}

#[test]
fn english_hypernym_produces_is_a_edge() {
    let oracle = FakeTitleOracle::new([]);
    let wikitext = concat!(
        "==English==\n",
        "===Noun===\n",
        "# a domesticated canine\n",
        "\n",
        "====Hypernyms====\n",
        "* [[canine]]\n",
    );
    let edges = parse_entry(&oracle, "dog", wikitext, Language::En, false).unwrap();
    let edge = edges.iter().find(|e| e.relation_uri == "/r/IsA").unwrap();
    assert_eq!(edge.start_uri, "/c/en/dog/n");
    assert_eq!(edge.end_uri, "/c/en/canine");
}

#[test]
fn english_hyponym_inverts_into_is_a() {
    let oracle = FakeTitleOracle::new([]);
    let wikitext = concat!(
        "==English==\n",
        "===Noun===\n",
        "# a domesticated canine\n",
        "\n",
        "====Hyponyms====\n",
        "* [[poodle]]\n",
    );
    let edges = parse_entry(&oracle, "dog", wikitext, Language::En, false).unwrap();
    let edge = edges.iter().find(|e| e.relation_uri == "/r/IsA").unwrap();
    // Hyponym is the inverse of IsA: poodle IsA dog, not dog IsA poodle.
    assert_eq!(edge.start_uri, "/c/en/poodle");
    assert_eq!(edge.end_uri, "/c/en/dog/n");
}

#[test]
fn compound_etymology_produces_two_derived_from_edges() {
    let oracle = FakeTitleOracle::new([]);
    let wikitext = concat!(
        "==English==\n",
        "===Etymology===\n",
        "{{compound|en|black|bird}}\n",
        "\n",
        "===Noun===\n",
        "# a common garden bird\n",
    );
    let edges = parse_entry(&oracle, "blackbird", wikitext, Language::En, false).unwrap();
    let derived: Vec<_> = edges.iter().filter(|e| e.relation_uri == "/r/DerivedFrom").collect();
    assert_eq!(derived.len(), 2);
    assert!(derived.iter().any(|e| e.end_uri == "/c/en/black"));
    assert!(derived.iter().any(|e| e.end_uri == "/c/en/bird"));
}

#[test]
fn definition_link_ambiguity_is_resolved_by_the_title_oracle() {
    // "canine" has no German-edition entry, so the bare link inside a
    // German definition line should resolve to English instead.
    let oracle = FakeTitleOracle::new([("en", "canine")]);
    let wikitext = concat!("==German==\n", "===Substantiv===\n", "# [1] ein [[canine]]\n",);
    let edges = parse_entry(&oracle, "Hund", wikitext, Language::De, false).unwrap();
    assert!(edges.iter().any(|e| e.end_uri == "/c/en/canine"));
}

#[test]
fn german_sub_sense_letter_refines_prior_definition_edge() {
    let oracle = FakeTitleOracle::new([]);
    let wikitext = concat!(
        "==German==\n",
        "===Substantiv===\n",
        "# [1] [[Flüssigkeit]]\n",
        "# [1a] besonders [[Wasser]]\n",
    );
    let edges = parse_entry(&oracle, "Nass", wikitext, Language::De, false).unwrap();
    // The [1] edge's own sense is overwritten to "1a" rather than
    // duplicated, so exactly one edge should exist and it should carry the
    // sub-sense label in its start URI.
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].start_uri, "/c/de/nass/n/1a");
}
