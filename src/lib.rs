// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Extracts a lexical-semantic knowledge graph from Wiktionary entries.
//!
//! Each entry is a page's raw wikitext; each output [`linked::Edge`] is a
//! labeled, source-attributed relation between two concepts (`/c/<lang>/
//! <word>` URIs), derived from the entry's translations, synonyms,
//! antonyms, hypernyms, hyponyms, and etymological derivations.
//!
//! # Examples
//!
//! ```
//! use wikt_graph::language::Language;
//! use wikt_graph::oracle::fake::FakeTitleOracle;
//!
//! let oracle = FakeTitleOracle::new([]);
//! let wikitext = concat!(
//!     "==English==\n",
//!     "===Noun===\n",
//!     "# a domesticated canine\n",
//!     "\n",
//!     "====Hypernyms====\n",
//!     "* [[canine]]\n",
//! );
//! let edges = wikt_graph::walker::parse_entry(&oracle, "dog", wikitext, Language::En, false).unwrap();
//! assert!(edges.iter().any(|e| e.relation_uri == "/r/IsA"));
//! ```

#![forbid(unsafe_code)]

pub mod configuration;
pub mod context;
pub mod definition_section;
pub mod definition_section_de;
pub mod dispatch;
pub mod error;
pub mod etymology_section;
pub mod io;
pub mod language;
pub mod link_section;
pub mod linked;
pub mod oracle;
pub mod sense_num;
pub mod templates;
pub mod translation_section;
pub mod translation_section_de;
pub mod uri;
pub mod walker;

pub use error::WiktGraphError;
pub use io::WiktionaryPage;
pub use linked::Edge;
pub use walker::parse_entry;
