// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Error types (§7). A section failure is recoverable (the entry walker
//! tolerates one per entry); an entry failure is not, and aborts that
//! entry's extraction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WiktGraphError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("section {heading:?} of {language} entry failed: {text}")]
    SectionFailure {
        heading: String,
        language: String,
        text: String,
    },

    #[error("entry {title:?} failed after {failures} section failure(s)")]
    EntryFailure { title: String, failures: u32 },
}
