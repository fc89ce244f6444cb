// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Newline-delimited JSON input and output (§6/M): one [`WiktionaryPage`]
//! per input line, one [`crate::linked::Edge`] per output line.

use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};

use crate::error::WiktGraphError;
use crate::linked::Edge;

/// One raw Wiktionary page: a title and its unparsed wikitext body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WiktionaryPage {
    pub title: String,
    pub wikitext: String,
}

pub fn read_pages<R: BufRead>(reader: R) -> impl Iterator<Item = Result<WiktionaryPage, WiktGraphError>> {
    reader.lines().filter_map(|line| match line {
        Ok(line) if line.trim().is_empty() => None,
        Ok(line) => Some(serde_json::from_str(&line).map_err(WiktGraphError::from)),
        Err(err) => Some(Err(WiktGraphError::from(err))),
    })
}

pub fn write_edges<W: Write>(mut writer: W, edges: &[Edge]) -> Result<(), WiktGraphError> {
    for edge in edges {
        serde_json::to_writer(&mut writer, edge)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}
