// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! The title-index oracle (§6): a read-only `(language, title) -> exists`
//! check, used to disambiguate which Wiktionary edition's word a bare
//! English definition-section wiki link actually targets.

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use rusqlite::{Connection, OptionalExtension};

use crate::error::WiktGraphError;

pub trait TitleOracle {
    fn exists(&self, language: &str, title: &str) -> Result<bool, WiktGraphError>;
}

/// SQLite-backed oracle over a `titles(language TEXT, title TEXT)` table,
/// one row per (edition, page title) pair known to exist.
pub struct SqliteTitleOracle {
    connection: Connection,
}

impl SqliteTitleOracle {
    pub fn open(path: &std::path::Path) -> Result<Self, WiktGraphError> {
        let connection = Connection::open(path)?;
        Ok(SqliteTitleOracle { connection })
    }

    pub fn create_schema(&self) -> Result<(), WiktGraphError> {
        self.connection.execute(
            "CREATE TABLE IF NOT EXISTS titles (language TEXT NOT NULL, title TEXT NOT NULL)",
            [],
        )?;
        self.connection.execute(
            "CREATE INDEX IF NOT EXISTS titles_language_title ON titles (language, title)",
            [],
        )?;
        Ok(())
    }
}

impl TitleOracle for SqliteTitleOracle {
    fn exists(&self, language: &str, title: &str) -> Result<bool, WiktGraphError> {
        let lowered = title.to_lowercase();
        let found: Option<i64> = self
            .connection
            .query_row(
                "SELECT 1 FROM titles WHERE language = ?1 AND title = ?2 LIMIT 1",
                rusqlite::params![language, lowered],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }
}

/// Wraps any [`TitleOracle`] with an LRU cache of recent lookups, since the
/// same (language, title) pair is looked up repeatedly across a large
/// dump's definition sections.
pub struct CachedTitleOracle<O> {
    inner: O,
    cache: Mutex<LruCache<(String, String), bool>>,
}

impl<O: TitleOracle> CachedTitleOracle<O> {
    pub fn new(inner: O, capacity: NonZeroUsize) -> Self {
        CachedTitleOracle {
            inner,
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }
}

impl<O: TitleOracle> TitleOracle for CachedTitleOracle<O> {
    fn exists(&self, language: &str, title: &str) -> Result<bool, WiktGraphError> {
        let key = (language.to_string(), title.to_lowercase());
        if let Some(hit) = self.cache.lock().unwrap().get(&key) {
            return Ok(*hit);
        }
        let found = self.inner.exists(language, title)?;
        self.cache.lock().unwrap().put(key, found);
        Ok(found)
    }
}

/// An in-memory oracle for tests and documentation examples: exact-match
/// lookup over a fixed set of `(language, lowercased title)` pairs.
pub mod fake {
    use super::TitleOracle;
    use crate::error::WiktGraphError;
    use std::collections::HashSet;

    pub struct FakeTitleOracle {
        titles: HashSet<(String, String)>,
    }

    impl FakeTitleOracle {
        pub fn new(titles: impl IntoIterator<Item = (&'static str, &'static str)>) -> Self {
            FakeTitleOracle {
                titles: titles
                    .into_iter()
                    .map(|(lang, title)| (lang.to_string(), title.to_lowercase()))
                    .collect(),
            }
        }
    }

    impl TitleOracle for FakeTitleOracle {
        fn exists(&self, language: &str, title: &str) -> Result<bool, WiktGraphError> {
            Ok(self.titles.contains(&(language.to_string(), title.to_lowercase())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTitleOracle;
    use super::*;

    #[test]
    fn fake_oracle_is_case_insensitive() {
        let oracle = FakeTitleOracle::new([("en", "Dog")]);
        assert!(oracle.exists("en", "dog").unwrap());
        assert!(!oracle.exists("en", "cat").unwrap());
    }

    #[test]
    fn cached_oracle_delegates_and_remembers() {
        let oracle = CachedTitleOracle::new(FakeTitleOracle::new([("en", "dog")]), NonZeroUsize::new(8).unwrap());
        assert!(oracle.exists("en", "dog").unwrap());
        assert!(oracle.exists("en", "dog").unwrap());
    }
}
