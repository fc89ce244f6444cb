// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Parses German sense-number expressions like `1`, `1a`, `1-3`, `1,2,4`,
//! and `1-3,5` into a sorted list of sense-number strings.
//!
//! A single "num" token is one or two digits optionally followed by a
//! lowercase letter `a`-`e` (`1`, `12`, `3b`). A `sense_num` expression is
//! one num, optionally followed either by a dash/slash/plus and a single
//! closing num (a range, expanded inclusively over integers — only valid
//! when both ends are plain digit nums), or by a comma-separated list of
//! further nums and ranges.

use regex::Regex;
use std::sync::OnceLock;

fn num_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]{1,2}[a-e]?$").unwrap())
}

/// Parses a sense-number expression. Returns `None` if `input` isn't a
/// well-formed sense-number expression at all (the section handler should
/// then treat the whole line as unrecognized).
pub fn parse_sense_num(input: &str) -> Option<Vec<String>> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    // Comma-separated list: split first, since a lone range or plain num is
    // just the one-element case of this.
    let mut items: Vec<String> = vec![];
    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return None;
        }
        if let Some((start, end)) = split_range(part) {
            items.extend(expand_range(start, end)?);
        } else if num_re().is_match(part) {
            items.push(part.to_string());
        } else {
            return None;
        }
    }

    items.sort();
    items.dedup();
    Some(items)
}

fn split_range(part: &str) -> Option<(&str, &str)> {
    for sep in ['-', '/', '+'] {
        if let Some(pos) = part.find(sep) {
            let (start, rest) = part.split_at(pos);
            let end = &rest[1..];
            let start = start.trim();
            let end = end.trim();
            if num_re().is_match(start) && num_re().is_match(end) {
                return Some((start, end));
            }
        }
    }
    None
}

fn expand_range(start: &str, end: &str) -> Option<Vec<String>> {
    // Ranges only make sense over plain digit nums (no letter suffix), per
    // the original grammar's `num_range` rule.
    let start_n: u32 = start.parse().ok()?;
    let end_n: u32 = end.parse().ok()?;
    if start_n > end_n {
        return None;
    }
    Some((start_n..=end_n).map(|n| n.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digit() {
        assert_eq!(parse_sense_num("1"), Some(vec!["1".to_string()]));
    }

    #[test]
    fn digit_with_subsense_letter() {
        assert_eq!(parse_sense_num("1a"), Some(vec!["1a".to_string()]));
    }

    #[test]
    fn dash_range_expands_inclusively() {
        assert_eq!(
            parse_sense_num("1-3"),
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn comma_list_appends() {
        assert_eq!(
            parse_sense_num("1,2,4"),
            Some(vec!["1".to_string(), "2".to_string(), "4".to_string()])
        );
    }

    #[test]
    fn range_then_comma() {
        let mut expected = vec!["1", "2", "3", "5"];
        expected.sort();
        assert_eq!(
            parse_sense_num("1-3,5"),
            Some(expected.into_iter().map(str::to_string).collect::<Vec<_>>())
        );
    }

    #[test]
    fn output_is_sorted_and_deduplicated() {
        assert_eq!(
            parse_sense_num("3,1,2,1"),
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn garbage_is_none() {
        assert_eq!(parse_sense_num("abc"), None);
        assert_eq!(parse_sense_num(""), None);
    }
}
