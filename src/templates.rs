// Copyright 2018 Fredrik Portström <https://portstrom.com>
// This is free software distributed under the terms specified in
// the file LICENSE at the top-level directory of this distribution.

//! Per-template-family handlers (§4.C). Each function takes the template's
//! already-parsed argument map and produces either an [`EdgeInfo`] (for
//! structural templates like translations) or a [`LinkedText`] (for
//! templates that also render inline, like links).

use crate::context::{Context, TemplateArgs};
use crate::linked::{EdgeInfo, LinkedText};

/// `t`, `t+`, `t-`, `t-simple`, `t0`, `tø`.
pub fn translation_template(args: &TemplateArgs) -> Option<EdgeInfo> {
    let language = args.positional_text(1).map(str::to_string);
    let target = args.positional_text(2)?;
    EdgeInfo::with_relation(language, target, "TranslationOf")
}

/// `{{trans-top|sense}}`. Returns the block's opening sense, rendered
/// plainly (the upstream tool stores the whole `LinkedText`, but every
/// consumer only ever reads its rendered text, so we store a `String`
/// directly — see DESIGN.md).
pub fn sensetrans_top_template(args: &TemplateArgs) -> Option<String> {
    args.positional_text(1).map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// `{{checktrans-top}}`: the following block has no associated sense.
pub fn checktrans_top_template() -> Option<String> {
    None
}

/// Link templates: `l`, `term`, `term/t`, `ja-l`, `ko-inline`, and the
/// etymology-linking templates `back-form`, `clipping`, `-er`,
/// `borrowing`, `blend`, `calque`, `compound`, `confix`, `prefix`,
/// `suffix`, `etycomp`.
///
/// `raw_name` is the template's literal name as written, which for `l` may
/// carry `/subtype` suffixes (`{{l/en|mammal}}`).
pub fn link_template(context: &Context, raw_name: &str, args: &TemplateArgs) -> LinkedText {
    let mut parts = raw_name.split('/');
    let base = parts.next().unwrap_or("");
    let subtypes: Vec<&str> = parts.collect();

    if base == "l" && !subtypes.is_empty() {
        if let Some(target) = args.positional_text(1) {
            let language = subtypes[0].trim().to_string();
            let target = target.to_string();
            if let Some(info) = EdgeInfo::new(Some(language), target.clone()) {
                return LinkedText::new(target, vec![info]);
            }
        }
    }

    if (base == "l" || base == "term/t") && args.positional_text(2).is_some() {
        let language = args.positional_text(1).map(str::to_string);
        let target = args.positional_text(2).unwrap().to_string();
        let text = args.positional_text(3).unwrap_or(&target).to_string();
        if let Some(info) = EdgeInfo::new(language, target) {
            return LinkedText::new(text, vec![info]);
        }
    }

    if base == "term" {
        if let Some(target) = args.positional_text(1) {
            let language = args.named_text("lang").map(str::to_string);
            let target = target.to_string();
            let text = args.positional_text(2).unwrap_or(&target).to_string();
            if let Some(info) = EdgeInfo::new(language, target) {
                return LinkedText::new(text, vec![info]);
            }
        }
    }

    if base == "ja-l" {
        if let Some(target) = args.positional_text(1) {
            let target = target.to_string();
            if let Some(info) = EdgeInfo::new(Some("ja".to_string()), target.clone()) {
                return LinkedText::new(target, vec![info]);
            }
        }
    }

    if base == "ko-inline" {
        if let Some(target) = args.positional_text(1) {
            let target = target.to_string();
            if let Some(info) = EdgeInfo::new(Some("ko".to_string()), target.clone()) {
                return LinkedText::new(target, vec![info]);
            }
        }
    }

    if matches!(base, "back-form" | "clipping" | "-er") {
        if let Some(target) = args.positional_text(1) {
            let language = args
                .named_text("lang")
                .map(str::to_string)
                .or_else(|| Some(context.default_language.to_string()));
            if let Some(info) = EdgeInfo::with_relation(language, target, "DerivedFrom") {
                return LinkedText::new("", vec![info]);
            }
        }
    }

    if base == "borrowing" {
        if let Some(target) = args.positional_text(2) {
            let language = args.positional_text(1).map(str::to_string);
            if let Some(info) = EdgeInfo::with_relation(language, target, "DerivedFrom") {
                return LinkedText::new("", vec![info]);
            }
        }
    }

    if matches!(base, "blend" | "calque" | "compound" | "confix" | "prefix" | "suffix") {
        let language = args
            .named_text("lang")
            .map(str::to_string)
            .or_else(|| Some(context.default_language.to_string()));

        let mut slots: [Option<String>; 4] = [
            None,
            args.positional_text(1).map(str::to_string),
            args.positional_text(2).map(str::to_string),
            args.positional_text(3).map(str::to_string),
        ];
        if matches!(base, "prefix" | "confix") {
            if let Some(arg1) = slots[1].take() {
                slots[1] = Some(format!("{arg1}-"));
            }
        }
        if base == "suffix" {
            if let Some(arg2) = slots[2].take() {
                slots[2] = Some(format!("-{arg2}"));
            }
        }
        if base == "confix" {
            let last = (1..=3).rev().find(|i| slots[*i].is_some());
            if let Some(last) = last {
                if last >= 2 {
                    if let Some(val) = slots[last].take() {
                        slots[last] = Some(format!("-{val}"));
                    }
                }
            }
        }

        let mut links = vec![];
        for slot in slots.into_iter().skip(1) {
            if let Some(value) = slot {
                if let Some(info) = EdgeInfo::with_relation(language.clone(), value, "DerivedFrom") {
                    links.push(info);
                }
            }
        }
        if !links.is_empty() {
            return LinkedText::new("", links);
        }
    }

    if base == "etycomp" {
        if let Some(target2) = args.positional_text(2) {
            let lang1 = args
                .named_text("lang1")
                .map(str::to_string)
                .or_else(|| Some(context.default_language.to_string()));
            let lang2 = args
                .named_text("lang2")
                .or(args.named_text("lang1"))
                .map(str::to_string)
                .or_else(|| Some(context.default_language.to_string()));
            let target1 = args.positional_text(1).unwrap_or("");
            let mut links = vec![];
            if let Some(info) = EdgeInfo::with_relation(lang1, target1, "EtymologicallyDerivedFrom") {
                links.push(info);
            }
            if let Some(info) = EdgeInfo::with_relation(lang2, target2, "EtymologicallyDerivedFrom") {
                links.push(info);
            }
            if !links.is_empty() {
                return LinkedText::new("", links);
            }
        }
    }

    LinkedText::text_only("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use parse_wiki_text::Parameter;

    fn args_from(pairs: &[(Option<&str>, &str)]) -> TemplateArgs {
        let context = Context::new("en", false);
        let params: Vec<Parameter> = pairs
            .iter()
            .map(|(name, value)| Parameter {
                name: name.map(|n| {
                    vec![parse_wiki_text::Node::Text {
                        end: n.len(),
                        start: 0,
                        value: n,
                    }]
                }),
                value: vec![parse_wiki_text::Node::Text {
                    end: value.len(),
                    start: 0,
                    value,
                }],
                end: 0,
                start: 0,
            })
            .collect();
        TemplateArgs::parse(&context, &params)
    }

    #[test]
    fn translation_template_requires_arg_two() {
        let args = args_from(&[(None, "fr")]);
        assert!(translation_template(&args).is_none());
    }

    #[test]
    fn translation_template_produces_edge() {
        let args = args_from(&[(None, "fr"), (None, "eau")]);
        let info = translation_template(&args).unwrap();
        assert_eq!(info.language.as_deref(), Some("fr"));
        assert_eq!(info.target, "eau");
        assert_eq!(info.relation.as_deref(), Some("TranslationOf"));
    }

    #[test]
    fn link_template_l_two_arg() {
        let context = Context::new("en", false);
        let args = args_from(&[(None, "en"), (None, "mammal")]);
        let lt = link_template(&context, "l", &args);
        assert_eq!(lt.links[0].target, "mammal");
        assert_eq!(lt.links[0].language.as_deref(), Some("en"));
    }

    #[test]
    fn link_template_compound_emits_one_edge_per_present_arg() {
        let context = Context::new("en", false);
        let args = args_from(&[(Some("lang"), "en"), (None, "black"), (None, "bird")]);
        let lt = link_template(&context, "compound", &args);
        assert_eq!(lt.links.len(), 2);
        assert_eq!(lt.links[0].target, "black");
        assert_eq!(lt.links[1].target, "bird");
        assert!(lt.links.iter().all(|l| l.relation.as_deref() == Some("DerivedFrom")));
    }

    #[test]
    fn link_template_prefix_appends_dash() {
        let context = Context::new("en", false);
        let args = args_from(&[(Some("lang"), "en"), (None, "un")]);
        let lt = link_template(&context, "prefix", &args);
        assert_eq!(lt.links[0].target, "un-");
    }

    #[test]
    fn link_template_suffix_prepends_dash() {
        let context = Context::new("en", false);
        let args = args_from(&[(Some("lang"), "en"), (None, "happy"), (None, "ness")]);
        let lt = link_template(&context, "suffix", &args);
        assert_eq!(lt.links[1].target, "-ness");
    }

    #[test]
    fn link_template_etycomp_two_edges() {
        let context = Context::new("en", false);
        let args = args_from(&[(Some("lang1"), "en"), (None, "black"), (None, "bird")]);
        let lt = link_template(&context, "etycomp", &args);
        assert_eq!(lt.links.len(), 2);
        assert!(lt
            .links
            .iter()
            .all(|l| l.relation.as_deref() == Some("EtymologicallyDerivedFrom")));
    }
}
