// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Persona shared by every model call: public-sector communication expert.
pub const EXPERT_PERSONA: &str = "Du bist ein Experte für Behördenkommunikation und KI-Prompting \
im deutschen öffentlichen Dienst.";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Replaces every `{key}` placeholder in `template` with its value in a single
/// pass; substituted values are never scanned again. Unknown keys stay as-is.
pub fn fill_template(template: &str, pairs: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_all_occurrences() {
        let out = fill_template("{a} und {b}, nochmal {a}", &[("a", "X"), ("b", "Y")]);
        assert_eq!(out, "X und Y, nochmal X");
    }

    #[test]
    fn test_fill_template_leaves_unknown_placeholders() {
        assert_eq!(fill_template("{missing}", &[("a", "X")]), "{missing}");
    }

    #[test]
    fn test_fill_template_does_not_expand_placeholders_inside_values() {
        let out = fill_template(
            "{title} / {context} / {prompt}",
            &[("title", "{context}"), ("context", "{prompt}"), ("prompt", "P")],
        );
        assert_eq!(out, "{context} / {prompt} / P");
    }

    #[test]
    fn test_fill_template_ignores_json_braces() {
        let out = fill_template("{\n  \"score\": 1\n} {a}", &[("a", "X")]);
        assert_eq!(out, "{\n  \"score\": 1\n} X");
    }
}
