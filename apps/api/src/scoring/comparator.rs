//! Gap detection and similarity against a scenario's ideal prompt.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::scenario::Scenario;

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\)").expect("numbered item pattern is valid"));
static STRUCTURE_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)struktur:?\s*([^.]{0,100})").expect("structure label pattern is valid")
});
static NUMBERED_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\)\s*[^,\d)]{10,40}").expect("numbered clause pattern is valid")
});

const MAX_HINTS: usize = 4;
const DETAIL_RATIO: f64 = 0.3;
const EXCERPT_CHARS: usize = 80;
const IDEAL_QUOTE_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapKind {
    MissingKeyword,
    MissingStructure,
    MissingConcept,
    InsufficientDetail,
}

/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Gap {
    #[serde(rename = "type")]
    pub kind: GapKind,
    pub element: String,
    pub importance: Importance,
    pub suggestion: String,
}

impl Gap {
    fn new(
        kind: GapKind,
        element: &str,
        importance: Importance,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            element: element.to_string(),
            importance,
            suggestion: suggestion.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub gaps: Vec<Gap>,
    pub similarity: u32,
    pub contextual_hints: Vec<String>,
}

/// Structural element the ideal prompt uses and the user prompt should too.
struct StructuralElement {
    name: &'static str,
    importance: Importance,
    suggestion: &'static str,
    present_in_ideal: fn(&str) -> bool,
    satisfied_by: fn(&str) -> bool,
}

fn ideal_has_numbering(ideal: &str) -> bool {
    NUMBERED_ITEM.is_match(ideal)
}

fn user_has_numbering(user: &str) -> bool {
    NUMBERED_ITEM.is_match(user) || user.contains("1.") || user.contains("punkt")
}

fn ideal_has_structure_label(ideal: &str) -> bool {
    ideal.contains("struktur:") || ideal.contains("beinhalte:")
}

fn user_has_structure_word(user: &str) -> bool {
    user.contains("struktur") || user.contains("beinhalte") || user.contains("gliederung")
}

fn ideal_has_tone(ideal: &str) -> bool {
    ideal.contains("ton:") || ideal.contains("empathisch") || ideal.contains("professionell")
}

fn user_has_tone(user: &str) -> bool {
    user.contains("ton") || user.contains("empathisch") || user.contains("professionell")
}

const STRUCTURAL_ELEMENTS: &[StructuralElement] = &[
    StructuralElement {
        name: "Nummerierte Struktur",
        importance: Importance::High,
        suggestion: "Strukturieren Sie Ihren Prompt mit nummerierten Punkten (1), 2), 3)...)",
        present_in_ideal: ideal_has_numbering,
        satisfied_by: user_has_numbering,
    },
    StructuralElement {
        name: "Explizite Strukturangabe",
        importance: Importance::High,
        suggestion: "Geben Sie eine klare Struktur vor (z.B. \"Struktur: 1) Einleitung, 2) Hauptteil...\")",
        present_in_ideal: ideal_has_structure_label,
        satisfied_by: user_has_structure_word,
    },
    StructuralElement {
        name: "Tonangabe",
        importance: Importance::Medium,
        suggestion: "Spezifizieren Sie den gewünschten Ton (z.B. \"Ton: empathisch aber professionell\")",
        present_in_ideal: ideal_has_tone,
        satisfied_by: user_has_tone,
    },
];

/// Government concepts checked when the ideal prompt mentions them.
const DOMAIN_CONCEPTS: &[(&str, Importance, &str)] = &[
    ("rechtsgrundlage", Importance::High, "Erwähnen Sie die relevante Rechtsgrundlage"),
    ("dsgvo", Importance::High, "Berücksichtigen Sie DSGVO-Anforderungen"),
    ("barrierefrei", Importance::High, "Denken Sie an Barrierefreiheit"),
    ("widerspruch", Importance::Medium, "Erwähnen Sie das Widerspruchsrecht"),
    ("beratung", Importance::Medium, "Bieten Sie Beratungsangebote an"),
];

pub fn compare_with_ideal(prompt: &str, scenario: &Scenario) -> Comparison {
    let user = prompt.to_lowercase();
    let ideal = scenario.ideal_prompt.to_lowercase();

    let gaps = identify_gaps(&user, &ideal, scenario);
    let similarity = jaccard_similarity(&user, &ideal);
    let contextual_hints = contextual_hints(&gaps, &scenario.ideal_prompt);

    Comparison {
        gaps,
        similarity,
        contextual_hints,
    }
}

fn identify_gaps(user: &str, ideal: &str, scenario: &Scenario) -> Vec<Gap> {
    let mut gaps = Vec::new();

    for phrase in &scenario.evaluation.key_phrases {
        let needle = phrase.trim().to_lowercase();
        if !needle.is_empty() && !user.contains(&needle) {
            gaps.push(Gap::new(
                GapKind::MissingKeyword,
                phrase,
                Importance::High,
                format!("Berücksichtigen Sie \"{phrase}\" in Ihrem Prompt"),
            ));
        }
    }

    for element in STRUCTURAL_ELEMENTS {
        if (element.present_in_ideal)(ideal) && !(element.satisfied_by)(user) {
            gaps.push(Gap::new(
                GapKind::MissingStructure,
                element.name,
                element.importance,
                element.suggestion,
            ));
        }
    }

    for (term, importance, suggestion) in DOMAIN_CONCEPTS {
        if ideal.contains(term) && !user.contains(term) {
            gaps.push(Gap::new(GapKind::MissingConcept, term, *importance, *suggestion));
        }
    }
    if scenario.department.to_lowercase().contains("jobcenter") && !user.contains("bürgergeld") {
        gaps.push(Gap::new(
            GapKind::MissingConcept,
            "bürgergeld",
            Importance::High,
            "Berücksichtigen Sie Bürgergeld-spezifische Aspekte",
        ));
    }

    if is_insufficient_detail(user, ideal) {
        gaps.push(Gap::new(
            GapKind::InsufficientDetail,
            "Detaillierungsgrad",
            Importance::Medium,
            "Fügen Sie mehr spezifische Details und Anforderungen hinzu",
        ));
    }

    // Stable: equal importance keeps detection order.
    gaps.sort_by(|a, b| b.importance.cmp(&a.importance));
    gaps
}

fn is_insufficient_detail(user: &str, ideal: &str) -> bool {
    let user_words = user.split(' ').count() as f64;
    let ideal_words = ideal.split(' ').count() as f64;
    user_words < ideal_words * DETAIL_RATIO
}

fn word_set(text: &str) -> HashSet<&str> {
    text.split(' ').filter(|w| w.chars().count() > 2).collect()
}

/// Jaccard index of the word sets (words longer than two chars) as a rounded
/// percentage. Inputs are compared as given; callers lower-case first.
pub fn jaccard_similarity(a: &str, b: &str) -> u32 {
    let a = word_set(a);
    let b = word_set(b);
    let union = a.union(&b).count();
    if union == 0 {
        return 0;
    }
    let intersection = a.intersection(&b).count();
    (intersection as f64 / union as f64 * 100.0).round() as u32
}

fn contextual_hints(gaps: &[Gap], ideal_prompt: &str) -> Vec<String> {
    let high = gaps.iter().filter(|g| g.importance == Importance::High).take(2);
    let medium = gaps.iter().filter(|g| g.importance == Importance::Medium).take(1);

    let mut hints: Vec<String> = high.chain(medium).map(|g| g.suggestion.clone()).collect();

    if gaps.iter().any(|g| g.kind == GapKind::MissingStructure) {
        hints.push(format!(
            "Orientieren Sie sich an der Struktur: \"{}\"",
            extract_structure_example(ideal_prompt)
        ));
    }

    hints.truncate(MAX_HINTS);
    hints
}

/// Short excerpt of how the ideal prompt structures itself.
pub fn extract_structure_example(ideal_prompt: &str) -> String {
    if let Some(caps) = STRUCTURE_LABEL.captures(ideal_prompt) {
        let body = caps.get(1).map_or("", |m| m.as_str()).trim();
        let excerpt: String = body.chars().take(EXCERPT_CHARS).collect();
        return format!("{excerpt}...");
    }

    let clauses: Vec<&str> = NUMBERED_CLAUSE
        .find_iter(ideal_prompt)
        .map(|m| m.as_str())
        .take(2)
        .collect();
    if clauses.len() == 2 {
        return format!("{}...", clauses.join(", "));
    }

    "Strukturierte Gliederung verwenden".to_string()
}

/// Guidance lines derived from how close the prompt is to the ideal one.
pub fn ideal_prompt_suggestions(prompt: &str, scenario: &Scenario) -> Vec<String> {
    let comparison = compare_with_ideal(prompt, scenario);

    if comparison.similarity > 70 {
        return vec![
            "Ihr Prompt ist bereits sehr nah am idealen Prompt! Kleine Verfeinerungen können noch helfen."
                .to_string(),
        ];
    }
    if comparison.similarity > 50 {
        return comparison.contextual_hints;
    }

    let quote: String = scenario.ideal_prompt.chars().take(IDEAL_QUOTE_CHARS).collect();
    let mut out = vec!["Ihr Prompt unterscheidet sich erheblich vom optimalen Ansatz.".to_string()];
    out.extend(comparison.contextual_hints.into_iter().take(2));
    out.push(format!("Vergleichen Sie mit dem idealen Ansatz: \"{quote}...\""));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::catalog::{builtin_scenarios, find_builtin};

    #[test]
    fn test_similarity_identity_and_disjoint() {
        let text = "verfasse einen offiziellen bescheid mit rechtsgrundlage";
        assert_eq!(jaccard_similarity(text, text), 100);
        assert_eq!(jaccard_similarity("apfel birne", "kirsche pflaume"), 0);
        assert_eq!(jaccard_similarity("", ""), 0);
        assert_eq!(jaccard_similarity("ab cd", "ef"), 0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = "erstelle einen klaren brief für bürger";
        let b = "schreibe einen brief für antragsteller";
        assert_eq!(jaccard_similarity(a, b), jaccard_similarity(b, a));
        // {einen, brief, für} over 8 distinct words
        assert_eq!(jaccard_similarity(a, b), 38);
    }

    #[test]
    fn test_ideal_prompt_compares_fully_similar_to_itself() {
        for s in builtin_scenarios() {
            let c = compare_with_ideal(&s.ideal_prompt, s);
            assert_eq!(c.similarity, 100, "scenario {}", s.id);
        }
    }

    #[test]
    fn test_gaps_sorted_by_descending_importance() {
        for s in builtin_scenarios() {
            let c = compare_with_ideal("Schreib was.", s);
            assert!(!c.gaps.is_empty());
            for pair in c.gaps.windows(2) {
                assert!(pair[0].importance >= pair[1].importance);
            }
        }
    }

    #[test]
    fn test_equal_importance_keeps_detection_order() {
        let s = find_builtin("1").unwrap();
        let c = compare_with_ideal("kurz", s);
        let high: Vec<&str> = c
            .gaps
            .iter()
            .filter(|g| g.importance == Importance::High)
            .map(|g| g.element.as_str())
            .collect();
        assert_eq!(&high[..2], &["empathisch", "Rechtsgrundlage"]);
    }

    #[test]
    fn test_short_prompt_has_insufficient_detail() {
        let s = find_builtin("1").unwrap();
        assert!(s.ideal_prompt.split(' ').count() > 35);
        let c = compare_with_ideal("Brief bitte", s);
        assert!(c
            .gaps
            .iter()
            .any(|g| g.kind == GapKind::InsufficientDetail && g.importance == Importance::Medium));
    }

    #[test]
    fn test_ideal_prompt_has_no_gaps_against_itself() {
        let s = find_builtin("1").unwrap();
        let c = compare_with_ideal(&s.ideal_prompt, s);
        assert!(c
            .gaps
            .iter()
            .all(|g| g.kind == GapKind::MissingKeyword));
    }

    #[test]
    fn test_jobcenter_requires_buergergeld() {
        let s = find_builtin("4").unwrap();
        let c = compare_with_ideal("Erkläre den Bescheid", s);
        assert!(c
            .gaps
            .iter()
            .any(|g| g.element == "bürgergeld" && g.kind == GapKind::MissingConcept));

        let other = find_builtin("1").unwrap();
        let c = compare_with_ideal("Erkläre den Bescheid", other);
        assert!(!c.gaps.iter().any(|g| g.element == "bürgergeld"));
    }

    #[test]
    fn test_contextual_hints_capped_and_include_structure_example() {
        for s in builtin_scenarios() {
            let c = compare_with_ideal("x", s);
            assert!(c.contextual_hints.len() <= MAX_HINTS);
        }
        let s = find_builtin("1").unwrap();
        let c = compare_with_ideal("Schreib einen Brief.", s);
        assert!(c
            .contextual_hints
            .iter()
            .any(|h| h.starts_with("Orientieren Sie sich an der Struktur: \"1) Höfliche Anrede")));
    }

    #[test]
    fn test_structure_example_fallbacks() {
        let numbered = "Schreibe: 1) eine freundliche Einleitung, 2) einen sachlichen Hauptteil, 3) Ende";
        assert_eq!(
            extract_structure_example(numbered),
            "1) eine freundliche Einleitung, 2) einen sachlichen Hauptteil..."
        );
        assert_eq!(
            extract_structure_example("Ein Satz ohne Liste"),
            "Strukturierte Gliederung verwenden"
        );
    }

    #[test]
    fn test_structure_example_is_cut_to_80_chars() {
        let ideal = format!("Struktur: {}. Rest", "a".repeat(150));
        let excerpt = extract_structure_example(&ideal);
        assert_eq!(excerpt, format!("{}...", "a".repeat(80)));
    }

    #[test]
    fn test_ideal_prompt_suggestions_bands() {
        let s = find_builtin("1").unwrap();

        let close = ideal_prompt_suggestions(&s.ideal_prompt, s);
        assert_eq!(close.len(), 1);
        assert!(close[0].starts_with("Ihr Prompt ist bereits sehr nah"));

        let far = ideal_prompt_suggestions("Schreib einen Brief.", s);
        assert_eq!(far[0], "Ihr Prompt unterscheidet sich erheblich vom optimalen Ansatz.");
        assert!(far.last().unwrap().starts_with("Vergleichen Sie mit dem idealen Ansatz: \"Verfasse"));
        assert!(far.len() <= 4);
    }
}
