//! Keyword/structure analyzers, one rule table per scoring dimension.
//!
//! Every analyzer starts at a fixed baseline and adds the delta of each rule
//! that fires. Rules are plain data (`label`, predicate, delta) so each one can
//! be tested on its own. The accumulated value is clamped to [0, 100]; there is
//! no error path, an empty prompt simply yields the baseline adjustments.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::scenario::Scenario;

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\)").expect("numbered item pattern is valid"));

const STRUCTURE_MARKERS: &[&str] = &["1)", "-", "•", ":"];
const BULLET_MARKERS: &[&str] = &["•", "-"];
const INSTRUCTION_VERBS: &[&str] = &[
    "erstelle",
    "schreibe",
    "entwickle",
    "verfasse",
    "spezifiziere",
];

const TONE_WORDS: &[&str] = &["empathisch", "professionell", "klar", "verständlich", "amtlich"];
const AUDIENCE_WORDS: &[&str] = &["bürger", "antragsteller", "arbeitslose", "zielgruppe"];
const FORMAT_WORDS: &[&str] = &["struktur", "format", "aufbau", "gliederung"];
const COMPLIANCE_WORDS: &[&str] = &["rechtssicher", "dsgvo", "barrierefrei", "rechtsgrundlage"];

const SECTION_WORDS: &[&str] = &["beinhalte", "struktur", "aufbau", "gliederung"];
const FLOW_WORDS: &[&str] = &["zunächst", "dann", "anschließend", "abschließend"];

const GOVERNMENT_TERMS: &[&str] = &[
    "sgb",
    "bürgergeld",
    "arbeitslosengeld",
    "jobcenter",
    "arbeitsagentur",
];
const LEGAL_TERMS: &[&str] = &["rechtsgrundlage", "widerspruch", "dsgvo", "rechtssicher"];

/// How many leading context words are checked for overlap.
const CONTEXT_WORDS_CHECKED: usize = 10;

/// Prompt text prepared once for all analyzers.
#[derive(Debug, Clone)]
pub struct AnalyzerInput<'a> {
    /// Lower-cased prompt.
    pub text: String,
    /// Length of the original prompt in characters.
    pub char_len: usize,
    pub scenario: &'a Scenario,
}

impl<'a> AnalyzerInput<'a> {
    pub fn new(prompt: &str, scenario: &'a Scenario) -> Self {
        Self {
            text: prompt.to_lowercase(),
            char_len: prompt.chars().count(),
            scenario,
        }
    }

    fn contains_any(&self, words: &[&str]) -> bool {
        words.iter().any(|w| self.text.contains(w))
    }

    fn count_matches(&self, words: &[&str]) -> usize {
        words.iter().filter(|w| self.text.contains(*w)).count()
    }

    /// Case-insensitive containment; an empty needle never matches.
    fn mentions(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        !needle.is_empty() && self.text.contains(&needle)
    }
}

/// A single scoring rule.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Adds `delta` once when the predicate holds.
    Flag {
        label: &'static str,
        delta: i32,
        when: fn(&AnalyzerInput<'_>) -> bool,
    },
    /// Adds `points` per counted match, at most `cap`.
    Tally {
        label: &'static str,
        points: i32,
        cap: i32,
        count: fn(&AnalyzerInput<'_>) -> usize,
    },
}

impl Rule {
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Flag { label, .. } | Rule::Tally { label, .. } => label,
        }
    }

    /// Delta contributed by this rule for the given input (0 when it does not fire).
    pub fn delta(&self, input: &AnalyzerInput<'_>) -> i32 {
        match *self {
            Rule::Flag { delta, when, .. } => {
                if when(input) {
                    delta
                } else {
                    0
                }
            }
            Rule::Tally {
                points, cap, count, ..
            } => {
                let n = i32::try_from(count(input)).unwrap_or(i32::MAX);
                n.saturating_mul(points).min(cap)
            }
        }
    }
}

/// Baseline plus an ordered rule table for one dimension.
pub struct Analyzer {
    /// Breakdown field name, used in logs.
    pub name: &'static str,
    pub baseline: i32,
    pub rules: &'static [Rule],
}

/// Result of running one analyzer: clamped score and the labels that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerOutcome {
    pub score: u32,
    pub fired: Vec<&'static str>,
}

impl Analyzer {
    pub fn run(&self, input: &AnalyzerInput<'_>) -> AnalyzerOutcome {
        let mut total = self.baseline;
        let mut fired = Vec::new();
        for rule in self.rules {
            let delta = rule.delta(input);
            if delta != 0 {
                total += delta;
                fired.push(rule.label());
            }
        }
        AnalyzerOutcome {
            score: clamp_score(total),
            fired,
        }
    }

    pub fn score(&self, input: &AnalyzerInput<'_>) -> u32 {
        self.run(input).score
    }
}

pub fn clamp_score(value: i32) -> u32 {
    value.clamp(0, 100) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn has_structure_marker(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(STRUCTURE_MARKERS)
}

fn has_reasonable_length(i: &AnalyzerInput<'_>) -> bool {
    i.char_len > 100 && i.char_len < 800
}

fn is_too_short(i: &AnalyzerInput<'_>) -> bool {
    i.char_len < 50
}

fn has_instruction_verb(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(INSTRUCTION_VERBS)
}

fn has_tone_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(TONE_WORDS)
}

fn has_audience_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(AUDIENCE_WORDS)
}

fn has_format_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(FORMAT_WORDS)
}

fn has_compliance_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(COMPLIANCE_WORDS)
}

fn context_word_overlap(i: &AnalyzerInput<'_>) -> usize {
    let context = i.scenario.context.to_lowercase();
    context
        .split(' ')
        .take(CONTEXT_WORDS_CHECKED)
        .filter(|w| w.chars().count() > 3 && i.text.contains(*w))
        .count()
}

fn mentions_department(i: &AnalyzerInput<'_>) -> bool {
    i.mentions(&i.scenario.department)
}

fn mentions_category(i: &AnalyzerInput<'_>) -> bool {
    i.mentions(&i.scenario.category)
}

fn numbered_items(i: &AnalyzerInput<'_>) -> usize {
    NUMBERED_ITEM.find_iter(&i.text).count()
}

fn has_long_numbered_list(i: &AnalyzerInput<'_>) -> bool {
    numbered_items(i) >= 3
}

fn has_short_numbered_list(i: &AnalyzerInput<'_>) -> bool {
    matches!(numbered_items(i), 1 | 2)
}

fn has_bullets(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(BULLET_MARKERS)
}

fn has_section_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(SECTION_WORDS)
}

fn has_flow_word(i: &AnalyzerInput<'_>) -> bool {
    i.contains_any(FLOW_WORDS)
}

fn key_phrase_matches(i: &AnalyzerInput<'_>) -> usize {
    i.scenario
        .evaluation
        .key_phrases
        .iter()
        .filter(|p| i.mentions(p))
        .count()
}

fn government_term_matches(i: &AnalyzerInput<'_>) -> usize {
    i.count_matches(GOVERNMENT_TERMS)
}

fn legal_term_matches(i: &AnalyzerInput<'_>) -> usize {
    i.count_matches(LEGAL_TERMS)
}

// ────────────────────────────────────────────────────────────────────────────
// Rule tables
// ────────────────────────────────────────────────────────────────────────────

pub static CLARITY: Analyzer = Analyzer {
    name: "clarity",
    baseline: 50,
    rules: &[
        Rule::Flag {
            label: "structure_marker",
            delta: 15,
            when: has_structure_marker,
        },
        Rule::Flag {
            label: "reasonable_length",
            delta: 10,
            when: has_reasonable_length,
        },
        Rule::Flag {
            label: "too_short",
            delta: -15,
            when: is_too_short,
        },
        Rule::Flag {
            label: "instruction_verb",
            delta: 10,
            when: has_instruction_verb,
        },
    ],
};

pub static SPECIFICITY: Analyzer = Analyzer {
    name: "specificity",
    baseline: 40,
    rules: &[
        Rule::Flag {
            label: "tone",
            delta: 15,
            when: has_tone_word,
        },
        Rule::Flag {
            label: "audience",
            delta: 10,
            when: has_audience_word,
        },
        Rule::Flag {
            label: "format",
            delta: 15,
            when: has_format_word,
        },
        Rule::Flag {
            label: "compliance",
            delta: 20,
            when: has_compliance_word,
        },
    ],
};

pub static CONTEXT: Analyzer = Analyzer {
    name: "context",
    baseline: 30,
    rules: &[
        Rule::Tally {
            label: "context_overlap",
            points: 5,
            cap: 30,
            count: context_word_overlap,
        },
        Rule::Flag {
            label: "department",
            delta: 15,
            when: mentions_department,
        },
        Rule::Flag {
            label: "category",
            delta: 10,
            when: mentions_category,
        },
    ],
};

pub static STRUCTURE: Analyzer = Analyzer {
    name: "structure",
    baseline: 35,
    rules: &[
        Rule::Flag {
            label: "numbered_list_long",
            delta: 25,
            when: has_long_numbered_list,
        },
        Rule::Flag {
            label: "numbered_list_short",
            delta: 15,
            when: has_short_numbered_list,
        },
        Rule::Flag {
            label: "bullets",
            delta: 10,
            when: has_bullets,
        },
        Rule::Flag {
            label: "sections",
            delta: 15,
            when: has_section_word,
        },
        Rule::Flag {
            label: "flow",
            delta: 15,
            when: has_flow_word,
        },
    ],
};

pub static DOMAIN_KNOWLEDGE: Analyzer = Analyzer {
    name: "domainKnowledge",
    baseline: 25,
    rules: &[
        Rule::Tally {
            label: "key_phrases",
            points: 8,
            cap: 40,
            count: key_phrase_matches,
        },
        Rule::Tally {
            label: "government_terms",
            points: 5,
            cap: 20,
            count: government_term_matches,
        },
        Rule::Tally {
            label: "legal_terms",
            points: 5,
            cap: 15,
            count: legal_term_matches,
        },
    ],
};

/// All analyzers in breakdown order.
pub fn all() -> [&'static Analyzer; 5] {
    [&CLARITY, &SPECIFICITY, &CONTEXT, &STRUCTURE, &DOMAIN_KNOWLEDGE]
}
