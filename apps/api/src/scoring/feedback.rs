//! Canned German feedback derived from the total score and the breakdown.

use super::ScoreBreakdown;

const MAX_SUGGESTIONS: usize = 4;
const SUGGESTION_THRESHOLD: u32 = 60;
const STRENGTH_THRESHOLD: u32 = 75;
const CRITICAL_THRESHOLD: u32 = 40;

pub fn feedback_for(score: u32) -> &'static str {
    match score {
        85.. => "Exzellenter Prompt! Sie demonstrieren tiefes Verständnis für behördliche Kommunikation und haben alle wesentlichen Elemente für effektive KI-Anweisungen berücksichtigt.",
        70..=84 => "Guter Prompt mit solider Grundlage. Sie zeigen Verständnis für die Anforderungen des öffentlichen Sektors, könnten aber in einigen Bereichen spezifischer werden.",
        55..=69 => "Akzeptabler Prompt mit Verbesserungspotenzial. Fokussieren Sie sich auf mehr Spezifität und berücksichtigen Sie stärker die behördlichen Anforderungen.",
        _ => "Dieser Prompt benötigt erhebliche Überarbeitung. Berücksichtigen Sie die spezifischen Anforderungen des öffentlichen Sektors und strukturieren Sie Ihre Anweisungen klarer.",
    }
}

/// One suggestion per weak dimension, in breakdown order, at most four.
pub fn suggestions_for(b: &ScoreBreakdown) -> Vec<String> {
    let candidates = [
        (b.clarity, "Strukturieren Sie Ihren Prompt mit nummerierten Punkten oder Aufzählungen"),
        (b.specificity, "Spezifizieren Sie den gewünschten Ton und die Zielgruppe deutlicher"),
        (b.context, "Beziehen Sie sich explizit auf den Szenario-Kontext und die Abteilung"),
        (b.structure, "Verwenden Sie eine klare Struktur mit logischen Abschnitten"),
        (
            b.domain_knowledge,
            "Berücksichtigen Sie spezifische behördliche Anforderungen (Rechtssicherheit, Barrierefreiheit, DSGVO)",
        ),
    ];

    candidates
        .into_iter()
        .filter(|(score, _)| *score < SUGGESTION_THRESHOLD)
        .map(|(_, text)| text.to_string())
        .take(MAX_SUGGESTIONS)
        .collect()
}

pub fn strengths_for(b: &ScoreBreakdown) -> Vec<String> {
    [
        (b.clarity, "Klare und verständliche Formulierung"),
        (b.specificity, "Hohe Spezifität der Anforderungen"),
        (b.context, "Gute Kontextberücksichtigung"),
        (b.structure, "Exzellente Strukturierung"),
        (b.domain_knowledge, "Starkes Fachwissen für öffentlichen Sektor"),
    ]
    .into_iter()
    .filter(|(score, _)| *score >= STRENGTH_THRESHOLD)
    .map(|(_, text)| text.to_string())
    .collect()
}

/// Clarity is never critical; the other four are checked domain-first.
pub fn critical_issues_for(b: &ScoreBreakdown) -> Vec<String> {
    [
        (b.domain_knowledge, "Mangelnde Berücksichtigung behördlicher Anforderungen"),
        (b.specificity, "Zu vage Anweisungen"),
        (b.context, "Unzureichende Kontextberücksichtigung"),
        (b.structure, "Fehlende logische Struktur"),
    ]
    .into_iter()
    .filter(|(score, _)| *score < CRITICAL_THRESHOLD)
    .map(|(_, text)| text.to_string())
    .collect()
}

/// Short label shown next to a score.
pub fn score_badge(score: u32) -> &'static str {
    match score {
        80.. => "Ausgezeichnet",
        60..=79 => "Gut",
        40..=59 => "Akzeptabel",
        _ => "Verbesserungsbedarf",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(v: [u32; 5]) -> ScoreBreakdown {
        ScoreBreakdown {
            clarity: v[0],
            specificity: v[1],
            context: v[2],
            structure: v[3],
            domain_knowledge: v[4],
        }
    }

    #[test]
    fn test_feedback_bands() {
        assert!(feedback_for(85).starts_with("Exzellenter"));
        assert!(feedback_for(84).starts_with("Guter"));
        assert!(feedback_for(70).starts_with("Guter"));
        assert!(feedback_for(69).starts_with("Akzeptabler"));
        assert!(feedback_for(55).starts_with("Akzeptabler"));
        assert!(feedback_for(54).starts_with("Dieser Prompt"));
        assert!(feedback_for(0).starts_with("Dieser Prompt"));
    }

    #[test]
    fn test_suggestions_capped_at_four_in_fixed_order() {
        let s = suggestions_for(&breakdown([10, 10, 10, 10, 10]));
        assert_eq!(s.len(), 4);
        assert!(s[0].starts_with("Strukturieren Sie Ihren Prompt"));
        assert!(s[3].starts_with("Verwenden Sie eine klare Struktur"));
    }

    #[test]
    fn test_no_suggestions_when_all_dimensions_strong() {
        assert!(suggestions_for(&breakdown([60, 60, 60, 60, 60])).is_empty());
    }

    #[test]
    fn test_domain_suggestion_appears_when_room_left() {
        let s = suggestions_for(&breakdown([90, 90, 90, 90, 59]));
        assert_eq!(s.len(), 1);
        assert!(s[0].contains("DSGVO"));
    }

    #[test]
    fn test_strengths_threshold() {
        let s = strengths_for(&breakdown([75, 74, 100, 0, 80]));
        assert_eq!(
            s,
            vec![
                "Klare und verständliche Formulierung",
                "Gute Kontextberücksichtigung",
                "Starkes Fachwissen für öffentlichen Sektor"
            ]
        );
    }

    #[test]
    fn test_critical_issues_skip_clarity() {
        let issues = critical_issues_for(&breakdown([0, 39, 40, 0, 10]));
        assert_eq!(
            issues,
            vec![
                "Mangelnde Berücksichtigung behördlicher Anforderungen",
                "Zu vage Anweisungen",
                "Fehlende logische Struktur"
            ]
        );
    }

    #[test]
    fn test_score_badge() {
        assert_eq!(score_badge(80), "Ausgezeichnet");
        assert_eq!(score_badge(79), "Gut");
        assert_eq!(score_badge(40), "Akzeptabel");
        assert_eq!(score_badge(39), "Verbesserungsbedarf");
    }
}
