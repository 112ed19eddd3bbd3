// Prompt constants for ideal-prompt generation.
// Reuses the shared persona from llm_client::prompts.

use crate::llm_client::prompts::{fill_template, EXPERT_PERSONA};

/// Guidance paragraph per department. Departments not listed get none.
pub const DEPARTMENT_GUIDANCE: &[(&str, &str)] = &[
    (
        "Führungsaufgabe",
        "Der Prompt soll auf Führungskommunikation, Delegation, Teamsteuerung und strategische \
         Ausrichtung ausgelegt sein. Verwende klare Anweisungen, die ein Führungsstil widerspiegeln.",
    ),
    (
        "Fachlich - Leistung",
        "Der Prompt soll technisch präzise sein, messbare KPIs und Leistungskennzahlen \
         berücksichtigen und auf Optimierung und Effizienz abzielen.",
    ),
    (
        "Fachlich - MuI",
        "Der Prompt soll Change-Management-Aspekte, Integrationsfähigkeit, Nachhaltigkeit und \
         Modernisierungsgedanken berücksichtigen.",
    ),
];

/// Exact-match lookup; returns an empty string for unknown departments.
pub fn department_guidance(department: &str) -> &'static str {
    DEPARTMENT_GUIDANCE
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, guidance)| *guidance)
        .unwrap_or("")
}

const IDEAL_PROMPT_TEMPLATE: &str = r#"{persona}
Deine Aufgabe ist es, den perfekten, idealen Prompt zu formulieren, den ein Behördenmitarbeiter an eine KI schreiben sollte, um das gegebene Ziel im gegebenen Kontext optimal zu erreichen.

SZENARIO-TITEL: {title}
BESCHREIBUNG: {description}
KONTEXT: {context}
ZIEL: {goal}
ABTEILUNG: {department}

{guidance}

Schreibe den idealen Prompt direkt, ohne Erklärungen, ohne Einleitung, ohne Metakommentare.
Der Prompt soll:
- Klar, spezifisch und professionell formuliert sein
- Alle relevanten Kontextinformationen enthalten
- Das Ziel präzise adressieren
- Strukturiert und gut gegliedert sein
- Konkrete Schlüsselbegriffe und fachliche Terminologie verwenden
- Zwischen 200-500 Wörtern lang sein

Antworte NUR mit dem idealen Prompt-Text, nichts anderes.

Erstelle den idealen Prompt für das Szenario "{title}"."#;

pub fn build_ideal_prompt_request(
    title: &str,
    description: &str,
    context: &str,
    goal: &str,
    department: &str,
) -> String {
    fill_template(
        IDEAL_PROMPT_TEMPLATE,
        &[
            ("persona", EXPERT_PERSONA),
            ("guidance", department_guidance(department)),
            ("title", title),
            ("description", description),
            ("context", context),
            ("goal", goal),
            ("department", department),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_guidance_selection() {
        assert!(department_guidance("Führungsaufgabe").contains("Führungskommunikation"));
        assert!(department_guidance("Fachlich - Leistung").contains("KPIs"));
        assert!(department_guidance("Fachlich - MuI").contains("Change-Management"));
        assert_eq!(department_guidance("Jobcenter"), "");
        assert_eq!(department_guidance("führungsaufgabe"), "");
    }

    #[test]
    fn test_request_contains_inputs_and_title_twice() {
        let p = build_ideal_prompt_request(
            "Neue Teamstruktur",
            "Beschreibung",
            "Kontext X",
            "Ziel Y",
            "Führungsaufgabe",
        );
        assert!(p.contains("KONTEXT: Kontext X"));
        assert!(p.contains("ABTEILUNG: Führungsaufgabe"));
        assert!(p.contains("Delegation"));
        assert!(p.ends_with("Erstelle den idealen Prompt für das Szenario \"Neue Teamstruktur\"."));
        assert_eq!(p.matches("Neue Teamstruktur").count(), 2);
    }
}
