//! The six-step client intake questionnaire.

use crate::core::schema::{Blueprint, Choice, FieldSpec, RevealRule, StepSpec};

use crate::core::schema::SemanticType::{Email, Enum, FreeText, MultiSelect, Phone, Text};

pub const PRODUCT_LIVE: &str = "ja";

const YES_NO_BETWEEN: &[Choice] = &[
    Choice::new("ja", "Ja"),
    Choice::new("nein", "Nein"),
    Choice::new(
        "zwischen",
        "Etwas dazwischen (z.B. bereits tätig, aber noch nicht formell registriert)",
    ),
];

const TEAM_SIZES: &[Choice] = &[
    Choice::new("1", "1"),
    Choice::new("2-5", "2–5"),
    Choice::new("6-10", "6–10"),
    Choice::new("11-20", "11–20"),
    Choice::new("21+", "21+"),
];

const REVENUES: &[Choice] = &[
    Choice::new("gruendung", "Unternehmen in Gründung / noch kein Umsatz"),
    Choice::new("unter-10k", "Weniger als 10.000 EUR"),
    Choice::new("10k-30k", "10.000 – 30.000 EUR"),
    Choice::new("30k-100k", "30.000 – 100.000 EUR"),
    Choice::new("100k-250k", "100.000 – 250.000 EUR"),
    Choice::new("250k-500k", "250.000 – 500.000 EUR"),
    Choice::new("ueber-500k", "Mehr als 500.000 EUR"),
];

const PRODUCT_STATES: &[Choice] = &[
    Choice::new(PRODUCT_LIVE, "Ja"),
    Choice::new("nein", "Nein"),
    Choice::new("entwicklung", "In Entwicklung"),
];

// Stored value and label are the same text for these.
const MAIN_REASONS: &[Choice] = &[
    reason("Entwicklung von Softwarelösungen (Web, Mobile App usw.)"),
    reason("Digitale Transformation des Unternehmens"),
    reason("Beratung zur digitalen Strategie"),
    reason("Automatisierung von Prozessen"),
    reason("Steigerung der Verkäufe über digitale Kanäle"),
    reason("Branding und UI/UX Design"),
    reason("Erstellung oder Verbesserung der Website"),
    reason("Cloud-Migration / DevOps / Technischer Support"),
];

const PRIORITIES: &[Choice] = &[
    Choice::new("umsatz", "Umsatzsteigerung"),
    Choice::new("kosten", "Kostensenkung"),
    Choice::new("optimierung", "Optimierung der Geschäftsprozesse"),
    Choice::new("markt", "Schnellerer Markteintritt"),
    Choice::new("branding", "Branding und Positionierung"),
];

const TECH_TEAM: &[Choice] = &[
    Choice::new("ja", "Ja"),
    Choice::new("nein", "Nein"),
    Choice::new("teilweise", "Teilweise (z.B. gelegentlich Freelancer)"),
];

const IDEAS: &[Choice] = &[
    Choice::new("ja", "Ja (können Link hinzufügen oder Datei hochladen)"),
    Choice::new("nein", "Noch nicht, wir erwarten Hilfe von Ihnen"),
    Choice::new("teilweise", "Teilweise – wir haben eine Vision"),
];

const TIMELINES: &[Choice] = &[
    Choice::new("sofort", "Sofort"),
    Choice::new("4-wochen", "In den nächsten 4 Wochen"),
    Choice::new("2-3-monate", "In den nächsten 2–3 Monaten"),
    Choice::new("spaeter", "Später als 3 Monate"),
    Choice::new("unbekannt", "Noch nicht sicher"),
];

const BUDGETS: &[Choice] = &[
    Choice::new("bis-3k", "Bis zu 3.000 EUR"),
    Choice::new("3k-7k", "3.000 – 7.000 EUR"),
    Choice::new("7k-15k", "7.000 – 15.000 EUR"),
    Choice::new("15k-30k", "15.000 – 30.000 EUR"),
    Choice::new("30k-50k", "30.000 – 50.000 EUR"),
    Choice::new("50k+", "50.000+ EUR"),
    Choice::new("kein-budget", "Noch kein klares Budget"),
    Choice::new("vorschlag", "Wir erwarten einen Vorschlag von Ihnen"),
];

const AGENCIES: &[Choice] = &[
    Choice::new("ja", "Ja"),
    Choice::new("nein", "Nein"),
    Choice::new("teilweise", "Teilweise (z.B. Einzelpersonen, Freelancer)"),
];

const TEAM_REVEALS: &[RevealRule] =
    &[RevealRule::new("productDescription", "hasProduct", PRODUCT_LIVE)];

const fn reason(text: &'static str) -> Choice {
    Choice::new(text, text)
}

pub static INTAKE: Blueprint = Blueprint {
    title: "VERA IT – Formular für neue Kunden",
    steps: &[
        StepSpec::new("Grunddaten über Ihr Unternehmen"),
        StepSpec::new("Team und aktuelle Phase").reveals(TEAM_REVEALS),
        StepSpec::new("Ziele und Bedürfnisse"),
        StepSpec::new("Technische Details und Erwartungen"),
        StepSpec::new("Budget und Offenheit für Zusammenarbeit").description(
            "Diese Information ist vertraulich und dient nur unserer internen Bewertung und Lösungsempfehlung.",
        ),
        StepSpec::new("Zusätzliche Fragen / Kommentare").description(
            "Vielen Dank für Ihre Zeit! Basierend auf Ihren Antworten werden wir uns so schnell wie möglich bei Ihnen melden.",
        ),
    ],
    fields: &[
        // 1
        FieldSpec::new("name", Text, 1, "Name und Vorname")
            .required()
            .placeholder("Max Mustermann"),
        FieldSpec::new("email", Email, 1, "E-Mail-Adresse")
            .required()
            .placeholder("max@unternehmen.de"),
        FieldSpec::new("phone", Phone, 1, "Telefonnummer").placeholder("+49 123 456789"),
        FieldSpec::new("companyName", Text, 1, "Firmenname")
            .required()
            .placeholder("Mein Unternehmen GmbH"),
        FieldSpec::new(
            "companyStage",
            Enum,
            1,
            "Ist Ihr Unternehmen in der Gründungsphase?",
        )
        .options(YES_NO_BETWEEN),
        FieldSpec::new("website", Text, 1, "Website des Unternehmens")
            .placeholder("www.meinunternehmen.de oder 'noch keine'"),
        FieldSpec::new("linkedin", Text, 1, "LinkedIn-Profil des Unternehmens")
            .placeholder("linkedin.com/company/meinunternehmen"),
        FieldSpec::new("industry", Text, 1, "Was ist Ihre Branche/Industrie?")
            .required()
            .placeholder("z.B. Herstellung von Naturkosmetik, Online-Bildung, SaaS für Logistik"),
        // 2
        FieldSpec::new("teamSize", Enum, 2, "Wie viele Teammitglieder haben Sie derzeit?")
            .required()
            .placeholder("Teamgröße auswählen")
            .options(TEAM_SIZES),
        FieldSpec::new("revenue", Enum, 2, "Wie hoch war Ihr Jahresumsatz im letzten Jahr?")
            .required()
            .placeholder("Umsatz auswählen")
            .options(REVENUES),
        FieldSpec::new(
            "hasProduct",
            Enum,
            2,
            "Haben Sie bereits ein konkretes Produkt, eine App oder Website in Betrieb?",
        )
        .required()
        .options(PRODUCT_STATES),
        FieldSpec::new(
            "productDescription",
            FreeText,
            2,
            "Bitte geben Sie den Link oder eine kurze Beschreibung an:",
        )
        .placeholder("Link oder Beschreibung Ihres Produkts"),
        // 3
        FieldSpec::new(
            "mainReasons",
            MultiSelect,
            3,
            "Was ist der Hauptgrund, warum Sie sich an VERA IT gewandt haben? (Mehrfachauswahl möglich)",
        )
        .required()
        .options(MAIN_REASONS),
        FieldSpec::new("painPoint", FreeText, 3, "Was ist derzeit Ihre größte Herausforderung?")
            .placeholder("Beschreiben Sie Ihre aktuelle Herausforderung (max. 500 Zeichen)")
            .max_len(500),
        FieldSpec::new(
            "futureGoals",
            FreeText,
            3,
            "Wo möchten Sie in 12 Monaten stehen (digital gesehen)?",
        )
        .placeholder("Beschreiben Sie Ihre Ziele für die nächsten 12 Monate (max. 500 Zeichen)")
        .max_len(500),
        FieldSpec::new("priority", Enum, 3, "Was ist Ihnen derzeit wichtiger?").options(PRIORITIES),
        // 4
        FieldSpec::new(
            "hasTechTeam",
            Enum,
            4,
            "Haben Sie bereits ein technisches Team oder Partner?",
        )
        .required()
        .options(TECH_TEAM),
        FieldSpec::new("techPreferences", Text, 4, "Bevorzugen Sie bestimmte Technologien?")
            .placeholder("z.B. React, Next.js, WordPress, Laravel, Python... oder 'nicht sicher'"),
        FieldSpec::new(
            "hasIdeas",
            Enum,
            4,
            "Haben Sie bereits Ideen/Skizzen/Beispiele für die gewünschte Lösung?",
        )
        .options(IDEAS),
        FieldSpec::new(
            "timeline",
            Enum,
            4,
            "Wie ist der ungefähre Zeitrahmen für den Projektstart?",
        )
        .required()
        .placeholder("Zeitrahmen auswählen")
        .options(TIMELINES),
        // 5
        FieldSpec::new(
            "budget",
            Enum,
            5,
            "Haben Sie einen ungefähren Budgetrahmen für das Projekt?",
        )
        .required()
        .placeholder("Budget auswählen")
        .options(BUDGETS),
        FieldSpec::new(
            "hasWorkedWithAgencies",
            Enum,
            5,
            "Haben Sie bereits mit IT-Unternehmen oder Agenturen zusammengearbeitet?",
        )
        .required()
        .options(AGENCIES),
        // 6
        FieldSpec::new(
            "additionalComments",
            FreeText,
            6,
            "Gibt es noch etwas, was Sie vor unserem ersten Gespräch mit uns teilen möchten?",
        )
        .placeholder("Ihre zusätzlichen Kommentare oder Fragen..."),
    ],
};
