//! Built-in condition table and emergency phrase list.

use std::sync::LazyLock;

use super::types::{ConditionRecord, KnowledgeBase, Severity};

struct ConditionSeed {
    name: &'static str,
    symptoms: &'static [&'static str],
    info: &'static str,
    recommendations: &'static str,
    severity: Severity,
}

static CONDITIONS: &[ConditionSeed] = &[
    ConditionSeed {
        name: "common cold",
        symptoms: &["runny nose", "sneezing", "cough", "sore throat", "mild fever", "congestion", "headache"],
        info: "A viral infection affecting the upper respiratory tract.",
        recommendations: "Rest, stay hydrated, use over-the-counter cold medications, and consider vitamin C. Symptoms typically resolve in 7-10 days.",
        severity: Severity::Mild,
    },
    ConditionSeed {
        name: "flu",
        symptoms: &["high fever", "body aches", "fatigue", "chills", "cough", "headache", "weakness", "muscle pain"],
        info: "Influenza is a viral infection that attacks the respiratory system.",
        recommendations: "Rest, drink plenty of fluids, take antiviral medications if prescribed within 48 hours, and monitor temperature. Seek medical attention if symptoms worsen.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "migraine",
        symptoms: &["severe headache", "nausea", "light sensitivity", "sound sensitivity", "visual disturbances", "throbbing pain", "aura"],
        info: "A neurological condition causing intense headaches.",
        recommendations: "Rest in a dark, quiet room, apply cold compress, stay hydrated, and consider prescribed migraine medication. Identify and avoid triggers.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "food poisoning",
        symptoms: &["nausea", "vomiting", "diarrhea", "stomach cramps", "stomach pain", "fever", "weakness", "abdominal pain"],
        info: "Illness caused by consuming contaminated food or water.",
        recommendations: "Stay hydrated with clear fluids, rest, avoid solid foods initially, and gradually reintroduce bland foods. Seek medical help if symptoms persist beyond 48 hours.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "allergies",
        symptoms: &["sneezing", "runny nose", "itchy eyes", "watery eyes", "congestion", "rash", "itching", "hives"],
        info: "An immune system response to allergens in the environment.",
        recommendations: "Identify and avoid allergens, use antihistamines, keep windows closed during high pollen times, and consider allergy testing.",
        severity: Severity::Mild,
    },
    ConditionSeed {
        name: "strep throat",
        symptoms: &["severe sore throat", "painful swallowing", "fever", "swollen lymph nodes", "white patches on tonsils", "headache", "red throat"],
        info: "A bacterial infection causing throat inflammation.",
        recommendations: "See a doctor for antibiotic treatment, rest, drink warm liquids, gargle with salt water, and take pain relievers as needed.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "asthma",
        symptoms: &["wheezing", "shortness of breath", "chest tightness", "coughing", "difficulty breathing", "rapid breathing"],
        info: "A chronic respiratory condition causing airway inflammation.",
        recommendations: "Use prescribed inhalers, avoid triggers, monitor peak flow, and develop an asthma action plan with your doctor.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "gastritis",
        symptoms: &["stomach pain", "nausea", "bloating", "indigestion", "burning sensation", "loss of appetite", "heartburn"],
        info: "Inflammation of the stomach lining.",
        recommendations: "Eat smaller meals, avoid spicy and acidic foods, reduce stress, limit alcohol, and consider antacids. See a doctor if symptoms persist.",
        severity: Severity::Mild,
    },
    ConditionSeed {
        name: "sinusitis",
        symptoms: &["facial pain", "nasal congestion", "thick nasal discharge", "headache", "pressure around eyes", "reduced sense of smell", "postnasal drip"],
        info: "Inflammation of the sinuses often caused by infection.",
        recommendations: "Use saline nasal spray, apply warm compress, stay hydrated, use decongestants, and see a doctor if symptoms last more than 10 days.",
        severity: Severity::Mild,
    },
    ConditionSeed {
        name: "anxiety",
        symptoms: &["excessive worry", "restlessness", "rapid heartbeat", "sweating", "trembling", "difficulty concentrating", "sleep problems", "panic"],
        info: "A mental health condition characterized by persistent worry and fear.",
        recommendations: "Practice relaxation techniques, exercise regularly, maintain a healthy sleep schedule, consider therapy or counseling, and speak with a mental health professional.",
        severity: Severity::Moderate,
    },
    ConditionSeed {
        name: "bronchitis",
        symptoms: &["persistent cough", "mucus production", "chest discomfort", "fatigue", "shortness of breath", "wheezing", "low fever"],
        info: "Inflammation of the bronchial tubes in the lungs.",
        recommendations: "Rest, drink plenty of fluids, use a humidifier, avoid lung irritants, and consider cough suppressants. See a doctor if symptoms persist beyond 3 weeks.",
        severity: Severity::Mild,
    },
    ConditionSeed {
        name: "urinary tract infection",
        symptoms: &["burning urination", "frequent urination", "urgent urination", "cloudy urine", "pelvic pain", "blood in urine", "strong-smelling urine"],
        info: "A bacterial infection affecting the urinary system.",
        recommendations: "Drink plenty of water, see a doctor for antibiotics, avoid caffeine and alcohol, and urinate frequently. Do not delay treatment.",
        severity: Severity::Moderate,
    },
];

static EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "severe bleeding",
    "loss of consciousness",
    "confusion",
    "sudden severe headache",
    "paralysis",
    "stroke symptoms",
    "heart attack",
    "severe allergic reaction",
    "suicide thoughts",
    "suicidal",
    "severe burn",
    "choking",
    "seizure",
    "poisoning",
    "severe injury",
    "can't breathe",
    "cannot breathe",
    "crushing chest pain",
    "slurred speech",
];

/// The built-in table, constructed once on first use.
pub static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(KnowledgeBase::builtin);

impl KnowledgeBase {
    /// The bundled condition table in its definition order.
    pub fn builtin() -> Self {
        let conditions = CONDITIONS
            .iter()
            .map(|seed| ConditionRecord {
                name: seed.name.to_string(),
                symptoms: seed.symptoms.iter().map(|s| s.to_string()).collect(),
                description: seed.info.to_string(),
                recommendation: seed.recommendations.to_string(),
                severity: seed.severity,
            })
            .collect();
        let emergency_phrases = EMERGENCY_PHRASES.iter().map(|s| s.to_string()).collect();

        // Bypasses `new`: the bundled table is covered by `builtin_table_is_valid`.
        Self::from_parts(conditions, emergency_phrases)
    }
}
