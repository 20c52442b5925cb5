//! Intent rules: input normalization, the ordered symptom table, and
//! reply selection over a directory snapshot.
//!
//! Matching is deliberately best-effort substring classification.
//! First match wins at every step and the symptom table is a linear
//! scan — order is precedence for overlapping keywords, so it must not
//! be turned into a map.

use crate::messages::ReplyCopy;
use crate::models::{Department, Doctor};
use crate::reply::BotReply;

// ═══════════════════════════════════════════════════════════
// Symptom table
// ═══════════════════════════════════════════════════════════

/// One row of the symptom table: if any key is a substring of the
/// normalized input, route to the first department whose lowercased
/// name contains `department_match`.
pub struct SymptomRule {
    pub keys: &'static [&'static str],
    pub department_match: &'static str,
}

/// Scanned top to bottom, first match wins.
pub const SYMPTOM_RULES: &[SymptomRule] = &[
    SymptomRule {
        keys: &["skin", "rash", "itch", "pimple", "acne", "allergy"],
        department_match: "dermat",
    },
    SymptomRule {
        keys: &["heart", "bp", "blood pressure", "chest pain", "cardiac"],
        department_match: "cardio",
    },
    SymptomRule {
        keys: &["child", "baby", "kid", "pediatric"],
        department_match: "paediatric",
    },
    SymptomRule {
        keys: &["bone", "joint", "knee", "back pain", "fracture"],
        department_match: "ortho",
    },
    SymptomRule {
        keys: &["pregnancy", "period", "women", "gynae", "pcos"],
        department_match: "gynaeco",
    },
    SymptomRule {
        keys: &["stomach", "gas", "acidity", "digestion", "loose motion"],
        department_match: "gastro",
    },
    SymptomRule {
        keys: &["headache", "migraine", "brain", "seizure", "fits"],
        department_match: "neuro",
    },
    SymptomRule {
        keys: &["ear pain", "throat", "nose", "sinus", "tonsil"],
        department_match: "ent",
    },
    SymptomRule {
        keys: &["cough", "breathing", "asthma", "lungs"],
        department_match: "chest",
    },
    SymptomRule {
        keys: &["kidney", "dialysis", "urine infection"],
        department_match: "nephro",
    },
    SymptomRule {
        keys: &["urine", "urinary", "prostate", "bladder"],
        department_match: "uro",
    },
    SymptomRule {
        keys: &["blood", "anemia", "low hb"],
        department_match: "hema",
    },
    SymptomRule {
        keys: &["cancer", "tumor", "chemo"],
        department_match: "onco",
    },
    SymptomRule {
        keys: &["cosmetic", "scar", "plastic surgery"],
        department_match: "plastic",
    },
    SymptomRule {
        keys: &["vein", "varicose", "vascular"],
        department_match: "vascular",
    },
    SymptomRule {
        keys: &["fever", "cold", "diabetes", "bp check"],
        department_match: "medicine",
    },
];

const GREETINGS: &[&str] = &["hi", "hello", "hey"];

// ═══════════════════════════════════════════════════════════
// Normalization
// ═══════════════════════════════════════════════════════════

/// Lowercase, strip everything that is not a-z or whitespace, trim.
///
/// Digits and punctuation are removed entirely — a deliberate
/// simplification the matching rules are written against.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

// ═══════════════════════════════════════════════════════════
// Reply selection
// ═══════════════════════════════════════════════════════════

/// Map one normalized utterance to exactly one reply.
///
/// Ordered, first-match-wins: greeting, department listing, doctor
/// listing, direct department-name mention, symptom table, fallback.
pub fn reply_for(normalized: &str, departments: &[Department], doctors: &[Doctor]) -> BotReply {
    // Greeting
    if GREETINGS.contains(&normalized) {
        return BotReply::text(ReplyCopy::GREETING);
    }

    // Department listing
    if normalized.contains("department") {
        return BotReply::departments(ReplyCopy::DEPARTMENT_LIST_TITLE, departments.to_vec());
    }

    // Doctor listing
    if normalized == "doctor" || normalized == "doctors" {
        return BotReply::doctors(doctors.to_vec());
    }

    // Direct department name mention, either containment direction
    if let Some(dept) = departments.iter().find(|d| {
        let name = d.name.to_lowercase();
        name.contains(normalized) || normalized.contains(&name)
    }) {
        return department_doctors_reply(dept, doctors);
    }

    // Symptom table
    for rule in SYMPTOM_RULES {
        if rule.keys.iter().any(|key| normalized.contains(key)) {
            // A matched keyword whose department is absent from the
            // directory ends the whole scan; later rules must not fire.
            return match departments
                .iter()
                .find(|d| d.name.to_lowercase().contains(rule.department_match))
            {
                Some(dept) => department_doctors_reply(dept, doctors),
                None => BotReply::text(ReplyCopy::FALLBACK),
            };
        }
    }

    // Fallback
    BotReply::text(ReplyCopy::FALLBACK)
}

fn department_doctors_reply(dept: &Department, doctors: &[Doctor]) -> BotReply {
    let in_department: Vec<Doctor> = doctors
        .iter()
        .filter(|doc| doc.department == dept.id)
        .cloned()
        .collect();
    BotReply::doctors_with_text(ReplyCopy::doctors_available_in(&dept.name), in_department)
}
