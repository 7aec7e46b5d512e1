//! Rule-based annotation over the frequency counts.
//!
//! Each table is evaluated top to bottom, every rule unconditionally, and
//! every rule that fires appends one flag. Rules only see the counts (and the
//! year), never each other's output, so output order is the table order.

use mysticnum_core::constants::EXTRA_NINE_YEAR;
use mysticnum_core::models::{FrequencyMatrix, ProgramFlag, ProgramKind, WarningFlag, WarningLevel};

struct ProgramRule {
    applies: fn(&FrequencyMatrix) -> bool,
    kind: ProgramKind,
    title: &'static str,
    description: &'static str,
}

struct WarningRule {
    applies: fn(&FrequencyMatrix, u32) -> bool,
    level: WarningLevel,
    title: &'static str,
    description: &'static str,
}

// Surprising but deliberate: an empty 7 fires twice, once here ("broken luck
// channel") and once in WARNING_RULES ("gratitude practice"). Do not dedupe.
const PROGRAM_RULES: &[ProgramRule] = &[
    ProgramRule {
        applies: |m| m.count(8) == 0,
        kind: ProgramKind::Warning,
        title: "Broken lineage connection",
        description: "Love of freedom, but a weakened bond with the family system. \
                      Restoring contact with the lineage is important.",
    },
    ProgramRule {
        applies: |m| m.count(8) >= 3,
        kind: ProgramKind::Power,
        title: "Teaching and mentorship code",
        description: "A strong ancestral program of service: the task is to mentor and \
                      teach others. The mentor code is active.",
    },
    ProgramRule {
        applies: |m| m.count(7) == 0,
        kind: ProgramKind::Critical,
        title: "Broken luck channel",
        description: "Critical: a 90-day gratitude practice is needed to restore the \
                      ancestral luck channel. The stumbling program tends to switch on \
                      at ages 26, 33 and 36-41.",
    },
    ProgramRule {
        applies: |m| m.count(7) >= 4,
        kind: ProgramKind::Power,
        title: "Higher-power patronage",
        description: "Strong luck and protection, provided one stays decent and keeps \
                      to moral and ethical principles.",
    },
    ProgramRule {
        applies: |m| m.count(7) >= 1 || (m.count(1) >= 3 && m.count(9) >= 2),
        kind: ProgramKind::Talent,
        title: "Esoteric ability",
        description: "Potential in energy work, healing and esoteric practice. \
                      Developing a spiritual practice is recommended.",
    },
    ProgramRule {
        applies: |m| m.count(8) >= 2,
        kind: ProgramKind::Power,
        title: "Strong financial channel",
        description: "Able to bring great wealth into the family. Belittling relatives \
                      closes the channel.",
    },
];

const WARNING_RULES: &[WarningRule] = &[
    WarningRule {
        applies: |_, year| year >= EXTRA_NINE_YEAR,
        level: WarningLevel::Info,
        title: "Auto-added digit 9",
        description: "For people born in 2020 or later a digit 9 is automatically added \
                      to the matrix.",
    },
    WarningRule {
        applies: |m, _| m.count(7) == 0,
        level: WarningLevel::Critical,
        title: "Gratitude practice",
        description: "Critical: practice gratitude for 90 days, 10-15 thanks a day, to \
                      restore the luck channel. For the first 3 days give thanks for \
                      everything.",
    },
    WarningRule {
        applies: |m, _| m.count(8) >= 4,
        level: WarningLevel::Warning,
        title: "Spiritual development needed",
        description: "Spirituality should be nurtured from childhood. Without a chosen \
                      spiritual path the risk of addiction is high.",
    },
    WarningRule {
        applies: |m, _| m.count(4) == 0,
        level: WarningLevel::Warning,
        title: "Weak health",
        description: "Health is weak from birth. A healthy lifestyle, prevention and \
                      regular check-ups are needed.",
    },
    WarningRule {
        applies: |m, _| m.count(2) == 0,
        level: WarningLevel::Info,
        title: "Energy vampirism",
        description: "Unintentional energy vampirism. Practices that generate your own \
                      energy are recommended: sport, yoga, qigong.",
    },
];

/// Ancestral programs in rule order.
pub fn ancestral_programs(matrix: &FrequencyMatrix) -> Vec<ProgramFlag> {
    PROGRAM_RULES
        .iter()
        .filter(|rule| (rule.applies)(matrix))
        .map(|rule| ProgramFlag {
            kind: rule.kind,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
        })
        .collect()
}

/// Warnings in rule order.
pub fn warnings(matrix: &FrequencyMatrix, year: u32) -> Vec<WarningFlag> {
    WARNING_RULES
        .iter()
        .filter(|rule| (rule.applies)(matrix, year))
        .map(|rule| WarningFlag {
            level: rule.level,
            title: rule.title.to_string(),
            description: rule.description.to_string(),
        })
        .collect()
}
