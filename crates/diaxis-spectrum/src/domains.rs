use serde::{Deserialize, Serialize};
use ts_rs::TS;

use diaxis_core::models::spectrum::Spectrum;

/// Highest Likert value on the Level-1 screen (0-4 scale).
pub const LIKERT_MAX: u8 = 4;

/// DSM-5 Level-1 cross-cutting symptom domains.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CrossCuttingDomain {
    Depression,
    Anger,
    Mania,
    Anxiety,
    Somatic,
    Suicidality,
    Psychosis,
    Sleep,
    Memory,
    Repetitive,
    Dissociation,
    Personality,
    Substance,
}

impl CrossCuttingDomain {
    pub const ALL: [CrossCuttingDomain; 13] = [
        CrossCuttingDomain::Depression,
        CrossCuttingDomain::Anger,
        CrossCuttingDomain::Mania,
        CrossCuttingDomain::Anxiety,
        CrossCuttingDomain::Somatic,
        CrossCuttingDomain::Suicidality,
        CrossCuttingDomain::Psychosis,
        CrossCuttingDomain::Sleep,
        CrossCuttingDomain::Memory,
        CrossCuttingDomain::Repetitive,
        CrossCuttingDomain::Dissociation,
        CrossCuttingDomain::Personality,
        CrossCuttingDomain::Substance,
    ];
}

/// Definition of one cross-cutting domain: item count, Level-2 trigger
/// threshold, and the follow-up instrument it cues.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainDef {
    pub domain: CrossCuttingDomain,
    /// Translation key for the bilingual label layer.
    pub label_key: String,
    pub item_count: usize,
    /// Max item score at or above which the Level-2 instrument is cued.
    /// Threshold-1 domains are safety-critical.
    pub threshold: u8,
    pub level2_instrument: String,
}

/// The Level-1 domain catalog, in `CrossCuttingDomain::ALL` order.
pub fn domain_defs() -> &'static [DomainDef] {
    static DEFS: std::sync::LazyLock<Vec<DomainDef>> = std::sync::LazyLock::new(|| {
        let def = |domain, label_key: &str, item_count, threshold, level2: &str| DomainDef {
            domain,
            label_key: label_key.to_string(),
            item_count,
            threshold,
            level2_instrument: level2.to_string(),
        };

        vec![
            def(CrossCuttingDomain::Depression, "cc_depression_label", 2, 2, "PHQ-9"),
            def(CrossCuttingDomain::Anger, "cc_anger_label", 1, 2, "PROMIS Anger"),
            def(CrossCuttingDomain::Mania, "cc_mania_label", 2, 2, "Altman Self-Rating Mania Scale"),
            def(CrossCuttingDomain::Anxiety, "cc_anxiety_label", 3, 2, "GAD-7"),
            def(CrossCuttingDomain::Somatic, "cc_somatic_label", 2, 2, "PHQ-15"),
            def(CrossCuttingDomain::Suicidality, "cc_suicidality_label", 1, 1, "C-SSRS"),
            def(CrossCuttingDomain::Psychosis, "cc_psychosis_label", 2, 1, "PQ-B"),
            def(CrossCuttingDomain::Sleep, "cc_sleep_label", 1, 2, "PROMIS Sleep Disturbance"),
            def(CrossCuttingDomain::Memory, "cc_memory_label", 1, 2, "Cognitive screen"),
            def(CrossCuttingDomain::Repetitive, "cc_repetitive_label", 2, 2, "FOCI"),
            def(CrossCuttingDomain::Dissociation, "cc_dissociation_label", 1, 2, "DES-II"),
            def(CrossCuttingDomain::Personality, "cc_personality_label", 2, 2, "PID-5-BF"),
            def(CrossCuttingDomain::Substance, "cc_substance_label", 3, 1, "ASSIST"),
        ]
    });
    &DEFS
}

/// Catalog entry for a single domain. The catalog is built in `ALL` order.
pub fn domain_def(domain: CrossCuttingDomain) -> &'static DomainDef {
    &domain_defs()[domain as usize]
}

/// HiTOP spectrum definition: the cross-cutting domains it draws from
/// (Kotov et al., 2017 mapping).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SpectrumDef {
    pub spectrum: Spectrum,
    /// Translation key for the bilingual label layer.
    pub label_key: String,
    pub domains: Vec<CrossCuttingDomain>,
}

/// The six spectrum definitions, in `Spectrum::ALL` order.
pub fn spectrum_defs() -> &'static [SpectrumDef] {
    static DEFS: std::sync::LazyLock<Vec<SpectrumDef>> = std::sync::LazyLock::new(|| {
        let def = |spectrum, label_key: &str, domains: &[CrossCuttingDomain]| SpectrumDef {
            spectrum,
            label_key: label_key.to_string(),
            domains: domains.to_vec(),
        };

        vec![
            def(
                Spectrum::Internalizing,
                "hitop_internalizing",
                &[
                    CrossCuttingDomain::Depression,
                    CrossCuttingDomain::Anxiety,
                    CrossCuttingDomain::Somatic,
                    CrossCuttingDomain::Sleep,
                ],
            ),
            def(
                Spectrum::ThoughtDisorder,
                "hitop_thought_disorder",
                &[CrossCuttingDomain::Psychosis, CrossCuttingDomain::Dissociation],
            ),
            def(
                Spectrum::DisinhibitedExternalizing,
                "hitop_disinhibited_externalizing",
                &[CrossCuttingDomain::Substance, CrossCuttingDomain::Mania],
            ),
            def(
                Spectrum::AntagonisticExternalizing,
                "hitop_antagonistic_externalizing",
                &[CrossCuttingDomain::Anger],
            ),
            def(
                Spectrum::Detachment,
                "hitop_detachment",
                &[CrossCuttingDomain::Memory],
            ),
            def(
                Spectrum::Somatoform,
                "hitop_somatoform",
                &[CrossCuttingDomain::Somatic],
            ),
        ]
    });
    &DEFS
}
