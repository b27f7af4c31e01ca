//! Constitutional assessment engine.
//!
//! Turns a patient's prakriti and vikriti score vectors into per-dosha
//! dominance scores and a classification label. Every function here is a
//! pure function of its inputs.
//!
//! Precondition: vector components are expected in 0-10, pre-clamped by the
//! intake surface. The engine does not validate or clamp.

mod flow;

pub use flow::*;

use serde::{Deserialize, Serialize};

use crate::models::{Dosha, DoshaVector, PrakritiLabel};

/// Dominance classification for a single dosha score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DominanceLevel {
    Low,
    Moderate,
    High,
}

/// Combined dominance score for one dosha: baseline plus current imbalance.
///
/// Range 0-20 for valid inputs.
pub fn dosha_dominance(prakriti: &DoshaVector, vikriti: &DoshaVector, dosha: Dosha) -> i32 {
    prakriti.component(dosha) + vikriti.component(dosha)
}

/// Classify a dominance score. Exactly 12 is Moderate, exactly 8 is Low;
/// the thresholds are strict comparisons, not symmetric rounding.
pub fn classify_level(score: i32) -> DominanceLevel {
    if score > 12 {
        DominanceLevel::High
    } else if score > 8 {
        DominanceLevel::Moderate
    } else {
        DominanceLevel::Low
    }
}

/// Find the dominant dosha and its score.
///
/// Ties resolve to the earliest entry in [`Dosha::ALL`], i.e. Vata over
/// Pitta over Kapha, so the result is deterministic.
pub fn dominant_dosha(prakriti: &DoshaVector, vikriti: &DoshaVector) -> (Dosha, i32) {
    let mut best = (Dosha::ALL[0], dosha_dominance(prakriti, vikriti, Dosha::ALL[0]));
    for &dosha in &Dosha::ALL[1..] {
        let score = dosha_dominance(prakriti, vikriti, dosha);
        if score > best.1 {
            best = (dosha, score);
        }
    }
    best
}

/// Per-dosha entry in a constitution summary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoshaScore {
    pub dosha: Dosha,
    pub score: i32,
    pub level: DominanceLevel,
}

/// Full summary rendered on the assessment review surface and reduced to a
/// single label on the patient record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConstitutionSummary {
    /// One entry per dosha, in canonical order
    pub scores: [DoshaScore; 3],
    pub dominant: Dosha,
    pub dominant_score: i32,
    pub dominant_level: DominanceLevel,
    /// Label stored on the patient record; Mixed when the top score is shared
    pub label: PrakritiLabel,
}

/// Compute the full constitution summary for an assessment.
pub fn summarize(prakriti: &DoshaVector, vikriti: &DoshaVector) -> ConstitutionSummary {
    let scores = Dosha::ALL.map(|dosha| {
        let score = dosha_dominance(prakriti, vikriti, dosha);
        DoshaScore {
            dosha,
            score,
            level: classify_level(score),
        }
    });

    let (dominant, dominant_score) = dominant_dosha(prakriti, vikriti);
    let shared = scores.iter().filter(|s| s.score == dominant_score).count();
    let label = if shared > 1 {
        PrakritiLabel::Mixed
    } else {
        match dominant {
            Dosha::Vata => PrakritiLabel::Vata,
            Dosha::Pitta => PrakritiLabel::Pitta,
            Dosha::Kapha => PrakritiLabel::Kapha,
        }
    };

    ConstitutionSummary {
        scores,
        dominant,
        dominant_score,
        dominant_level: classify_level(dominant_score),
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominance_is_component_sum() {
        let prakriti = DoshaVector::new(6, 2, 2);
        let vikriti = DoshaVector::new(4, 1, 1);
        assert_eq!(dosha_dominance(&prakriti, &vikriti, Dosha::Vata), 10);
        assert_eq!(dosha_dominance(&prakriti, &vikriti, Dosha::Pitta), 3);
        assert_eq!(dosha_dominance(&prakriti, &vikriti, Dosha::Kapha), 3);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_level(13), DominanceLevel::High);
        assert_eq!(classify_level(12), DominanceLevel::Moderate);
        assert_eq!(classify_level(9), DominanceLevel::Moderate);
        assert_eq!(classify_level(8), DominanceLevel::Low);
        assert_eq!(classify_level(0), DominanceLevel::Low);
    }

    #[test]
    fn test_dominant_dosha() {
        let prakriti = DoshaVector::new(6, 2, 2);
        let vikriti = DoshaVector::new(4, 1, 1);
        let (dosha, score) = dominant_dosha(&prakriti, &vikriti);
        assert_eq!(dosha, Dosha::Vata);
        assert_eq!(score, 10);
        assert_eq!(classify_level(score), DominanceLevel::Moderate);
    }

    #[test]
    fn test_tie_resolves_to_canonical_order() {
        // Pitta and Kapha tie; Pitta is earlier in canonical order
        let prakriti = DoshaVector::new(1, 5, 5);
        let vikriti = DoshaVector::new(0, 3, 3);
        let (dosha, score) = dominant_dosha(&prakriti, &vikriti);
        assert_eq!(dosha, Dosha::Pitta);
        assert_eq!(score, 8);
    }

    #[test]
    fn test_summary_label_mixed_on_tie() {
        let prakriti = DoshaVector::new(5, 5, 1);
        let vikriti = DoshaVector::new(3, 3, 0);
        let summary = summarize(&prakriti, &vikriti);
        assert_eq!(summary.dominant, Dosha::Vata);
        assert_eq!(summary.label, PrakritiLabel::Mixed);
    }

    #[test]
    fn test_summary_label_single_dominant() {
        let prakriti = DoshaVector::new(2, 7, 3);
        let vikriti = DoshaVector::new(1, 6, 2);
        let summary = summarize(&prakriti, &vikriti);
        assert_eq!(summary.label, PrakritiLabel::Pitta);
        assert_eq!(summary.dominant_score, 13);
        assert_eq!(summary.dominant_level, DominanceLevel::High);
    }
}
