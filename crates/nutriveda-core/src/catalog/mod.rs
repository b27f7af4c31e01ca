//! Catalog browsing: text search, facet filters, and dosha-impact labels.

mod filter;

pub use filter::*;

use serde::{Deserialize, Serialize};

/// Three-way label for a signed dosha impact.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImpactLabel {
    Pacifies,
    Neutral,
    Aggravates,
}

impl ImpactLabel {
    /// Total on all integers: negative pacifies, positive aggravates.
    pub fn of(impact: i32) -> ImpactLabel {
        if impact < 0 {
            ImpactLabel::Pacifies
        } else if impact > 0 {
            ImpactLabel::Aggravates
        } else {
            ImpactLabel::Neutral
        }
    }

    /// Display text used in catalog cards.
    pub fn text(&self) -> &'static str {
        match self {
            ImpactLabel::Pacifies => "Pacifies",
            ImpactLabel::Neutral => "Neutral",
            ImpactLabel::Aggravates => "Aggravates",
        }
    }
}
