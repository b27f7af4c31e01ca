//! Dosha vocabulary: the three constitutional energies and their score vectors.

use serde::{Deserialize, Serialize};

/// One of the three Ayurvedic constitutional energies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// Canonical enumeration order. Dominance ties resolve to the earliest
    /// entry, so Vata wins over Pitta wins over Kapha.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Display name, capitalized as shown in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }
}

/// Taste category (rasa). Also used for vipaka, the post-digestive effect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Taste {
    Sweet,
    Sour,
    Salty,
    Pungent,
    Bitter,
    Astringent,
}

/// Potency (virya) of a food or meal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Virya {
    Hot,
    Cool,
}

/// An ordered triple of signed per-dosha values.
///
/// Carries two meanings depending on context: a 0-10 assessment score per
/// dosha, or a small signed impact where negative pacifies, zero is neutral,
/// and positive aggravates. The components are independently meaningful and
/// there is no constraint on their sum.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DoshaVector {
    pub vata: i32,
    pub pitta: i32,
    pub kapha: i32,
}

impl DoshaVector {
    pub fn new(vata: i32, pitta: i32, kapha: i32) -> Self {
        Self { vata, pitta, kapha }
    }

    /// Get the component for a given dosha.
    pub fn component(&self, dosha: Dosha) -> i32 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Set the component for a given dosha, returning the updated vector.
    pub fn with_component(mut self, dosha: Dosha, value: i32) -> Self {
        match dosha {
            Dosha::Vata => self.vata = value,
            Dosha::Pitta => self.pitta = value,
            Dosha::Kapha => self.kapha = value,
        }
        self
    }

    /// Component-wise sum, used to synthesize a meal's impact from its foods.
    pub fn add(&self, other: &DoshaVector) -> DoshaVector {
        DoshaVector {
            vata: self.vata + other.vata,
            pitta: self.pitta + other.pitta,
            kapha: self.kapha + other.kapha,
        }
    }
}
