//! Progress simulation for upload and export surfaces.
//!
//! The broader application animates prescription uploads and report exports
//! with a fixed-interval progress bar; nothing real happens underneath. This
//! module models that as a timer-driven state machine. The timer itself
//! lives in the UI layer; each timer fire calls [`ProgressSimulation::tick`].
//! Only one simulation is ever active per surface, so there are no
//! concurrency concerns.

use serde::{Deserialize, Serialize};

use crate::models::PrescriptionData;

/// Simulation state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProgressState {
    Idle,
    InProgress { percent: u8 },
    Done,
}

/// Fixed-step progress simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSimulation {
    state: ProgressState,
    /// Percent added per tick
    step: u8,
}

impl ProgressSimulation {
    /// Create an idle simulation advancing by `step` percent per tick.
    /// A zero step is bumped to 1 so the simulation always terminates.
    pub fn new(step: u8) -> Self {
        Self {
            state: ProgressState::Idle,
            step: step.max(1),
        }
    }

    pub fn state(&self) -> ProgressState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == ProgressState::Done
    }

    /// Begin the simulation. Restarting from Done resets to zero.
    pub fn start(&mut self) {
        self.state = ProgressState::InProgress { percent: 0 };
    }

    /// Advance one timer fire. Reaching 100 percent transitions to Done.
    /// Ticking while Idle or Done is a no-op.
    pub fn tick(&mut self) {
        if let ProgressState::InProgress { percent } = self.state {
            let next = percent.saturating_add(self.step);
            self.state = if next >= 100 {
                ProgressState::Done
            } else {
                ProgressState::InProgress { percent: next }
            };
        }
    }
}

/// Canned extraction result produced when the upload simulation completes.
///
/// Stands in for real OCR, which is out of scope.
pub fn simulated_extraction(patient_id: &str, file_name: &str) -> PrescriptionData {
    let mut data = PrescriptionData::new(patient_id.to_string(), file_name.to_string());
    data.extracted_text =
        "Take warm, cooked foods. Avoid cold drinks and raw vegetables.".to_string();
    data.foods = vec![
        "Basmati Rice".to_string(),
        "Moong Dal".to_string(),
        "Ghee".to_string(),
        "Ginger Tea".to_string(),
    ];
    data.instructions = "Eat the main meal at midday when digestion is strongest".to_string();
    data.duration = "2 weeks".to_string();
    data.special_notes = "Review after the first week".to_string();
    data
}
