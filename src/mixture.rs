// src/mixture.rs - Ordered additions and the derived mixture state

use serde::{Deserialize, Serialize};

use crate::color::{self, Rgb};
use crate::substance::SubstanceId;

/// One recorded pour: a substance, its color and category as copied from
/// the reference table at add time, and the poured volume.
///
/// Additions are never mutated after creation and their insertion order is
/// preserved; the color fold consumes them in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    pub substance: SubstanceId,
    pub color: Rgb,
    pub volume_ml: u32,
    pub category: String,
}

/// The full ordered set of additions in the current experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mixture {
    additions: Vec<Addition>,
}

impl Mixture {
    pub fn new() -> Self {
        Mixture::default()
    }

    pub fn push(&mut self, addition: Addition) {
        self.additions.push(addition);
    }

    pub fn additions(&self) -> &[Addition] {
        &self.additions
    }

    pub fn is_empty(&self) -> bool {
        self.additions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.additions.len()
    }

    pub fn clear(&mut self) {
        self.additions.clear();
    }

    /// Sum of all addition volumes.
    pub fn total_volume_ml(&self) -> u32 {
        self.additions.iter().map(|a| a.volume_ml).sum()
    }

    /// Aggregate color of the mixture (white when empty).
    pub fn color(&self) -> Rgb {
        let parts: Vec<(Rgb, u32)> = self
            .additions
            .iter()
            .map(|a| (a.color, a.volume_ml))
            .collect();
        color::mixture_color(&parts)
    }

    /// Distinct substances in first-seen order.
    pub fn distinct_substances(&self) -> Vec<SubstanceId> {
        let mut seen = Vec::new();
        for addition in &self.additions {
            if !seen.contains(&addition.substance) {
                seen.push(addition.substance);
            }
        }
        seen
    }
}
