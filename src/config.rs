use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// How empty cells inside the final bounding box get their letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Filler drawn from a salted sub-stream of the seed. Same seed, same puzzle.
    #[default]
    Seeded,
    /// Filler drawn from thread-local entropy. Word layout stays reproducible,
    /// filler letters do not.
    Ambient,
}

/// All tunable generation parameters. Missing fields deserialize to defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Placement
    pub attach_chance: f64,
    pub max_probes: usize,

    // Free placement layout
    pub edge_buffer: f64,
    pub aspect_wide: f64,
    pub aspect_narrow: f64,

    // Output
    pub fill: FillMode,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            attach_chance: 0.7,
            max_probes: 10_000,
            edge_buffer: 0.2,
            aspect_wide: 1.2,
            aspect_narrow: 0.8,
            fill: FillMode::Seeded,
        }
    }
}

impl Params {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.attach_chance) {
            return Err(GenError::InvalidInput(format!(
                "attach_chance must be within [0, 1], got {}",
                self.attach_chance
            )));
        }
        // At or above one half the safe interior would invert.
        if !(0.0..0.5).contains(&self.edge_buffer) {
            return Err(GenError::InvalidInput(format!(
                "edge_buffer must be within [0, 0.5), got {}",
                self.edge_buffer
            )));
        }
        if !(self.aspect_narrow <= self.aspect_wide) {
            return Err(GenError::InvalidInput(format!(
                "aspect_narrow ({}) exceeds aspect_wide ({})",
                self.aspect_narrow, self.aspect_wide
            )));
        }
        if self.max_probes == 0 {
            return Err(GenError::InvalidInput("max_probes must be positive".into()));
        }
        Ok(())
    }
}
