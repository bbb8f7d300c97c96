//! Setup File Format
//!
//! Vehicle presets are stored as pretty-printed JSON. Missing fields take
//! their default values, so a file only needs the parameters it changes:
//!
//! ```json
//! {
//!   "sprung_weight": 1250.0,
//!   "front_weight_dist_percent": 55.0,
//!   "bump_rebound_ratio": "2:1"
//! }
//! ```
//!
//! Only inputs are stored; results are always recalculated.

use std::fs;
use std::path::Path;

use super::VehicleInputs;
use crate::error::SetupError;

impl VehicleInputs {
    /// Parse and validate inputs from JSON text
    pub fn from_json(content: &str) -> Result<Self, SetupError> {
        let inputs: VehicleInputs = serde_json::from_str(content)?;
        inputs.validate()?;
        Ok(inputs)
    }

    /// Serialize inputs as pretty-printed JSON
    pub fn to_json(&self) -> Result<String, SetupError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load inputs from a setup file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let inputs = Self::from_json(&content)?;
        tracing::info!("Loaded vehicle setup from {}", path.display());
        Ok(inputs)
    }

    /// Save inputs to a setup file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SetupError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        tracing::info!("Saved vehicle setup to {}", path.display());
        Ok(())
    }
}
