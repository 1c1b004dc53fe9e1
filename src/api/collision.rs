//=====================================================================
// A single collision process read from an LXCat block.
//=====================================================================

use std::collections::HashMap;

use crate::blocks::{ProcessType, RotationLevels};
use crate::interpolation::CrossSectionTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Collision {
    pub process_type: ProcessType,
    pub species: String,                   // Target species, e.g. "Ar"
    pub mass_ratio: Option<f64>,           // Electron to target mass ratio (ELASTIC, EFFECTIVE)
    pub threshold: f64,                    // Energy [eV] at and below which the cross section is zero
    pub stat_weight_ratio: Option<f64>,    // Upper to lower statistical weight ratio (EXCITATION)
    pub rotation: Option<RotationLevels>,  // Level energies and weights (ROTATION)
    pub info: HashMap<String, String>,     // Remaining "KEY: value" lines of the block
    pub data: CrossSectionTable,
}

impl Collision {
    // Cross section [m^2] at the given energy [eV], by linear interpolation.
    // Below the first and beyond the last point the cross section is held
    // at the corresponding end value.
    pub fn cross_section_at(&self, energy: f64) -> f64 {
        self.data.cross_section_at(energy)
    }

    pub fn max_cross_section(&self) -> f64 {
        self.data.max_value()
    }

    // First and last tabulated energies
    pub fn energy_range(&self) -> (f64, f64) {
        (self.data.first().energy, self.data.last().energy)
    }

    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Collision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cross section of {} {}. Threshold: {}",
            self.species,
            self.process_type.keyword().to_lowercase(),
            self.threshold
        )
    }
}
