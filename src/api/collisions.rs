//=====================================================================
// All collisions loaded from one LXCat file, in file order.
//=====================================================================

use std::fs;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use crate::api::Collision;
use crate::blocks::{parse_collisions, ProcessType};
use crate::error::LxcatError;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collisions(Vec<Collision>);

impl Deref for Collisions {
    type Target = [Collision];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Collisions {
    type Item = &'a Collision;
    type IntoIter = std::slice::Iter<'a, Collision>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromStr for Collisions {
    type Err = LxcatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let start = Instant::now();
        let lines: Vec<&str> = text.lines().collect();
        let collisions = parse_collisions(&lines)?;
        log::info!(
            "Loaded {} collisions from {} lines in {} us",
            collisions.len(),
            lines.len(),
            start.elapsed().as_micros()
        );
        Ok(Self(collisions))
    }
}

impl Collisions {
    // Load every collision from an LXCat file
    pub fn from_LXCat<P: AsRef<Path>>(file_path: P) -> Result<Self, LxcatError> {
        let path = file_path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LxcatError::Io { path: path.to_path_buf(), source })?;
        log::debug!("Parsing LXCat file {}", path.display());
        text.parse()
    }

    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LxcatError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }

    pub fn into_inner(self) -> Vec<Collision> {
        self.0
    }

    pub fn of_kind(&self, process_type: ProcessType) -> impl Iterator<Item = &Collision> {
        self.0.iter().filter(move |collision| collision.process_type == process_type)
    }

    // Distinct target species, in the order they first appear
    pub fn species(&self) -> Vec<&str> {
        let mut species: Vec<&str> = Vec::new();
        for collision in &self.0 {
            if !species.contains(&collision.species.as_str()) {
                species.push(&collision.species);
            }
        }
        species
    }

    // Sum of the cross sections of every process at the given energy
    pub fn total_cross_section_at(&self, energy: f64) -> f64 {
        self.0.iter().map(|collision| collision.cross_section_at(energy)).sum()
    }

    // Sum of the cross sections of every process of one type at the given energy
    pub fn total_cross_section_of_kind_at(&self, process_type: ProcessType, energy: f64) -> f64 {
        self.of_kind(process_type).map(|collision| collision.cross_section_at(energy)).sum()
    }

    // Sum over all processes of their largest tabulated cross section.
    // Bounds the total cross section at every energy, which makes it a
    // majorant for null-collision sampling.
    pub fn surplus_cross_section(&self) -> f64 {
        self.0.iter().map(|collision| collision.max_cross_section().max(0.0)).sum()
    }
}

// Load every collision from an LXCat file
pub fn load_collisions<P: AsRef<Path>>(file_path: P) -> Result<Collisions, LxcatError> {
    Collisions::from_LXCat(file_path)
}
