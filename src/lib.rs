#![allow(non_snake_case)]
//! Electron collision cross sections from LXCat / BOLSIG text files.
//!
//! Energies are in electronvolts, cross sections in square meters.
//!
//! ```no_run
//! use lxgata::{load_collisions, ProcessType};
//!
//! let collisions = load_collisions("LXCat_Ar.txt")?;
//! let total = collisions.total_cross_section_at(20.0);
//! let ionization = collisions.total_cross_section_of_kind_at(ProcessType::Ionization, 20.0);
//! let majorant = collisions.surplus_cross_section();
//! # Ok::<(), lxgata::LxcatError>(())
//! ```

mod api;
mod blocks;
mod error;
mod interpolation;
mod utils;

pub use api::{load_collisions, Collision, Collisions};
pub use blocks::{parse_collisions, ProcessType, RotationLevels, Section};
pub use error::LxcatError;
pub use interpolation::{cross_section_at, normalize_threshold, CrossSectionPoint, CrossSectionTable, NormalizeError};
