mod block_types;
mod block_traits;
mod block_processor;
mod species;
mod parameters;
mod info;
mod table;


pub use block_types::{ProcessType, Section};
pub use block_processor::parse_collisions;

pub use species::Species;
pub use parameters::{ProcessParameters, RotationLevels};
pub use info::Info;
pub use table::RawTable;
