mod cross_section_table;
mod threshold;

pub use cross_section_table::{cross_section_at, CrossSectionPoint, CrossSectionTable};
pub use threshold::{normalize_threshold, NormalizeError};
