use crate::blocks::ProcessType;
use crate::interpolation::{CrossSectionPoint, CrossSectionTable};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("cross section table is empty")]
    EmptyTable,
    #[error("no cross section points above threshold {threshold} eV")]
    NothingAboveThreshold { threshold: f64 },
}

//=====================================================================
// Zero-below-threshold rule. For processes with a threshold, every
// point at or below the threshold is dropped, and a zero point at the
// threshold is put in front unless the first kept point is already
// zero. Other processes keep their points as given.
//=====================================================================
pub fn normalize_threshold(
    process_type: ProcessType,
    threshold: f64,
    points: Vec<CrossSectionPoint>,
) -> Result<CrossSectionTable, NormalizeError> {
    if !process_type.has_threshold() {
        return CrossSectionTable::new(points).ok_or(NormalizeError::EmptyTable);
    }

    let mut kept: Vec<CrossSectionPoint> = Vec::with_capacity(points.len() + 1);
    for point in points.into_iter().filter(|point| point.energy > threshold) {
        // Zero floor goes in before the first kept point if that point is nonzero
        if kept.is_empty() && point.value != 0.0 {
            kept.push(CrossSectionPoint::new(threshold, 0.0));
        }
        kept.push(point);
    }

    CrossSectionTable::new(kept).ok_or(NormalizeError::NothingAboveThreshold { threshold })
}
