use std::ops::Deref;

//=====================================================================
// Energy / cross section pair. Energy in eV, cross section in m^2.
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CrossSectionPoint {
    pub energy: f64,
    pub value: f64,
}

impl CrossSectionPoint {
    pub fn new(energy: f64, value: f64) -> Self {
        Self { energy, value }
    }
}

//=====================================================================
// Piecewise-linear cross section, tabulated at strictly increasing
// energies. A table always holds at least one point, and cannot be
// modified once built.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable(Vec<CrossSectionPoint>);

impl Deref for CrossSectionTable {
    type Target = [CrossSectionPoint];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CrossSectionTable {
    // Returns None for an empty set of points
    pub fn new(points: Vec<CrossSectionPoint>) -> Option<Self> {
        if points.is_empty() {
            None
        } else {
            Some(Self(points))
        }
    }

    pub fn from_e_and_sigma(energy: Vec<f64>, sigma: Vec<f64>) -> Option<Self> {
        if energy.len() != sigma.len() {
            return None;
        }
        Self::new(
            energy
                .into_iter()
                .zip(sigma)
                .map(|(energy, value)| CrossSectionPoint { energy, value })
                .collect(),
        )
    }

    pub fn first(&self) -> &CrossSectionPoint {
        &self.0[0]
    }

    pub fn last(&self) -> &CrossSectionPoint {
        &self.0[self.0.len() - 1]
    }

    pub fn into_inner(self) -> Vec<CrossSectionPoint> {
        self.0
    }

    // Interpolate the cross section at a given energy
    pub fn cross_section_at(&self, energy: f64) -> f64 {
        interpolate(&self.0, energy)
    }

    // Largest tabulated cross section
    pub fn max_value(&self) -> f64 {
        self.0.iter().map(|point| point.value).fold(f64::NEG_INFINITY, f64::max)
    }
}

// Cross section at `energy` for any ordered slice of points. Returns None
// for an empty slice, which has no value to hold constant.
pub fn cross_section_at(points: &[CrossSectionPoint], energy: f64) -> Option<f64> {
    if points.is_empty() {
        None
    } else {
        Some(interpolate(points, energy))
    }
}

// Linear interpolation between the two points bracketing `energy`.
// Outside the tabulated range the nearest end value is held constant.
// `points` must not be empty.
fn interpolate(points: &[CrossSectionPoint], energy: f64) -> f64 {
    // Index of the first point strictly above the requested energy
    let upper = points.partition_point(|point| point.energy <= energy);

    // At or below the first point
    if upper == 0 {
        return points[0].value;
    }
    // At or beyond the last point
    if upper == points.len() {
        return points[upper - 1].value;
    }

    let start = &points[upper - 1];
    let end = &points[upper];

    // Here are the values we need for interpolation
    let x0 = start.energy;
    let x1 = end.energy;
    let y0 = start.value;
    let y1 = end.value;

    y0 + (y1 - y0) * (energy - x0) / (x1 - x0)
}
