use crate::types::Vec3;

/// Half the edge length of the cube, in cube-local units.
pub const HALF_EXTENT: f64 = 12.0;
/// Distance between neighbouring samples along a face.
pub const STEP: f64 = 0.4;
/// Samples per face axis: `-HALF_EXTENT..HALF_EXTENT` in `STEP` increments.
pub const STEPS_PER_AXIS: usize = 60;

/// One of the six parametrized faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Back,
    Right,
    Left,
    Front,
    Bottom,
    Top,
}

/// All faces, in the order they are drawn for each sweep position.
pub const FACES: [Face; 6] = [
    Face::Back,
    Face::Right,
    Face::Left,
    Face::Front,
    Face::Bottom,
    Face::Top,
];

impl Face {
    pub fn glyph(self) -> char {
        match self {
            Face::Back => '@',
            Face::Right => '$',
            Face::Left => '~',
            Face::Front => '#',
            Face::Bottom => ';',
            Face::Top => '+',
        }
    }

    /// Map the sweep coordinates `(u, v)` onto this face.
    pub fn point(self, u: f64, v: f64) -> Vec3 {
        let h = HALF_EXTENT;
        match self {
            Face::Back => Vec3::new(u, v, -h),
            Face::Right => Vec3::new(h, v, u),
            Face::Left => Vec3::new(-h, v, -u),
            Face::Front => Vec3::new(-u, v, h),
            Face::Bottom => Vec3::new(u, -h, -v),
            Face::Top => Vec3::new(u, h, v),
        }
    }
}

/// Sweep coordinate for step `n`.
///
/// Computed from the step counter so the sample count never drifts with
/// accumulated float error.
pub fn sweep(n: usize) -> f64 {
    -HALF_EXTENT + n as f64 * STEP
}
