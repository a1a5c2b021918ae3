//! Cube-local → camera-space rotation.

use crate::types::{Rotation, Vec3};

/// Sines and cosines of one `Rotation`, computed once per frame.
#[derive(Debug, Clone, Copy)]
pub struct RotationBasis {
    sin_a: f64,
    cos_a: f64,
    sin_b: f64,
    cos_b: f64,
    sin_c: f64,
    cos_c: f64,
}

impl RotationBasis {
    pub fn new(rotation: Rotation) -> Self {
        let (sin_a, cos_a) = rotation.a.sin_cos();
        let (sin_b, cos_b) = rotation.b.sin_cos();
        let (sin_c, cos_c) = rotation.c.sin_cos();
        Self {
            sin_a,
            cos_a,
            sin_b,
            cos_b,
            sin_c,
            cos_c,
        }
    }

    /// Rotate a cube-local point `(i, j, k)` into camera space.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        let Vec3 { x: i, y: j, z: k } = point;
        let Self {
            sin_a: sa,
            cos_a: ca,
            sin_b: sb,
            cos_b: cb,
            sin_c: sc,
            cos_c: cc,
        } = *self;

        Vec3 {
            x: j * sa * sb * cc - k * ca * sb * cc + j * ca * sc + k * sa * sc + i * cb * cc,
            y: j * ca * cc + k * sa * cc - j * sa * sb * sc + k * ca * sb * sc - i * cb * sc,
            z: k * ca * cb - j * sa * cb + i * sb,
        }
    }
}

/// Pure one-shot form of `RotationBasis::apply`.
pub fn project(point: Vec3, rotation: Rotation) -> Vec3 {
    RotationBasis::new(rotation).apply(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: Vec3) -> f64 {
        (v.x * v.x + v.y * v.y + v.z * v.z).sqrt()
    }

    #[test]
    fn zero_rotation_is_identity() {
        let p = Vec3::new(3.0, -7.5, 12.0);
        assert_eq!(project(p, Rotation::default()), p);
    }

    #[test]
    fn projection_is_deterministic() {
        let rotation = Rotation::new(0.37, -1.2, 4.8);
        let p = Vec3::new(-12.0, 5.2, 11.6);
        let first = project(p, rotation);
        let second = project(p, rotation);
        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first.y.to_bits(), second.y.to_bits());
        assert_eq!(first.z.to_bits(), second.z.to_bits());
    }

    #[test]
    fn cached_basis_matches_one_shot_projection() {
        let rotation = Rotation::new(1.5, 0.015, 2.71);
        let basis = RotationBasis::new(rotation);
        for p in [Vec3::new(12.0, -12.0, 0.4), Vec3::new(-3.2, 8.8, -12.0)] {
            assert_eq!(basis.apply(p), project(p, rotation));
        }
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let rotation = Rotation::new(0.9, 2.3, -0.6);
        let p = Vec3::new(12.0, -4.4, 7.6);
        let r = project(p, rotation);
        assert!((length(r) - length(p)).abs() < 1e-9);
    }

    #[test]
    fn quarter_turn_about_b_moves_i_onto_z() {
        let r = project(Vec3::new(1.0, 0.0, 0.0), Rotation::new(0.0, std::f64::consts::FRAC_PI_2, 0.0));
        assert!(r.x.abs() < 1e-12);
        assert!(r.y.abs() < 1e-12);
        assert!((r.z - 1.0).abs() < 1e-12);
    }
}
