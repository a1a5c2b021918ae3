//! Engine — the geometry stage.
//!
//! Enumerates sample points over the faces of the cube, rotates them into
//! camera space, and hands each one to a `SampleSink` together with its
//! face glyph. The engine never deals with buffers, screens, or terminals.

pub mod projector;
pub mod surface;

use crate::types::{Rotation, Vec3};
use projector::RotationBasis;
use surface::{FACES, STEPS_PER_AXIS, sweep};

/// Receives camera-space samples from the engine.
pub trait SampleSink {
    fn accept(&mut self, point: Vec3, glyph: char);
}

impl SampleSink for Vec<(Vec3, char)> {
    fn accept(&mut self, point: Vec3, glyph: char) {
        self.push((point, glyph));
    }
}

pub struct Engine;

impl Engine {
    /// Samples produced per frame.
    pub const SAMPLES_PER_FRAME: usize = STEPS_PER_AXIS * STEPS_PER_AXIS * FACES.len();

    /// Sweep every face of the cube at `rotation`.
    ///
    /// For each sweep position all six faces are emitted in `FACES` order,
    /// which fixes which glyph wins an exact depth tie.
    pub fn generate(rotation: Rotation, sink: &mut impl SampleSink) {
        let basis = RotationBasis::new(rotation);
        for m in 0..STEPS_PER_AXIS {
            let u = sweep(m);
            for n in 0..STEPS_PER_AXIS {
                let v = sweep(n);
                for face in FACES {
                    sink.accept(basis.apply(face.point(u, v)), face.glyph());
                }
            }
        }
    }
}
