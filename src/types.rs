//! Shared boundary types for the ASCII cube renderer.
//!
//! This module defines the data that crosses component boundaries:
//! - Engine → Renderer (in-memory): camera-space `Vec3` samples with a glyph
//! - Driver → Player (in-memory): serialized frame text plus lifecycle state

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Geometry primitives
// ---------------------------------------------------------------------------

/// A point in either cube-local or camera space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Euler angles (radians) of the cube, one per rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Rotation {
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Advance by one frame. A and B share `speed_ab`; C turns at `speed_c`.
    pub fn advance(&mut self, speed_ab: f64, speed_c: f64) {
        self.a += speed_ab;
        self.b += speed_ab;
        self.c += speed_c;
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Character-grid dimensions of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn cells(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport {
            width: 100,
            height: 50,
        }
    }
}

// ---------------------------------------------------------------------------
// Driver lifecycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
}

/// Why a running animation went back to idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Explicit cancellation from the caller.
    Cancelled,
    /// The session outlived its configured timeout.
    Timeout,
    /// A key other than the reserved one was pressed.
    Keystroke,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            StopReason::Cancelled => "cancelled",
            StopReason::Timeout => "timeout",
            StopReason::Keystroke => "keystroke",
        })
    }
}
