//! Frame driver — owns rotation state and the animation lifecycle.
//!
//! Scheduling is cooperative: the driver hands out one `FrameRequest` at a
//! time and the caller redeems it with `fire` once its timer elapses. Only
//! the most recent request is honoured, so stopping the driver revokes any
//! request the caller may still be holding.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::config::{CubeConfig, matches_binding};
use crate::engine::Engine;
use crate::renderer::{Camera, Canvas};
use crate::types::{DriverState, Rotation, StopReason};

/// Rotation state plus the buffers it is drawn into.
pub struct CubeRenderer {
    rotation: Rotation,
    canvas: Canvas,
    speed_ab: f64,
    speed_c: f64,
}

impl CubeRenderer {
    pub fn new(config: &CubeConfig) -> Self {
        Self {
            rotation: Rotation::default(),
            canvas: Canvas::new(config.viewport, Camera::from(config.camera.clone())),
            speed_ab: config.animation.speed_ab,
            speed_c: config.animation.speed_c,
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Clear, rotate by one step, draw, and serialize.
    pub fn render_frame(&mut self) -> String {
        self.canvas.clear();
        self.rotation.advance(self.speed_ab, self.speed_c);
        Engine::generate(self.rotation, &mut self.canvas);
        self.canvas.serialize()
    }

    /// Draw a single frame at a fixed rotation without advancing.
    pub fn render_at(&mut self, rotation: Rotation) -> String {
        self.rotation = rotation;
        self.canvas.clear();
        Engine::generate(self.rotation, &mut self.canvas);
        self.canvas.serialize()
    }
}

/// Handle for one pending "produce the next frame" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRequest(u64);

struct Session {
    renderer: CubeRenderer,
    deadline: Instant,
    pending: FrameRequest,
}

pub struct FrameDriver {
    config: CubeConfig,
    session: Option<Session>,
    next_request: u64,
    frames_produced: u64,
}

impl FrameDriver {
    pub fn new(config: CubeConfig) -> Self {
        Self {
            config,
            session: None,
            next_request: 0,
            frames_produced: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        match self.session {
            Some(_) => DriverState::Running,
            None => DriverState::Idle,
        }
    }

    /// The request the caller should redeem next, if running.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.session.as_ref().map(|s| s.pending)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.session.as_ref().map(|s| s.deadline)
    }

    /// Frames produced over the driver's lifetime.
    pub fn frames_produced(&self) -> u64 {
        self.frames_produced
    }

    pub fn rotation(&self) -> Option<Rotation> {
        self.session.as_ref().map(|s| s.renderer.rotation())
    }

    /// Idle → Running. Starts from the initial angles with fresh buffers.
    ///
    /// Starting an already running driver keeps the current session.
    pub fn start(&mut self, now: Instant) -> FrameRequest {
        if let Some(session) = &self.session {
            return session.pending;
        }
        let pending = self.issue();
        self.session = Some(Session {
            renderer: CubeRenderer::new(&self.config),
            deadline: now + self.config.animation.timeout(),
            pending,
        });
        log::info!(
            "animation started ({}x{}, timeout {:?})",
            self.config.viewport.width,
            self.config.viewport.height,
            self.config.animation.timeout()
        );
        pending
    }

    /// Running → Idle. Returns `false` when already idle.
    pub fn stop(&mut self, reason: StopReason) -> bool {
        match self.session.take() {
            Some(_) => {
                log::info!("animation stopped: {reason}");
                true
            }
            None => false,
        }
    }

    /// Redeem `request`, producing the next frame.
    ///
    /// Returns `None` without touching any state when the request is stale
    /// or the driver is idle. When the session deadline has passed the
    /// driver stops with `StopReason::Timeout` instead of drawing.
    pub fn fire(&mut self, request: FrameRequest, now: Instant) -> Option<String> {
        let session = self.session.as_mut()?;
        if session.pending != request {
            log::debug!("ignoring stale frame request {:?}", request);
            return None;
        }
        if now >= session.deadline {
            self.stop(StopReason::Timeout);
            return None;
        }

        let frame = session.renderer.render_frame();
        session.pending = FrameRequest(self.next_request);
        self.next_request += 1;
        self.frames_produced += 1;
        log::trace!("frame {} at {:?}", self.frames_produced, session.renderer.rotation());
        Some(frame)
    }

    /// Offer a key press to the driver.
    ///
    /// While running, every key is consumed; any key other than the reserved
    /// binding stops the animation. Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if self.session.is_none() {
            return false;
        }
        if !matches_binding(&self.config.keys.reserved, key) {
            self.stop(StopReason::Keystroke);
        }
        true
    }

    fn issue(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_request);
        self.next_request += 1;
        request
    }
}
