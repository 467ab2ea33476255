//! Animated movement of panels toward a layout's targets.
//!
//! One engine, at most one transition in flight. Starting a new transition
//! snapshots each panel where it currently is and replaces the old transition
//! in the same assignment, so a mid-flight layout switch never jumps and
//! never leaves a stale animation running.

use glam::Vec3;

use crate::constants::SETTLE_FACTOR;
use crate::layout::Placement;

/// Mutable per-panel pose, driven by the engine while a transition runs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelState {
    pub position: Vec3,
    /// XYZ Euler angles, radians.
    pub rotation: Vec3,
}

struct Track {
    from: PanelState,
    to: Placement,
}

struct Transition {
    started_ms: f64,
    duration_ms: f64,
    tracks: Vec<Track>,
}

#[derive(Default)]
pub struct TransitionEngine {
    active: Option<Transition>,
}

impl TransitionEngine {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Begin moving `elements` toward `targets`. Pairs are zipped by index;
    /// an element without a target keeps its pose.
    pub fn start(
        &mut self,
        elements: &[PanelState],
        targets: &[Placement],
        duration_ms: f64,
        now_ms: f64,
    ) {
        let tracks = elements
            .iter()
            .zip(targets.iter())
            .map(|(el, target)| Track { from: *el, to: *target })
            .collect();
        self.active = Some(Transition {
            started_ms: now_ms,
            duration_ms,
            tracks,
        });
    }

    /// Step the active transition to `now_ms`, writing interpolated poses
    /// into `elements`. Returns true while the scene still needs redrawing;
    /// the engine keeps that up through twice the duration so the caller
    /// renders a settle window past the motion, then goes quiet.
    pub fn advance(&mut self, elements: &mut [PanelState], now_ms: f64) -> bool {
        let Some(tr) = self.active.as_ref() else {
            return false;
        };
        let elapsed = now_ms - tr.started_ms;
        let k = if tr.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / tr.duration_ms).clamp(0.0, 1.0)
        };
        let eased = ease_expo_in_out(k) as f32;
        for (el, track) in elements.iter_mut().zip(tr.tracks.iter()) {
            if k >= 1.0 {
                // land exactly on the target, no float residue
                el.position = track.to.position;
                el.rotation = track.to.rotation;
            } else {
                el.position = track.from.position.lerp(track.to.position, eased);
                el.rotation = track.from.rotation.lerp(track.to.rotation, eased);
            }
        }
        if elapsed >= tr.duration_ms * SETTLE_FACTOR {
            self.active = None;
        }
        true
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

/// Exponential ease-in-out: slow start, fast middle, slow end. Exact 0 and 1
/// at the endpoints, and exactly 0.5 at the midpoint.
pub fn ease_expo_in_out(k: f64) -> f64 {
    if k <= 0.0 {
        return 0.0;
    }
    if k >= 1.0 {
        return 1.0;
    }
    let k2 = k * 2.0;
    if k2 < 1.0 {
        0.5 * 1024f64.powf(k2 - 1.0)
    } else {
        0.5 * (2.0 - 2f64.powf(-10.0 * (k2 - 1.0)))
    }
}
