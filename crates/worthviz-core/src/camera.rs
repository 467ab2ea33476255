//! Orbiting perspective camera.
//!
//! Pure state, no platform APIs: the frontends translate pointer/mouse/wheel
//! input into `orbit`/`pan`/`zoom_by` calls and read matrices back out. The
//! home position looks at the origin from +z, far enough out to frame the
//! table layout.

use glam::{Mat4, Vec3};

use crate::constants::*;

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Azimuth around world +y, radians. 0 puts the eye on +z.
    pub yaw: f32,
    /// Elevation from the horizontal plane, radians, clamped off the poles.
    pub pitch: f32,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl OrbitCamera {
    pub fn new(aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: CAMERA_INITIAL_DISTANCE,
            yaw: 0.0,
            pitch: 0.0,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw)
    }

    pub fn orbit(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw += d_yaw;
        self.pitch = (self.pitch + d_pitch).clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// Multiplicative zoom, clamped to the allowed distance band.
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    /// Slide the orbit target in the view plane. `dx`/`dy` are screen-space
    /// pixel deltas; the step scales with distance so a drag moves the scene
    /// by a roughly constant amount on screen at any zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let forward = (self.target - self.eye()).normalize();
        let right = forward.cross(Vec3::Y).normalize();
        let up = right.cross(forward);
        let scale = self.distance * 0.001;
        self.target += right * (-dx * scale) + up * (dy * scale);
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Clip-space projection.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
