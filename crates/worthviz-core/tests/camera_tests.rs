// Host-side tests for the orbit camera: home position, clamping, and the
// matrix builders the renderers consume.

use glam::{Mat4, Vec3, Vec4};
use worthviz_core::{
    OrbitCamera, CAMERA_FOV_DEGREES, CAMERA_INITIAL_DISTANCE, CAMERA_MAX_DISTANCE,
    CAMERA_MIN_DISTANCE, CAMERA_PITCH_LIMIT, CAMERA_ZFAR, CAMERA_ZNEAR,
};

#[test]
fn home_position_looks_down_positive_z() {
    let camera = OrbitCamera::new(1.5);
    let eye = camera.eye();
    assert!((eye - Vec3::new(0.0, 0.0, CAMERA_INITIAL_DISTANCE)).length() < 1e-3);
    assert_eq!(camera.target, Vec3::ZERO);
}

#[test]
fn zoom_clamps_to_the_distance_band() {
    let mut camera = OrbitCamera::new(1.0);
    camera.zoom_by(0.0001);
    assert_eq!(camera.distance, CAMERA_MIN_DISTANCE);
    camera.zoom_by(10_000.0);
    assert_eq!(camera.distance, CAMERA_MAX_DISTANCE);
    // a modest zoom inside the band is applied as-is
    let mut camera = OrbitCamera::new(1.0);
    camera.zoom_by(1.1);
    assert!((camera.distance - CAMERA_INITIAL_DISTANCE * 1.1).abs() < 1e-3);
}

#[test]
fn orbit_preserves_distance() {
    let mut camera = OrbitCamera::new(1.0);
    camera.orbit(0.7, 0.3);
    camera.orbit(-1.9, 0.2);
    let measured = (camera.eye() - camera.target).length();
    assert!(
        (measured - camera.distance).abs() < 0.01,
        "orbit changed the distance: {measured}"
    );
}

#[test]
fn pitch_stays_off_the_poles() {
    let mut camera = OrbitCamera::new(1.0);
    camera.orbit(0.0, 100.0);
    assert_eq!(camera.pitch, CAMERA_PITCH_LIMIT);
    camera.orbit(0.0, -200.0);
    assert_eq!(camera.pitch, -CAMERA_PITCH_LIMIT);
    // the eye never crosses directly over the target
    assert!(camera.eye().x.abs() + camera.eye().z.abs() > 0.0);
}

#[test]
fn view_matrix_puts_the_target_ahead_of_the_eye() {
    let mut camera = OrbitCamera::new(1.0);
    camera.orbit(0.4, -0.2);
    let in_view = camera.view_matrix() * camera.target.extend(1.0);
    // looking down -z in view space, the target sits straight ahead
    assert!(in_view.x.abs() < 1e-3);
    assert!(in_view.y.abs() < 1e-3);
    assert!((in_view.z + camera.distance).abs() < 0.01);
}

#[test]
fn pan_slides_the_target_in_the_view_plane() {
    let mut camera = OrbitCamera::new(1.0);
    let before = camera.distance;
    camera.pan(10.0, 0.0);
    // from the home view, +x drag moves the target along world -x
    assert!(camera.target.x < 0.0);
    assert_eq!(camera.target.y, 0.0);
    assert!((camera.distance - before).abs() < 1e-6, "pan must not zoom");
    // eye follows the target so the view direction is unchanged
    let view_dir = (camera.target - camera.eye()).normalize();
    assert!((view_dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

#[test]
fn projection_uses_the_configured_frustum() {
    let camera = OrbitCamera::new(1.77);
    let expected = Mat4::perspective_rh(
        CAMERA_FOV_DEGREES.to_radians(),
        1.77,
        CAMERA_ZNEAR,
        CAMERA_ZFAR,
    );
    assert_eq!(camera.projection_matrix(), expected);
    let vp = camera.view_proj();
    let reference = expected * camera.view_matrix();
    let delta = (vp * Vec4::new(1.0, 2.0, 3.0, 1.0)) - (reference * Vec4::new(1.0, 2.0, 3.0, 1.0));
    assert!(delta.length() < 1e-4);
}
