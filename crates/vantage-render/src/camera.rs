//! Free-fly camera for view/projection matrix derivation.
//!
//! The camera is plain state owned by the render loop; the host window
//! feeds it a [`CameraInput`] snapshot once per frame and applies the
//! [`CursorMode`] the camera reports back. Matrices are derived on every
//! access, never cached.
//!
//! # Example
//!
//! ```
//! use vantage_render::{CameraInput, FlyCamera};
//! use vantage_core::math::Vec3;
//!
//! let mut camera = FlyCamera::new(Vec3::new(0.0, 10.0, 20.0), 16.0 / 9.0);
//!
//! // Each frame:
//! let input = CameraInput { focused: true, forward: true, ..Default::default() };
//! camera.update(&input, 0.016);
//! let view = camera.view_matrix();
//! let projection = camera.projection_matrix();
//! # let _ = (view, projection);
//! ```

use vantage_core::math::{Mat4, Vec2, Vec3};

/// Cursor behavior the host window should apply after a camera update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMode {
    /// Cursor moves freely; mouse motion does not steer the camera.
    Free,
    /// Cursor is captured; mouse deltas drive yaw/pitch.
    Grabbed,
}

/// Per-frame input snapshot supplied by the host window.
///
/// The camera never queries the windowing layer directly; the host
/// samples its input state and fills one of these per frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct CameraInput {
    /// Whether the host window has input focus. The update is a no-op
    /// without it.
    pub focused: bool,
    /// Cursor position in window pixels.
    pub cursor: Vec2,
    /// True only on the frame the look button went down (edge, not level).
    pub look_toggle_pressed: bool,
    /// Scroll wheel delta for this frame (positive = away from user).
    pub scroll_delta: f32,
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Speed modifier; multiplies forward/back movement by 10.
    pub boost: bool,
}

const WORLD_UP: Vec3 = Vec3::Y;
const PITCH_LIMIT_DEG: f32 = 89.0;
const FOV_MIN_DEG: f32 = 1.0;
const FOV_MAX_DEG: f32 = 90.0;
const NEAR_PLANE: f32 = 0.01;
const FAR_PLANE: f32 = 600.0;
const BOOST_FACTOR: f32 = 10.0;

/// A free-fly camera with yaw/pitch orientation and WASD-style movement.
///
/// Yaw, pitch and field of view are stored in radians. The orientation
/// basis (front/right/up) is recomputed whenever yaw or pitch change;
/// view and projection matrices are pure functions of the current state.
pub struct FlyCamera {
    position: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    aspect_ratio: f32,

    front: Vec3,
    right: Vec3,
    up: Vec3,

    /// Units per second for held movement keys.
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse travel.
    pub mouse_sensitivity: f32,

    active_view: bool,
    first_move: bool,
    last_cursor: Vec2,
}

impl FlyCamera {
    /// Create a camera at `position` looking down the negative Z axis.
    pub fn new(position: Vec3, aspect_ratio: f32) -> Self {
        let mut camera = Self {
            position,
            yaw: -std::f32::consts::FRAC_PI_2,
            pitch: 0.0,
            fov: std::f32::consts::FRAC_PI_2,
            aspect_ratio,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            speed: 6.5,
            mouse_sensitivity: 0.2,
            active_view: false,
            first_move: true,
            last_cursor: Vec2::ZERO,
        };
        camera.update_basis();
        camera
    }

    /// Advance the camera one frame.
    ///
    /// `dt` is the frame delta in seconds. Does nothing while the host
    /// window is unfocused.
    pub fn update(&mut self, input: &CameraInput, dt: f32) {
        if !input.focused {
            return;
        }

        self.update_view_mode(input);
        self.update_position(input, dt);
    }

    fn update_view_mode(&mut self, input: &CameraInput) {
        if input.look_toggle_pressed {
            self.active_view = !self.active_view;
            if self.active_view {
                // Re-arm the reference point on every activation so the
                // first sample after re-entering look mode cannot jump.
                self.first_move = true;
            }
        }

        if !self.active_view {
            return;
        }

        if self.first_move {
            self.last_cursor = input.cursor;
            self.first_move = false;
        } else {
            let delta = input.cursor - self.last_cursor;
            self.last_cursor = input.cursor;

            self.set_yaw_degrees(self.yaw_degrees() + delta.x * self.mouse_sensitivity);
            self.set_pitch_degrees(self.pitch_degrees() - delta.y * self.mouse_sensitivity);
        }

        if input.scroll_delta != 0.0 {
            self.set_fov_degrees(self.fov_degrees() - input.scroll_delta);
        }
    }

    fn update_position(&mut self, input: &CameraInput, dt: f32) {
        let step = self.speed * dt;
        let fwd_step = if input.boost {
            step * BOOST_FACTOR
        } else {
            step
        };

        if input.forward {
            self.position += self.front * fwd_step;
        }
        if input.back {
            self.position -= self.front * fwd_step;
        }
        if input.left {
            self.position -= self.right * step;
        }
        if input.right {
            self.position += self.right * step;
        }
        if input.up {
            self.position += self.up * step;
        }
        if input.down {
            self.position -= self.up * step;
        }
    }

    /// Recompute the orientation basis from yaw and pitch.
    fn update_basis(&mut self) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();

        self.front = Vec3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// View matrix looking from the camera position along `front`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection matrix for the current fov and aspect ratio.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }

    /// Cursor behavior the host should apply: grabbed while look mode is
    /// active, free otherwise.
    pub fn cursor_mode(&self) -> CursorMode {
        if self.active_view {
            CursorMode::Grabbed
        } else {
            CursorMode::Free
        }
    }

    /// Whether mouse motion currently steers the camera.
    pub fn is_view_active(&self) -> bool {
        self.active_view
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    /// Set the pitch, clamped to ±89° to keep the basis well-defined.
    pub fn set_pitch_degrees(&mut self, degrees: f32) {
        self.pitch = degrees
            .clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG)
            .to_radians();
        self.update_basis();
    }

    pub fn yaw_degrees(&self) -> f32 {
        self.yaw.to_degrees()
    }

    pub fn set_yaw_degrees(&mut self, degrees: f32) {
        self.yaw = degrees.to_radians();
        self.update_basis();
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set the vertical field of view, clamped to 1°..=90°.
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.fov = degrees.clamp(FOV_MIN_DEG, FOV_MAX_DEG).to_radians();
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.5;

    fn camera() -> FlyCamera {
        FlyCamera::new(Vec3::new(0.0, 10.0, 20.0), 16.0 / 9.0)
    }

    fn focused() -> CameraInput {
        CameraInput {
            focused: true,
            ..Default::default()
        }
    }

    #[test]
    fn initial_front_faces_negative_z() {
        let cam = camera();
        assert!((cam.front() - Vec3::NEG_Z).length() < 1e-5);
        assert!((cam.right() - Vec3::X).length() < 1e-5);
        assert!((cam.up() - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn pitch_clamps_to_89_degrees() {
        let mut cam = camera();
        cam.set_pitch_degrees(200.0);
        assert!((cam.pitch_degrees() - 89.0).abs() < 1e-4);

        cam.set_pitch_degrees(-200.0);
        assert!((cam.pitch_degrees() + 89.0).abs() < 1e-4);
    }

    #[test]
    fn unfocused_update_is_a_noop() {
        let mut cam = camera();
        let before = cam.position();

        let input = CameraInput {
            focused: false,
            forward: true,
            look_toggle_pressed: true,
            ..Default::default()
        };
        cam.update(&input, DT);

        assert_eq!(cam.position(), before);
        assert_eq!(cam.cursor_mode(), CursorMode::Free);
    }

    #[test]
    fn movement_scales_with_delta_time() {
        let mut cam = camera();
        let before = cam.position();

        let mut input = focused();
        input.forward = true;
        cam.update(&input, DT);

        let moved = cam.position() - before;
        assert!((moved.length() - cam.speed * DT).abs() < 1e-4);
        assert!(moved.dot(cam.front()) > 0.0);
    }

    #[test]
    fn boost_multiplies_forward_speed_by_ten() {
        let mut cam = camera();
        let before = cam.position();

        let mut input = focused();
        input.forward = true;
        input.boost = true;
        cam.update(&input, DT);

        let moved = (cam.position() - before).length();
        assert!((moved - cam.speed * DT * 10.0).abs() < 1e-3);
    }

    #[test]
    fn strafe_is_unaffected_by_boost() {
        let mut cam = camera();
        let before = cam.position();

        let mut input = focused();
        input.right = true;
        input.boost = true;
        cam.update(&input, DT);

        let moved = (cam.position() - before).length();
        assert!((moved - cam.speed * DT).abs() < 1e-4);
    }

    #[test]
    fn look_toggle_grabs_cursor() {
        let mut cam = camera();
        let mut input = focused();
        input.look_toggle_pressed = true;

        cam.update(&input, DT);
        assert_eq!(cam.cursor_mode(), CursorMode::Grabbed);

        cam.update(&input, DT);
        assert_eq!(cam.cursor_mode(), CursorMode::Free);
    }

    #[test]
    fn first_sample_after_activation_sets_reference_only() {
        let mut cam = camera();
        let yaw_before = cam.yaw_degrees();

        let mut input = focused();
        input.look_toggle_pressed = true;
        input.cursor = Vec2::new(400.0, 300.0);
        cam.update(&input, DT);

        // The activation frame must not produce a look delta.
        assert!((cam.yaw_degrees() - yaw_before).abs() < 1e-5);
    }

    #[test]
    fn mouse_delta_drives_yaw_and_pitch() {
        let mut cam = camera();

        let mut input = focused();
        input.look_toggle_pressed = true;
        input.cursor = Vec2::new(100.0, 100.0);
        cam.update(&input, DT);

        input.look_toggle_pressed = false;
        input.cursor = Vec2::new(110.0, 95.0);
        cam.update(&input, DT);

        assert!((cam.yaw_degrees() - (-90.0 + 10.0 * cam.mouse_sensitivity)).abs() < 1e-4);
        assert!((cam.pitch_degrees() - 5.0 * cam.mouse_sensitivity).abs() < 1e-4);
    }

    #[test]
    fn reactivation_resets_mouse_reference() {
        let mut cam = camera();
        let mut input = focused();

        // Activate and establish a reference point.
        input.look_toggle_pressed = true;
        input.cursor = Vec2::new(100.0, 100.0);
        cam.update(&input, DT);

        // Deactivate; cursor wanders while the view is inactive.
        input.cursor = Vec2::new(100.0, 100.0);
        cam.update(&input, DT);

        let yaw_before = cam.yaw_degrees();
        let pitch_before = cam.pitch_degrees();

        // Reactivate at a far-away cursor position: the first sample must
        // only re-establish the reference, producing zero delta.
        input.cursor = Vec2::new(900.0, 700.0);
        cam.update(&input, DT);

        assert!((cam.yaw_degrees() - yaw_before).abs() < 1e-5);
        assert!((cam.pitch_degrees() - pitch_before).abs() < 1e-5);
    }

    #[test]
    fn scroll_changes_fov_only_in_active_view() {
        let mut cam = camera();
        let fov_before = cam.fov_degrees();

        let mut input = focused();
        input.scroll_delta = 5.0;
        cam.update(&input, DT);
        assert_eq!(cam.fov_degrees(), fov_before);

        input.look_toggle_pressed = true;
        cam.update(&input, DT);
        assert!((cam.fov_degrees() - (fov_before - 5.0)).abs() < 1e-4);
    }

    #[test]
    fn fov_clamps_to_valid_range() {
        let mut cam = camera();
        cam.set_fov_degrees(300.0);
        assert!((cam.fov_degrees() - 90.0).abs() < 1e-4);
        cam.set_fov_degrees(-10.0);
        assert!((cam.fov_degrees() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn matrices_are_finite() {
        let mut cam = camera();
        cam.set_pitch_degrees(30.0);
        cam.set_yaw_degrees(-45.0);

        assert!(!cam.view_matrix().is_nan());
        assert!(!cam.projection_matrix().is_nan());
    }
}
