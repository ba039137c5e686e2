use glam::{Mat4, Quat, Vec2, Vec3};

pub const FOV_Y_DEGREES: f32 = 45.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 10.0;

/// Degrees of rotation per pixel of drag distance.
const DRAG_SCALE: f32 = 0.5;

/// Orientation and projection state for the rotatable cube.
///
/// The cube's orientation is a unit quaternion updated by mouse drags:
/// each move while the primary button is held composes a small world-space
/// rotation in front of the accumulated one. The projection only changes
/// on resize.
pub struct Arcball {
    orientation: Quat,
    projection: Mat4,
    last_cursor: Vec2,
    dragging: bool,
}

impl Arcball {
    pub fn new(width: u32, height: u32) -> Self {
        let mut arcball = Self {
            orientation: Quat::IDENTITY,
            projection: Mat4::IDENTITY,
            last_cursor: Vec2::ZERO,
            dragging: false,
        };
        arcball.resize(width, height);
        arcball
    }

    /// Rebuilds the projection for the new viewport. A zero height is
    /// ignored and the previous projection kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        if height == 0 {
            return;
        }
        let aspect = width as f32 / height as f32;
        self.projection =
            Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    }

    /// Anchors a drag at the given cursor position.
    pub fn press(&mut self, cursor: Vec2) {
        self.last_cursor = cursor;
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advances the drag to `cursor`, rotating the cube by half the pixel
    /// distance travelled (in degrees) about the screen-swapped axis
    /// `(dy, dx, 0)`, so a vertical drag tips the cube forward.
    ///
    /// Returns `true` when the orientation changed and a redraw is needed.
    /// Moves while not dragging, and zero-length deltas, are no-ops.
    pub fn drag(&mut self, cursor: Vec2) -> bool {
        if !self.dragging {
            return false;
        }

        let delta = cursor - self.last_cursor;
        self.last_cursor = cursor;

        if delta.length_squared() == 0.0 {
            return false;
        }

        let angle = (delta.length() * DRAG_SCALE).to_radians();
        let axis = Vec3::new(delta.y, delta.x, 0.0).normalize();
        let rotation = Quat::from_axis_angle(axis, angle);

        // Pre-multiplied: the new rotation is applied in world space.
        // Renormalize to keep floating-point drift from accumulating.
        self.orientation = (rotation * self.orientation).normalize();
        true
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Model transform: push the cube back one unit, then apply the
    /// accumulated rotation.
    pub fn model(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0)) * Mat4::from_quat(self.orientation)
    }

    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn quat_approx_eq(a: Quat, b: Quat) -> bool {
        (a.x - b.x).abs() < EPSILON
            && (a.y - b.y).abs() < EPSILON
            && (a.z - b.z).abs() < EPSILON
            && (a.w - b.w).abs() < EPSILON
    }

    #[test]
    fn test_starts_at_identity() {
        let arcball = Arcball::new(800, 600);
        assert_eq!(arcball.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_zero_delta_is_identity() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(100.0, 100.0));
        assert!(!arcball.drag(Vec2::new(100.0, 100.0)));
        assert_eq!(arcball.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_move_without_press_is_gated() {
        let mut arcball = Arcball::new(800, 600);
        assert!(!arcball.drag(Vec2::new(250.0, 130.0)));
        assert_eq!(arcball.orientation(), Quat::IDENTITY);
    }

    #[test]
    fn test_move_after_release_is_gated() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(10.0, 10.0));
        arcball.drag(Vec2::new(20.0, 10.0));
        let oriented = arcball.orientation();
        arcball.release();
        assert!(!arcball.drag(Vec2::new(90.0, 40.0)));
        assert_eq!(arcball.orientation(), oriented);
    }

    #[test]
    fn test_horizontal_drag_rotates_about_y() {
        // press (100,100), move to (110,100): delta (10,0), angle 5 degrees,
        // axis (0,10,0) normalized to +Y
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(100.0, 100.0));
        assert!(arcball.drag(Vec2::new(110.0, 100.0)));

        let expected = Quat::from_axis_angle(Vec3::Y, 5.0_f32.to_radians());
        assert!(quat_approx_eq(arcball.orientation(), expected));
    }

    #[test]
    fn test_vertical_drag_rotates_about_x() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(100.0, 100.0));
        arcball.drag(Vec2::new(100.0, 120.0));

        let expected = Quat::from_axis_angle(Vec3::X, 10.0_f32.to_radians());
        assert!(quat_approx_eq(arcball.orientation(), expected));
    }

    #[test]
    fn test_composition_order_is_pre_multiplied() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(0.0, 0.0));
        arcball.drag(Vec2::new(10.0, 0.0));
        arcball.drag(Vec2::new(10.0, 8.0));

        let r1 = Quat::from_axis_angle(Vec3::Y, 5.0_f32.to_radians());
        let r2 = Quat::from_axis_angle(Vec3::X, 4.0_f32.to_radians());
        let expected = r2 * r1;
        assert!(quat_approx_eq(arcball.orientation(), expected));
        assert!(!quat_approx_eq(arcball.orientation(), r1 * r2));
    }

    #[test]
    fn test_orientation_stays_unit_length() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::ZERO);
        for i in 1..2000 {
            let x = (i % 37) as f32 * 3.1;
            let y = (i % 23) as f32 * 1.7;
            arcball.drag(Vec2::new(x, y));
        }
        assert!((arcball.orientation().length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_press_resets_drag_anchor() {
        let mut arcball = Arcball::new(800, 600);
        arcball.press(Vec2::new(0.0, 0.0));
        arcball.drag(Vec2::new(10.0, 0.0));
        let oriented = arcball.orientation();

        // A fresh press re-anchors; the first move is measured from the
        // new anchor, not the old cursor.
        arcball.press(Vec2::new(500.0, 500.0));
        assert!(!arcball.drag(Vec2::new(500.0, 500.0)));
        assert_eq!(arcball.orientation(), oriented);
    }

    #[test]
    fn test_resize_sets_aspect() {
        let mut arcball = Arcball::new(800, 600);
        let mvp = arcball.model_view_projection();
        let expected = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            800.0 / 600.0,
            Z_NEAR,
            Z_FAR,
        ) * Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
        assert!(mvp.abs_diff_eq(expected, EPSILON));

        arcball.resize(400, 600);
        let mvp = arcball.model_view_projection();
        let expected = Mat4::perspective_rh(
            FOV_Y_DEGREES.to_radians(),
            400.0 / 600.0,
            Z_NEAR,
            Z_FAR,
        ) * Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0));
        assert!(mvp.abs_diff_eq(expected, EPSILON));
    }

    #[test]
    fn test_zero_height_resize_keeps_projection() {
        let mut arcball = Arcball::new(800, 600);
        let before = arcball.model_view_projection();
        arcball.resize(800, 0);
        assert_eq!(arcball.model_view_projection(), before);
    }

    #[test]
    fn test_mvp_translates_before_rotating() {
        let arcball = Arcball::new(640, 480);
        let model = arcball.model();
        // Identity orientation leaves only the translation.
        assert!(model
            .transform_point3(Vec3::ZERO)
            .abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), EPSILON));
    }
}
