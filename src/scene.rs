//! Hero background: a floating wireframe cube in front of a starfield, seen by
//! a slowly orbiting camera.

use std::f64::consts::PI;

use nalgebra::{Isometry3, Matrix4, Perspective3, Point3, Rotation3, Translation3, Vector3};
use thiserror::Error;

/// Radians added to each cube axis on every display-frame tick.
pub const ROTATION_STEP: f64 = 0.01;

/// Unit box corners.
pub const CUBE_VERTICES: [[f64; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

/// Box edges plus the diagonal splitting each face into two triangles.
pub const WIREFRAME_EDGES: [(usize, usize); 18] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    (0, 2),
    (4, 6),
    (0, 5),
    (3, 6),
    (0, 7),
    (1, 6),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("canvas is not mounted")]
    NotMounted,
    #[error("2d rendering context unavailable")]
    NoContext,
    #[error("canvas drawing failed")]
    Draw,
}

/// Cube orientation. Grows without wrapping while the hero is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub angle_x: f64,
    pub angle_y: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self {
            angle_x: 0.5,
            angle_y: 0.5,
        }
    }
}

impl RotationState {
    pub fn tick(&mut self) {
        self.angle_x += ROTATION_STEP;
        self.angle_y += ROTATION_STEP;
    }

    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::x_axis(), self.angle_x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), self.angle_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatConfig {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarfieldConfig {
    pub count: usize,
    pub radius: f64,
    pub depth: f64,
    pub factor: f64,
    pub speed: f64,
    pub fade: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub cube_color: &'static str,
    pub star_color: &'static str,
    pub camera_distance: f64,
    pub fov_degrees: f64,
    pub near: f64,
    pub far: f64,
    /// Orbit speed in the unit used by orbit controls: 2.0 is one turn per 30 s.
    pub orbit_speed: f64,
    pub float: FloatConfig,
    pub stars: StarfieldConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            cube_color: "#6366f1",
            star_color: "230, 230, 230",
            camera_distance: 5.0,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            orbit_speed: 0.5,
            float: FloatConfig {
                speed: 4.0,
                rotation_intensity: 1.0,
                float_intensity: 2.0,
            },
            stars: StarfieldConfig {
                count: 1000,
                radius: 100.0,
                depth: 50.0,
                factor: 4.0,
                speed: 1.5,
                fade: true,
            },
        }
    }
}

/// Pose of the floating group at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatPose {
    pub rotation: [f64; 3],
    pub y: f64,
}

impl FloatConfig {
    pub fn pose(&self, elapsed: f64) -> FloatPose {
        let phase = elapsed / 4.0 * self.speed;
        let (sin, cos) = phase.sin_cos();
        FloatPose {
            rotation: [
                cos / 8.0 * self.rotation_intensity,
                sin / 8.0 * self.rotation_intensity,
                sin / 20.0 * self.rotation_intensity,
            ],
            y: sin / 10.0 * self.float_intensity,
        }
    }
}

impl FloatPose {
    pub fn to_homogeneous(&self) -> Matrix4<f64> {
        let [x, y, z] = self.rotation;
        let rotation = Rotation3::from_axis_angle(&Vector3::x_axis(), x)
            * Rotation3::from_axis_angle(&Vector3::y_axis(), y)
            * Rotation3::from_axis_angle(&Vector3::z_axis(), z);
        Translation3::new(0.0, self.y, 0.0).to_homogeneous() * rotation.to_homogeneous()
    }
}

/// Camera angle around the vertical axis after `elapsed` seconds.
pub fn orbit_angle(orbit_speed: f64, elapsed: f64) -> f64 {
    -(2.0 * PI / 60.0 * orbit_speed * elapsed)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Point3<f64>,
    pub size: f64,
}

/// Additive recurrence over the generalized golden ratio. Gives an even,
/// reproducible spread in `[0, 1)^4`.
fn quasi_random(n: usize) -> [f64; 4] {
    const G: f64 = 1.167_303_978_261_418_7;
    let mut out = [0.0; 4];
    let mut alpha = 1.0;
    for value in out.iter_mut() {
        alpha /= G;
        *value = (0.5 + alpha * (n + 1) as f64).fract();
    }
    out
}

/// Stars on shells between `radius` and `radius + depth`, outermost first.
pub fn starfield(config: &StarfieldConfig) -> Vec<Star> {
    if config.count == 0 {
        return Vec::new();
    }
    let mut r = config.radius + config.depth;
    let increment = config.depth / config.count as f64;
    (0..config.count)
        .map(|i| {
            let [u_r, u_phi, u_theta, u_size] = quasi_random(i);
            r -= increment * u_r;
            let phi = (1.0 - u_phi * 2.0).acos();
            let theta = u_theta * 2.0 * PI;
            Star {
                position: Point3::new(
                    r * phi.sin() * theta.sin(),
                    r * phi.cos(),
                    r * phi.sin() * theta.cos(),
                ),
                size: (0.5 + 0.5 * u_size) * config.factor,
            }
        })
        .collect()
}

/// Shared size pulse applied to every star.
pub fn twinkle(speed: f64, elapsed: f64) -> f64 {
    3.0 + (elapsed * speed + 100.0).sin()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    /// Distance along the view axis.
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenStar {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Everything to draw for one frame, in canvas pixels.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub stars: Vec<ScreenStar>,
    pub edges: Vec<(ScreenPoint, ScreenPoint)>,
}

struct Projector {
    view_projection: Matrix4<f64>,
    width: f64,
    height: f64,
}

impl Projector {
    fn project(&self, model: &Matrix4<f64>, point: &Point3<f64>) -> Option<ScreenPoint> {
        let clip = self.view_projection * model * point.to_homogeneous();
        if clip.w <= f64::EPSILON {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some(ScreenPoint {
            x: (ndc.x + 1.0) / 2.0 * self.width,
            y: (1.0 - ndc.y) / 2.0 * self.height,
            depth: clip.w,
        })
    }
}

pub struct Scene {
    config: SceneConfig,
    rotation: RotationState,
    stars: Vec<Star>,
    elapsed: f64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        let stars = starfield(&config.stars);
        Self {
            config,
            rotation: RotationState::default(),
            stars,
            elapsed: 0.0,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Seconds of animation time accumulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// One display-frame tick. The cube advances by a fixed step no matter
    /// how long the frame took; time-based motions use `delta_ms`.
    pub fn advance(&mut self, delta_ms: f64) {
        self.rotation.tick();
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed += delta_ms / 1000.0;
        }
    }

    fn projector(&self, width: f64, height: f64) -> Projector {
        let angle = orbit_angle(self.config.orbit_speed, self.elapsed);
        let distance = self.config.camera_distance;
        let eye = Point3::new(distance * angle.sin(), 0.0, distance * angle.cos());
        let view = Isometry3::look_at_rh(&eye, &Point3::origin(), &Vector3::y());
        let projection = Perspective3::new(
            width / height,
            self.config.fov_degrees.to_radians(),
            self.config.near,
            self.config.far,
        );
        Projector {
            view_projection: projection.to_homogeneous() * view.to_homogeneous(),
            width,
            height,
        }
    }

    /// Projects the current state onto a `width` x `height` canvas.
    pub fn frame(&self, width: f64, height: f64) -> Frame {
        if width <= 0.0 || height <= 0.0 {
            return Frame::default();
        }
        let projector = self.projector(width, height);

        let identity = Matrix4::identity();
        let pulse = twinkle(self.config.stars.speed, self.elapsed);
        // soft stars fade out before the edge of their point sprite
        let extent = if self.config.stars.fade { 0.25 } else { 0.5 };
        let stars = self
            .stars
            .iter()
            .filter_map(|star| {
                let p = projector.project(&identity, &star.position)?;
                if !(0.0..=width).contains(&p.x) || !(0.0..=height).contains(&p.y) {
                    return None;
                }
                let point_size = star.size * (30.0 / p.depth) * pulse;
                Some(ScreenStar {
                    x: p.x,
                    y: p.y,
                    radius: point_size * extent,
                })
            })
            .collect();

        let model = self.config.float.pose(self.elapsed).to_homogeneous()
            * self.rotation.rotation().to_homogeneous();
        let corners: Vec<Option<ScreenPoint>> = CUBE_VERTICES
            .iter()
            .map(|&[x, y, z]| projector.project(&model, &Point3::new(x, y, z)))
            .collect();
        let edges = WIREFRAME_EDGES
            .iter()
            .filter_map(|&(a, b)| Some((corners[a]?, corners[b]?)))
            .collect();

        Frame {
            width,
            height,
            stars,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_ticks_by_fixed_step() {
        let mut rotation = RotationState::default();
        for frame in 1..=1000 {
            let before = rotation;
            rotation.tick();
            assert!((rotation.angle_x - before.angle_x - ROTATION_STEP).abs() < 1e-9);
            assert!((rotation.angle_y - before.angle_y - ROTATION_STEP).abs() < 1e-9);
            assert!((rotation.angle_x - (0.5 + frame as f64 * ROTATION_STEP)).abs() < 1e-9);
        }
        // no wrapping past a full turn
        assert!(rotation.angle_x > 2.0 * PI);
    }

    #[test]
    fn test_advance_ticks_once_regardless_of_delta() {
        let mut scene = Scene::default();
        scene.advance(16.0);
        scene.advance(1000.0);
        scene.advance(0.0);
        let rotation = scene.rotation();
        assert!((rotation.angle_x - 0.53).abs() < 1e-9);
        assert!((rotation.angle_y - 0.53).abs() < 1e-9);
        assert!((scene.elapsed() - 1.016).abs() < 1e-9);
    }

    #[test]
    fn test_starfield_shells() {
        let config = SceneConfig::default().stars;
        let stars = starfield(&config);
        assert_eq!(stars.len(), 1000);
        for star in &stars {
            let r = star.position.coords.norm();
            assert!((100.0 - 1e-9..=150.0 + 1e-9).contains(&r), "radius {r}");
            assert!((2.0..=4.0).contains(&star.size), "size {}", star.size);
        }
        // outermost shell first
        let first = stars[0].position.coords.norm();
        let last = stars[999].position.coords.norm();
        assert!(first >= last);
    }

    #[test]
    fn test_starfield_is_reproducible() {
        let config = SceneConfig::default().stars;
        assert_eq!(starfield(&config), starfield(&config));
        let empty = StarfieldConfig { count: 0, ..config };
        assert!(starfield(&empty).is_empty());
    }

    #[test]
    fn test_float_pose_at_rest() {
        let pose = SceneConfig::default().float.pose(0.0);
        assert!((pose.rotation[0] - 0.125).abs() < 1e-12);
        assert!(pose.rotation[1].abs() < 1e-12);
        assert!(pose.y.abs() < 1e-12);
    }

    #[test]
    fn test_float_pose_bounds() {
        let float = SceneConfig::default().float;
        for i in 0..200 {
            let pose = float.pose(i as f64 * 0.1);
            assert!(pose.y.abs() <= 0.2 + 1e-12);
            assert!(pose.rotation[2].abs() <= 0.05 + 1e-12);
        }
    }

    #[test]
    fn test_orbit_full_turn() {
        // speed 0.5 turns once every two minutes
        assert!((orbit_angle(0.5, 120.0).abs() - 2.0 * PI).abs() < 1e-9);
        assert_eq!(orbit_angle(0.5, 0.0), 0.0);
    }

    #[test]
    fn test_twinkle_range() {
        for i in 0..100 {
            let t = twinkle(1.5, i as f64 * 0.37);
            assert!((2.0..=4.0).contains(&t));
        }
    }

    #[test]
    fn test_frame_projects_cube_near_center() {
        let scene = Scene::default();
        let frame = scene.frame(800.0, 600.0);
        assert_eq!(frame.edges.len(), WIREFRAME_EDGES.len());
        for (a, b) in &frame.edges {
            for p in [a, b] {
                assert!(p.x > 200.0 && p.x < 600.0, "x {}", p.x);
                assert!(p.y > 100.0 && p.y < 500.0, "y {}", p.y);
                assert!(p.depth > 4.0 && p.depth < 6.0);
            }
        }
    }

    #[test]
    fn test_frame_drops_stars_behind_camera() {
        let scene = Scene::default();
        let frame = scene.frame(800.0, 600.0);
        assert!(!frame.stars.is_empty());
        assert!(frame.stars.len() < scene.stars().len());
        for star in &frame.stars {
            assert!(star.radius > 0.0);
        }
    }

    #[test]
    fn test_frame_empty_canvas() {
        let scene = Scene::default();
        assert_eq!(scene.frame(0.0, 600.0), Frame::default());
    }
}
