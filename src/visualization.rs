//! Animated 3D view of the cube using kiss3d.
//!
//! This is the presentation collaborator of the engine: it owns all timing
//! and interpolation, keys its per-cubie scene state by `CubieId`, and
//! commits the logical rotation only once the animation finishes.
//! Mid-animation positions are never fed back into the engine.

use std::f32::consts::FRAC_PI_2;
use std::time::{Duration, Instant};

use kiss3d::prelude::*;

use twister::cube::{Cube, CubieId};
use twister::geometry::{snap, Axis, Coord};
use twister::rotation::Rotation;
use twister::shuffle::Shuffler;

/// Size of each rendered cubie (slightly under 1.0 for visible gaps).
const CUBIE_SIZE: f32 = 0.95;
/// Wall-clock duration of one quarter-turn animation.
const ROTATION_DURATION: Duration = Duration::from_millis(400);
/// Idle pause between consecutive shuffle moves.
const ROTATION_PAUSE: Duration = Duration::from_millis(200);

/// Maps a cubie's home coordinate to a stable display color.
///
/// Colors are derived from coordinates at scene-construction time; the
/// engine itself never stores display state.
fn cubie_color(home: Coord) -> Color {
    fn channel(component: i32) -> f32 {
        match component {
            -1 => 0.15,
            0 => 0.55,
            _ => 0.95,
        }
    }
    Color::new(channel(home.0), channel(home.1), channel(home.2), 1.0)
}

fn coord_to_vec3((x, y, z): Coord) -> Vec3 {
    Vec3::new(x as f32, y as f32, z as f32)
}

/// Full turn angle of a rotation around its positive axis.
///
/// The sign is chosen so that the animated end position agrees with the
/// engine's coordinate transform for the same rotation.
fn turn_angle(rotation: Rotation) -> f32 {
    let s = rotation.sign.value() * if rotation.clockwise { 1 } else { -1 };
    -(s as f32) * FRAC_PI_2
}

/// Rotates a position around a coordinate axis by `angle` (right-handed).
fn rotate_position(p: Vec3, axis: Axis, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    match axis {
        Axis::X => Vec3::new(p.x, p.y * cos - p.z * sin, p.y * sin + p.z * cos),
        Axis::Y => Vec3::new(p.x * cos + p.z * sin, p.y, -p.x * sin + p.z * cos),
        Axis::Z => Vec3::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos, p.z),
    }
}

/// Slow start and end, fast middle.
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t.powi(3)
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One quarter turn currently being animated.
struct ActiveRotation {
    rotation: Rotation,
    /// Pre-rotation coordinates of the affected cubies, keyed by id.
    face: Vec<(CubieId, Coord)>,
    started: Instant,
}

/// Opens the interactive viewer with a shuffle of `moves` already running.
pub fn display(moves: usize) {
    pollster::block_on(display_async(moves));
}

async fn display_async(moves: usize) {
    let mut cube = Cube::solved();

    let mut window = Window::new("Twister - [S] shuffle, [R] reset").await;

    let mut camera = OrbitCamera3d::default();
    camera.set_dist(10.0);

    let mut scene = SceneNode3d::empty();
    scene
        .add_light(Light::point(100.0))
        .set_position(Vec3::new(5.0, 5.0, 5.0));

    // scene nodes indexed by cubie id; ids stay stable while positions change
    let mut nodes: Vec<SceneNode3d> = cube
        .cubies()
        .iter()
        .map(|cubie| {
            scene
                .add_cube(CUBIE_SIZE, CUBIE_SIZE, CUBIE_SIZE)
                .set_color(cubie_color(cubie.coord))
                .set_position(coord_to_vec3(cubie.coord))
        })
        .collect();

    let mut rng = rand::rng();
    let mut shuffler = Shuffler::new();
    shuffler.start(moves);

    let mut active: Option<ActiveRotation> = None;
    let mut resume_at = Instant::now();

    loop {
        for event in window.events().iter() {
            if let kiss3d::event::WindowEvent::Key(key, action, _) = event.value {
                use kiss3d::event::{Action, Key};
                if action == Action::Press {
                    match key {
                        // silently ignored while a session is already running
                        Key::S => {
                            shuffler.start(moves);
                        }
                        Key::R if !shuffler.is_running() && active.is_none() => {
                            cube = Cube::solved();
                            for (cubie, node) in cube.cubies().iter().zip(&mut nodes) {
                                node.set_position(coord_to_vec3(cubie.coord));
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        let now = Instant::now();
        if let Some(animation) = &active {
            let t = now.duration_since(animation.started).as_secs_f32()
                / ROTATION_DURATION.as_secs_f32();
            if t >= 1.0 {
                commit(&mut cube, &mut nodes, animation);
                active = None;
                resume_at = now + ROTATION_PAUSE;
            } else {
                let angle = turn_angle(animation.rotation) * ease_in_out_cubic(t);
                for &(id, start) in &animation.face {
                    let position =
                        rotate_position(coord_to_vec3(start), animation.rotation.axis, angle);
                    nodes[id.index()].set_position(position);
                }
            }
        } else if now >= resume_at {
            // previous rotation is committed; pick the next move of the session
            if let Some(rotation) = shuffler.next(&mut rng) {
                let face = cube
                    .face(rotation)
                    .iter()
                    .map(|&id| (id, cube.cubie(id).coord))
                    .collect();
                active = Some(ActiveRotation {
                    rotation,
                    face,
                    started: now,
                });
            }
        }

        if !window.render_3d(&mut scene, &mut camera).await {
            break;
        }
    }
}

/// Commits a finished animation: mutates the engine state and snaps the
/// animated positions back onto the lattice.
fn commit(cube: &mut Cube, nodes: &mut [SceneNode3d], animation: &ActiveRotation) {
    cube.apply(animation.rotation);

    for &(id, start) in &animation.face {
        let end = rotate_position(
            coord_to_vec3(start),
            animation.rotation.axis,
            turn_angle(animation.rotation),
        );
        let coord = (snap(end.x), snap(end.y), snap(end.z));
        // the snapped animation end point is exactly the committed coordinate
        debug_assert_eq!(coord, cube.cubie(id).coord);
        nodes[id.index()].set_position(coord_to_vec3(coord));
    }
}
