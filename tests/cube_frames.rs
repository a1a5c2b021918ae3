use ascii_cube::config::CubeConfig;
use ascii_cube::driver::CubeRenderer;
use ascii_cube::engine::Engine;
use ascii_cube::engine::projector::project;
use ascii_cube::renderer::{BLANK, Camera, Canvas};
use ascii_cube::types::{Rotation, Vec3, Viewport};

#[test]
fn origin_sample_lands_on_center_cell() {
    let mut canvas = Canvas::new(Viewport::default(), Camera::default());
    let point = project(Vec3::new(0.0, 0.0, 0.0), Rotation::default());
    assert!(canvas.plot(point, '@'));
    assert_eq!(canvas.glyph_at(50, 25), Some('@'));
}

#[test]
fn nearer_of_two_samples_wins_regardless_of_order() {
    // With camera distance 100, z = -50 and z = 50 shift to 50 and 150.
    let near = project(Vec3::new(0.0, 0.0, -50.0), Rotation::default());
    let far = project(Vec3::new(0.0, 0.0, 50.0), Rotation::default());

    for order in [[(near, 'n'), (far, 'f')], [(far, 'f'), (near, 'n')]] {
        let mut canvas = Canvas::new(Viewport::default(), Camera::default());
        for (point, glyph) in order {
            canvas.plot(point, glyph);
        }
        assert_eq!(canvas.glyph_at(50, 25), Some('n'));
    }
}

#[test]
fn back_face_is_visible_head_on() {
    let mut renderer = CubeRenderer::new(&CubeConfig::default());
    let frame = renderer.render_at(Rotation::default());
    let center_row = frame.lines().nth(25).unwrap();
    assert_eq!(center_row.chars().nth(50), Some('@'));
    // The far face is hidden behind it everywhere.
    assert!(!frame.contains('#'));
}

#[test]
fn frame_rows_have_viewport_shape_at_any_rotation() {
    let viewport = Viewport::default();
    let mut renderer = CubeRenderer::new(&CubeConfig::default());
    for rotation in [
        Rotation::new(0.0, 0.0, 0.0),
        Rotation::new(0.7, 0.7, 0.3),
        Rotation::new(3.1, -2.2, 9.4),
    ] {
        let frame = renderer.render_at(rotation);
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), viewport.height as usize);
        for row in rows {
            assert_eq!(row.chars().count(), viewport.width as usize);
        }
    }
}

#[test]
fn nothing_persists_between_frames() {
    let config = CubeConfig::default();
    let mut animated = CubeRenderer::new(&config);
    let mut frame = String::new();
    for _ in 0..4 {
        frame = animated.render_frame();
    }

    // A fresh renderer drawing only the final rotation must agree cell for cell.
    let mut fresh = CubeRenderer::new(&config);
    assert_eq!(frame, fresh.render_at(animated.rotation()));
}

#[test]
fn rotated_cube_shows_multiple_faces() {
    let mut renderer = CubeRenderer::new(&CubeConfig::default());
    let frame = renderer.render_at(Rotation::new(0.6, 0.8, 0.2));
    let faces = ['@', '$', '~', '#', ';', '+']
        .iter()
        .filter(|g| frame.contains(**g))
        .count();
    assert!(faces >= 2, "expected at least two visible faces, saw {faces}");
    assert!(frame.contains(BLANK));
}

#[test]
fn engine_output_is_deterministic() {
    let rotation = Rotation::new(1.1, 0.4, 2.0);
    let mut first = Vec::new();
    let mut second = Vec::new();
    Engine::generate(rotation, &mut first);
    Engine::generate(rotation, &mut second);
    assert_eq!(first, second);
}
