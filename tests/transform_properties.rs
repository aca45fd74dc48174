use dashgl_math::math::{Mat4, Vec3, Vec4};
use dashgl_math::{Demo, MvpUniform, Viewport};
use std::f32::consts::TAU;
use std::time::Duration;

const EPS: f32 = 1e-5;

/// Deterministic spread of well-conditioned matrices.
fn sample_matrices() -> Vec<Mat4> {
    let mut out = Vec::new();
    for i in 0..8 {
        let s = i as f32;
        out.push(
            Mat4::translation(Vec3::new(0.5 * s, -0.25 * s, 1.0 - 0.1 * s))
                * Mat4::rotation(Vec3::new(0.3 * s, -0.7 * s, 0.11 * s)),
        );
    }
    out.push(Mat4::from_rows([
        [0.5, -0.25, 0.75, 0.1],
        [0.2, 0.9, -0.4, -0.3],
        [-0.6, 0.15, 0.3, 0.8],
        [0.05, -0.1, 0.2, 1.0],
    ]));
    out
}

fn sample_angles() -> impl Iterator<Item = f32> {
    (0..32).map(|i| i as f32 * TAU / 32.0)
}

#[test]
fn identity_is_neutral_on_both_sides() {
    for m in sample_matrices() {
        assert!((Mat4::IDENTITY * m).abs_diff_eq(&m, EPS));
        assert!((m * Mat4::IDENTITY).abs_diff_eq(&m, EPS));
    }
    assert_eq!(Mat4::identity(), Mat4::default());
}

#[test]
fn multiplication_is_associative() {
    let samples = sample_matrices();
    for a in &samples {
        for b in samples.iter().rev().take(3) {
            for c in samples.iter().step_by(3) {
                let left = (*a * *b) * *c;
                let right = *a * (*b * *c);
                assert!(left.abs_diff_eq(&right, 1e-4), "{left:?} != {right:?}");
            }
        }
    }
}

#[test]
fn translation_moves_origin() {
    let t = Vec3::new(1.5, -2.0, 0.25);
    let p = Mat4::translation(t) * Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(p, Vec4::new(1.5, -2.0, 0.25, 1.0));
}

#[test]
fn zero_rotation_is_identity() {
    assert_eq!(Mat4::rotation_z(0.0), Mat4::IDENTITY);
    assert_eq!(Mat4::rotation_y(0.0), Mat4::IDENTITY);
    assert_eq!(Mat4::rotation(Vec3::ZERO), Mat4::IDENTITY);
}

#[test]
fn opposite_rotations_cancel() {
    for theta in sample_angles() {
        let m = Mat4::rotation_z(theta) * Mat4::rotation_z(-theta);
        assert!(m.abs_diff_eq(&Mat4::IDENTITY, EPS), "theta = {theta}");

        let m = Mat4::rotation_y(theta) * Mat4::rotation_y(-theta);
        assert!(m.abs_diff_eq(&Mat4::IDENTITY, EPS), "theta = {theta}");
    }
}

#[test]
fn in_place_accumulation_matches_fresh_product() {
    for m in sample_matrices() {
        let fresh = Mat4::multiply(&m, &m);

        let mut acc = m;
        acc *= m;
        assert_eq!(acc, fresh);

        let mut buffer = Mat4::ZERO;
        buffer.copy_from(&fresh);
        assert_eq!(buffer, acc);
    }
}

#[test]
fn translate_survives_identity_sandwich() {
    let t = Mat4::translation(Vec3::new(1.0, 0.0, 0.0));
    let mut acc = Mat4::IDENTITY;
    acc *= t;
    acc *= Mat4::IDENTITY;
    assert_eq!(acc, t);
}

#[test]
fn perspective_clip_w_is_negated_view_depth() {
    let p = Mat4::perspective(45.0, 640.0 / 480.0, 0.1, 10.0);
    let clip = p * Vec4::new(0.0, 0.0, -4.0, 1.0);
    assert!((clip.w - 4.0).abs() < EPS);
}

#[test]
fn perspective_matches_glam_gl_convention() {
    let cases = [
        (45.0, 4.0 / 3.0, 0.1, 10.0),
        (90.0, 1.0, 1.0, 100.0),
        (30.0, 2.5, 0.5, 3.0),
    ];
    for (fov, aspect, near, far) in cases {
        let ours = Mat4::perspective(fov, aspect, near, far);
        let theirs = glam::Mat4::perspective_rh_gl(f32::to_radians(fov), aspect, near, far);
        assert!(ours.abs_diff_eq(&theirs.into(), 1e-4), "fov = {fov}");
    }
}

#[test]
fn look_at_forward_row_opposes_view_direction() {
    let eye = Vec3::new(0.0, 2.0, 0.0);
    let target = Vec3::new(0.0, 0.0, -4.0);
    let view = Mat4::look_at(eye, target, Vec3::Y);

    let direction = (target - eye).try_normalize().unwrap();
    let [x, y, z, _] = view.row(2);
    let dot = Vec3::new(x, y, z).dot(direction);
    assert!((dot + 1.0).abs() < EPS);
}

#[test]
fn look_at_matches_glam_right_handed() {
    let cases = [
        (Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -4.0), Vec3::Y),
        (Vec3::new(3.0, 1.0, 5.0), Vec3::ZERO, Vec3::Y),
        (Vec3::new(-1.0, -2.0, 0.5), Vec3::new(2.0, 0.0, 1.0), Vec3::Z),
    ];
    for (eye, target, up) in cases {
        let ours = Mat4::look_at(eye, target, up);
        let theirs = glam::Mat4::look_at_rh(eye.into(), target.into(), up.into());
        assert!(ours.abs_diff_eq(&theirs.into(), EPS), "eye = {eye:?}");
    }
}

#[test]
fn degenerate_constructors_fall_back_to_identity() {
    assert_eq!(Mat4::perspective(45.0, 1.0, 0.0, 10.0), Mat4::IDENTITY);
    assert_eq!(Mat4::perspective(45.0, 1.0, -0.1, 10.0), Mat4::IDENTITY);
    assert_eq!(Mat4::perspective(180.0, 1.0, 0.1, 10.0), Mat4::IDENTITY);
    assert_eq!(Mat4::perspective(45.0, 1.0, 2.0, 1.0), Mat4::IDENTITY);

    let eye = Vec3::new(0.0, 2.0, 0.0);
    assert_eq!(Mat4::look_at(eye, eye, Vec3::Y), Mat4::IDENTITY);
    assert_eq!(Mat4::look_at(eye, Vec3::new(0.0, 7.0, 0.0), Vec3::Y), Mat4::IDENTITY);
}

#[test]
fn demo_frames_stay_finite_over_a_minute() {
    let viewport = Viewport::default();
    for demo in Demo::ALL {
        for second in 0..60 {
            let mvp = demo.mvp_at(Duration::from_millis(second * 1000 + 17), viewport);
            assert!(mvp.is_finite(), "{demo} at {second}s");
            assert_eq!(MvpUniform::from(mvp).as_bytes().len(), 64);
        }
    }
}

#[test]
fn cube_center_stays_on_screen() {
    let viewport = Viewport::default();
    for step in 0..16 {
        let mvp = Demo::Cube.mvp_at(Duration::from_millis(step * 500), viewport);
        let clip = mvp * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        for ndc in [clip.x / clip.w, clip.y / clip.w, clip.z / clip.w] {
            assert!((-1.0..=1.0).contains(&ndc), "step {step}: {ndc}");
        }
    }
}
