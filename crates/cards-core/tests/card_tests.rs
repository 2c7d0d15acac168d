mod common;

use cards_core::{BackConfig, Card, CardConfig, SceneGraph, Tuning};
use common::*;
use std::f32::consts::PI;

#[test]
fn unloaded_card_does_not_animate() {
    let tuning = Tuning::default();
    let mut card = Card::new(0, &simple_config(3.0, 3.0), &tuning);
    card.set_position(1.0, 2.0, 3.0);
    card.update();
    assert!(!card.is_loaded());
    assert_eq!(card.current().position, glam::Vec3::ZERO);
}

#[test]
fn flip_toggles_facing_and_rotation_target() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    assert!(card.is_front_facing());
    card.flip();
    assert!(!card.is_front_facing());
    assert!((card.target().rotation_y - PI).abs() < 1e-6);
    card.flip();
    assert!(card.is_front_facing());
    assert!(card.target().rotation_y.abs() < 1e-6);
}

#[test]
fn flip_converges_without_overshoot() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.flip();
    let mut prev = card.current().rotation_y;
    for _ in 0..800 {
        card.update();
        let now = card.current().rotation_y;
        assert!(now >= prev);
        assert!(now <= PI + 1e-5);
        prev = now;
    }
    assert!((prev - PI).abs() < 1e-3);
    assert!((card.flip_phase() - 1.0).abs() < 1e-3);
}

#[test]
fn hover_tilt_adds_to_flip_target() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.set_hover_tilt(1.0, 0.5);
    let f = tuning.hover_tilt_factor;
    assert!((card.target().rotation_x - 0.5 * f).abs() < 1e-6);
    assert!((card.target().rotation_y - f).abs() < 1e-6);
    card.flip();
    assert!((card.target().rotation_y - (PI + f)).abs() < 1e-6);
    assert!((card.flip_target() - PI).abs() < 1e-6);
}

#[test]
fn position_and_scale_approach_targets() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.set_position(4.0, -2.0, 1.0);
    card.set_scale(0.8);
    card.update();
    assert!((card.current().position.x - 0.4).abs() < 1e-5);
    assert!((card.current().scale - 0.98).abs() < 1e-5);
    for _ in 0..300 {
        card.update();
    }
    assert!((card.current().position.x - 4.0).abs() < 1e-3);
    assert!((card.current().position.y + 2.0).abs() < 1e-3);
    assert!((card.current().scale - 0.8).abs() < 1e-3);
}

#[test]
fn pinch_scales_from_base_and_reset_restores_it() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.set_scale(2.0);
    card.apply_pinch_zoom(1.5, 0.5, -0.5);
    assert!((card.target().scale - 3.0).abs() < 1e-6);
    let expected = 0.5 * tuning.pinch_pan * 0.5;
    assert!((card.pinch_offset().x - expected).abs() < 1e-6);
    assert!((card.pinch_offset().y + expected).abs() < 1e-6);
    assert_eq!(card.base_scale(), 2.0);

    card.reset_pinch_offset();
    assert_eq!(card.pinch_offset(), glam::Vec2::ZERO);
    assert_eq!(card.target().scale, 2.0);
}

#[test]
fn neutral_pinch_has_no_offset() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.apply_pinch_zoom(1.0, 0.9, 0.9);
    assert_eq!(card.pinch_offset(), glam::Vec2::ZERO);
    assert_eq!(card.target().scale, 1.0);
}

#[test]
fn simple_card_ignores_accordion_requests() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    assert!(!card.is_accordion());
    assert!(!card.open_accordion());
    assert!(!card.close_accordion());
    card.toggle_accordion();
    assert!(!card.is_accordion_open());
    assert_eq!(card.face_transforms().len(), 1);
}

#[test]
fn accordion_open_is_idempotent() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &accordion_config(4), &tuning);
    assert!(card.open_accordion());
    assert!(!card.open_accordion());
    assert!(card.is_accordion_open());
    assert!(card.close_accordion());
    assert!(!card.close_accordion());
}

#[test]
fn accordion_fold_progress_is_monotonic_and_snaps() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &accordion_config(4), &tuning);
    card.open_accordion();
    let mut prev = 0.0;
    for _ in 0..200 {
        card.update();
        let p = card.accordion().map(|a| a.fold_progress()).unwrap_or(0.0);
        assert!(p >= prev);
        assert!(p <= 1.0);
        prev = p;
    }
    let acc = card.accordion().unwrap();
    assert_eq!(acc.fold_progress(), 1.0);
    assert!(!acc.is_animating());

    card.close_accordion();
    for _ in 0..200 {
        card.update();
    }
    let acc = card.accordion().unwrap();
    assert_eq!(acc.fold_progress(), 0.0);
    assert!(!acc.is_animating());
}

#[test]
fn accordion_layouts_fold_and_fan() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &accordion_config(4), &tuning);
    let closed = card.face_transforms();
    for (i, face) in closed.iter().enumerate() {
        let expected_y = if i % 2 == 0 { 0.0 } else { PI };
        assert!((face.rotation_y.abs() - expected_y).abs() < 1e-5);
        assert_eq!(face.position.x, 0.0);
    }
    // Earlier faces sit nearer the viewer when folded.
    assert!(closed[0].position.z > closed[3].position.z);

    card.open_accordion();
    for _ in 0..200 {
        card.update();
    }
    let open = card.face_transforms();
    let width = 2.0;
    for (i, face) in open.iter().enumerate() {
        assert!((face.position.x - (i as f32 - 1.5) * width).abs() < 1e-4);
        assert!(face.position.z.abs() < 1e-5);
        assert!((face.rotation_y.abs() - tuning.fan_tilt).abs() < 1e-4);
    }
}

#[test]
fn fold_keeps_face_angles_normalized_every_frame() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &accordion_config(5), &tuning);
    let mut prev = card.face_transforms();
    let mut check = |card: &Card| {
        let faces = card.face_transforms();
        for (face, before) in faces.iter().zip(prev.iter()) {
            for a in [face.rotation_x, face.rotation_y] {
                assert!(a > -PI && a <= PI, "angle {} out of range", a);
            }
            // Shortest-arc stepping: no frame swings a face by a full turn.
            let step = (face.rotation_y - before.rotation_y).abs();
            assert!(step < 0.5 || (step - 2.0 * PI).abs() < 0.5, "jump {}", step);
        }
        prev = faces;
    };

    card.open_accordion();
    for _ in 0..200 {
        card.update();
        check(&card);
    }
    card.close_accordion();
    for _ in 0..200 {
        card.update();
        check(&card);
    }
    let acc = card.accordion().unwrap();
    assert!(!acc.is_animating());
    assert_eq!(acc.fold_progress(), 0.0);
}

#[test]
fn hover_rotation_trails_its_target_at_the_general_rate() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    card.set_hover_tilt(1.0, -1.0);
    card.flip();
    card.update();
    let f = tuning.hover_tilt_factor;
    let hover = card.hover_rotation();
    assert!((hover.x + f * tuning.smoothing_rate).abs() < 1e-6);
    assert!((hover.y - f * tuning.smoothing_rate).abs() < 1e-6);
    // The flip advances at its own, slower rate.
    assert!((card.flip_phase() - tuning.flip_rate).abs() < 1e-6);
    assert!((card.current().rotation_y - (card.flip_phase() * PI + hover.y)).abs() < 1e-6);

    for _ in 0..300 {
        card.update();
    }
    let hover = card.hover_rotation();
    assert!((hover.x + f).abs() < 1e-4);
    assert!((hover.y - f).abs() < 1e-4);
}

#[test]
fn reset_to_front_unflips_and_folds() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &accordion_config(3), &tuning);
    card.flip();
    card.open_accordion();
    card.reset_to_front();
    assert!(card.is_front_facing());
    assert!(!card.is_accordion_open());
}

#[test]
fn thin_card_builds_group_face_and_two_quads() {
    let tuning = Tuning::default();
    let mut card = loaded_card(2, &simple_config(3.0, 3.0), &tuning);
    let mut scene = SceneGraph::new();
    let group = card.attach_to_scene(&mut scene);
    assert_eq!(card.group(), Some(group));
    assert_eq!(scene.len(), 4);
    let drawables = scene.drawables();
    assert_eq!(drawables.len(), 2);
    assert!(drawables.iter().all(|d| d.render_order == 2));
}

#[test]
fn thick_card_with_solid_back_gets_edges() {
    let tuning = Tuning::default();
    let json = r##"[{ "front": "f.png", "backColor": "#ffcb87", "width": 4, "height": 5, "hasThickness": true }]"##;
    let configs = CardConfig::parse_list(json).unwrap();
    let mut card = loaded_card(0, &configs[0], &tuning);
    let mut scene = SceneGraph::new();
    card.attach_to_scene(&mut scene);
    // front + back + four edges
    assert_eq!(scene.drawables().len(), 6);
}

#[test]
fn thick_card_with_image_back_has_no_edges() {
    let tuning = Tuning::default();
    let mut config = CardConfig::simple(3.0, 3.0, "f.png", BackConfig::Asset("b.png".into()));
    config.has_thickness = true;
    let mut card = loaded_card(0, &config, &tuning);
    let mut scene = SceneGraph::new();
    card.attach_to_scene(&mut scene);
    assert_eq!(scene.drawables().len(), 2);
}

#[test]
fn sync_scene_writes_current_transform() {
    let tuning = Tuning::default();
    let mut card = loaded_card(0, &simple_config(3.0, 3.0), &tuning);
    let mut scene = SceneGraph::new();
    let group = card.attach_to_scene(&mut scene);
    card.set_position(2.0, 0.0, 0.0);
    card.update();
    card.sync_scene(&mut scene);
    assert_eq!(scene.transform(group), Some(card.current()));
}
