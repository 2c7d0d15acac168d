mod common;

use cards_core::view::{focus_fill_scale, spread_bound, ViewContext};
use cards_core::{Camera, Card, ScrollAxis, Transition, Tuning, View, ViewKind, ViewRequest};
use common::*;
use glam::Vec2;

fn deck(tuning: &Tuning, n: usize) -> Vec<Card> {
    (0..n)
        .map(|i| loaded_card(i, &simple_config(3.0, 3.0), tuning))
        .collect()
}

fn ctx<'a>(cards: &'a mut [Card], tuning: &'a Tuning, camera: &'a Camera) -> ViewContext<'a> {
    ViewContext {
        cards,
        tuning,
        camera,
        pointer: Vec2::ZERO,
        dragging: false,
    }
}

#[test]
fn stack_piles_cards_with_card_zero_nearest() {
    let app = app_with(&[simple_config(3.0, 3.0), simple_config(3.0, 3.0), simple_config(3.0, 3.0)]);
    assert_eq!(app.view_kind(), ViewKind::Stack);
    let spacing = app.tuning().stack_depth_spacing;
    for (i, card) in app.cards().iter().enumerate() {
        let t = card.target();
        assert_eq!(t.position.x, 0.0);
        assert_eq!(t.position.y, 0.0);
        assert!((t.position.z - (2 - i) as f32 * spacing).abs() < 1e-6);
        assert_eq!(t.scale, 1.0);
    }
}

#[test]
fn stack_tilts_every_card_toward_pointer() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 2);
    let mut c = ctx(&mut cards, &tuning, &camera);
    c.pointer = Vec2::new(1.0, -1.0);
    let mut view = View::enter(ViewRequest::Stack, &mut c);
    view.update(&mut c, FRAME_DT);
    for card in c.cards.iter() {
        assert!((card.target().rotation_y - tuning.hover_tilt_factor).abs() < 1e-6);
        assert!((card.target().rotation_x + tuning.hover_tilt_factor).abs() < 1e-6);
    }
}

#[test]
fn spread_lays_cards_out_in_a_centred_row() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 3);
    let mut c = ctx(&mut cards, &tuning, &camera);
    let view = View::enter(ViewRequest::Spread, &mut c);
    assert_eq!(view.kind(), ViewKind::Spread);
    let xs: Vec<f32> = c.cards.iter().map(|card| card.target().position.x).collect();
    assert!((xs[0] + 3.2).abs() < 1e-5);
    assert!(xs[1].abs() < 1e-5);
    assert!((xs[2] - 3.2).abs() < 1e-5);
    for (i, card) in c.cards.iter().enumerate() {
        assert_eq!(card.target().scale, tuning.spread_scale);
        assert!((card.target().position.z - (2 - i) as f32 * tuning.spread_depth_step).abs() < 1e-6);
    }
    assert!((spread_bound(3, tuning.spread_spacing) - 3.2).abs() < 1e-6);
}

#[test]
fn spread_bobs_in_place() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 2);
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Spread, &mut c);
    let x_before = c.cards[0].target().position.x;
    for _ in 0..30 {
        view.update(&mut c, FRAME_DT);
    }
    let t = c.cards[0].target();
    assert!((t.position.x - x_before).abs() < 1e-6);
    assert!(t.position.y.abs() <= tuning.bob_amplitude + 1e-6);
    assert!(t.position.y != 0.0);
}

#[test]
fn spread_swipe_scrolls_the_row() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 3);
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Spread, &mut c);
    c.dragging = true;
    view.on_swipe(&mut c, 50.0);
    view.update(&mut c, FRAME_DT);
    let shift = 50.0 * tuning.swipe_to_world;
    assert!((c.cards[1].target().position.x - shift).abs() < 1e-5);
}

#[test]
fn spread_entry_resets_flip_and_accordion() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = vec![
        loaded_card(0, &simple_config(3.0, 3.0), &tuning),
        loaded_card(1, &accordion_config(3), &tuning),
    ];
    cards[0].flip();
    cards[1].open_accordion();
    let mut c = ctx(&mut cards, &tuning, &camera);
    View::enter(ViewRequest::Spread, &mut c);
    assert!(c.cards[0].is_front_facing());
    assert!(!c.cards[1].is_accordion_open());
}

#[test]
fn focus_centres_selection_and_parks_the_rest() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 3);
    let mut c = ctx(&mut cards, &tuning, &camera);
    let view = View::enter(ViewRequest::Focus { selected: 1 }, &mut c);
    assert_eq!(view.selected(), Some(1));

    let fill = focus_fill_scale(&camera, 3.0, 3.0, tuning.focus_depth, tuning.focus_fill);
    let sel = c.cards[1].target();
    assert_eq!(sel.position, glam::Vec3::new(0.0, 0.0, tuning.focus_depth));
    assert!((sel.scale - fill).abs() < 1e-6);

    let p0 = c.cards[0].target();
    let p2 = c.cards[2].target();
    assert_eq!(p0.position.y, tuning.parked_y);
    assert_eq!(p0.scale, tuning.parked_scale);
    assert!((p0.position.z - tuning.parked_z).abs() < 1e-6);
    assert!((p2.position.z - (tuning.parked_z + tuning.parked_depth_step)).abs() < 1e-6);
}

#[test]
fn focus_fill_scale_uses_limiting_dimension() {
    let camera = Camera::default();
    let visible = camera.visible_size_at(5.0);
    // On a wide viewport a square card is limited by height.
    let s = focus_fill_scale(&camera, 3.0, 3.0, 5.0, 0.8);
    assert!((s - 0.8 * visible.y / 3.0).abs() < 1e-5);
    // A very wide card is limited by width.
    let s = focus_fill_scale(&camera, 30.0, 1.0, 5.0, 0.8);
    assert!((s - 0.8 * visible.x / 30.0).abs() < 1e-5);
}

#[test]
fn focus_click_on_selected_flips_and_ignores_others() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 2);
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Focus { selected: 0 }, &mut c);

    assert_eq!(view.on_card_click(&mut c, 1), Transition::Stay);
    assert!(c.cards[0].is_front_facing());
    assert!(c.cards[1].is_front_facing());

    assert_eq!(view.on_card_click(&mut c, 0), Transition::Stay);
    assert!(!c.cards[0].is_front_facing());
    assert_eq!(view.kind(), ViewKind::Focus);
}

#[test]
fn focus_click_toggles_accordion_instead_of_flipping() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = vec![loaded_card(0, &accordion_config(4), &tuning)];
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Focus { selected: 0 }, &mut c);
    view.on_card_click(&mut c, 0);
    assert!(c.cards[0].is_accordion_open());
    assert!(c.cards[0].is_front_facing());
    view.on_card_click(&mut c, 0);
    assert!(!c.cards[0].is_accordion_open());
}

#[test]
fn open_accordion_scrolls_faces_under_swipe() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = vec![loaded_card(0, &accordion_config(4), &tuning)];
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Focus { selected: 0 }, &mut c);

    // Folded: swipes do nothing.
    view.on_swipe(&mut c, -40.0);
    view.update(&mut c, FRAME_DT);
    assert_eq!(c.cards[0].target().position.x, 0.0);

    view.on_card_click(&mut c, 0);
    c.dragging = true;
    view.on_swipe(&mut c, -40.0);
    view.update(&mut c, FRAME_DT);
    let expected = -40.0 * tuning.swipe_to_world;
    assert!((c.cards[0].target().position.x - expected).abs() < 1e-5);

    // Closing recentres the card.
    view.on_card_click(&mut c, 0);
    view.update(&mut c, FRAME_DT);
    assert_eq!(c.cards[0].target().position.x, 0.0);
}

fn face_scroll(view: &View) -> ScrollAxis {
    match view {
        View::Focus(f) => *f.face_scroll(),
        other => panic!("not focused: {:?}", other.kind()),
    }
}

#[test]
fn open_accordion_coasts_then_springs_back_inside_the_fan() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = vec![loaded_card(0, &accordion_config(4), &tuning)];
    let mut c = ctx(&mut cards, &tuning, &camera);
    let mut view = View::enter(ViewRequest::Focus { selected: 0 }, &mut c);
    view.on_card_click(&mut c, 0);
    assert!(c.cards[0].is_accordion_open());

    let fill = match &view {
        View::Focus(f) => f.fill_scale(),
        other => panic!("not focused: {:?}", other.kind()),
    };
    let (fan_half_width, face_width) = {
        let acc = c.cards[0].accordion().unwrap();
        (acc.fan_half_width(), acc.face_width())
    };
    let axis = face_scroll(&view);
    let (bound, limit) = (axis.bound(), axis.limit());
    assert!((bound - fan_half_width * fill).abs() < 1e-5);
    let buffer = tuning.overscroll_buffer_fraction * face_width * fill;
    assert!((limit - (bound + buffer)).abs() < 1e-5);

    // A gentle fling travels about half the bound and comes to rest.
    let velocity = -0.5 * bound * (1.0 - tuning.momentum_friction) / tuning.swipe_to_world;
    view.on_momentum(&mut c, velocity);
    let mut prev = 0.0;
    for _ in 0..400 {
        view.update(&mut c, FRAME_DT);
        let offset = face_scroll(&view).offset();
        assert!(offset <= prev);
        assert!(offset >= -bound);
        prev = offset;
    }
    assert!(prev < -0.4 * bound);
    assert_eq!(face_scroll(&view).momentum(), 0.0);
    assert!((c.cards[0].target().position.x - prev).abs() < 1e-6);

    // Dragging far past the last face is resisted and stops at bound + buffer.
    c.dragging = true;
    for _ in 0..60 {
        view.on_swipe(&mut c, -200.0);
        view.update(&mut c, FRAME_DT);
        assert!(face_scroll(&view).offset() >= -limit - 1e-5);
    }
    assert!((face_scroll(&view).offset() + limit).abs() < 1e-4);

    // On release a fling is refused and the offset eases back to the bound
    // without passing it.
    c.dragging = false;
    view.on_momentum(&mut c, -30.0);
    assert_eq!(face_scroll(&view).momentum(), 0.0);
    let mut prev = face_scroll(&view).offset();
    for _ in 0..300 {
        view.update(&mut c, FRAME_DT);
        let offset = face_scroll(&view).offset();
        assert!(offset >= prev);
        assert!(offset <= -bound + 1e-6);
        prev = offset;
    }
    assert!((prev + bound).abs() < 1e-4);
    assert!((c.cards[0].target().position.x + bound).abs() < 1e-4);
}

#[test]
fn blank_clicks_walk_back_up_the_views() {
    let tuning = Tuning::default();
    let camera = Camera::default();
    let mut cards = deck(&tuning, 2);
    let mut c = ctx(&mut cards, &tuning, &camera);

    let mut stack = View::enter(ViewRequest::Stack, &mut c);
    assert_eq!(stack.on_blank_click(&mut c), Transition::Stay);
    assert_eq!(stack.on_card_click(&mut c, 1), Transition::To(ViewRequest::Spread));

    let mut spread = View::enter(ViewRequest::Spread, &mut c);
    assert_eq!(spread.on_blank_click(&mut c), Transition::To(ViewRequest::Stack));
    assert_eq!(
        spread.on_card_click(&mut c, 1),
        Transition::To(ViewRequest::Focus { selected: 1 })
    );

    let mut focus = View::enter(ViewRequest::Focus { selected: 1 }, &mut c);
    assert_eq!(focus.on_blank_click(&mut c), Transition::To(ViewRequest::Spread));
}

#[test]
fn focus_on_missing_card_falls_back_to_spread() {
    let mut app = app_with(&[simple_config(3.0, 3.0)]);
    app.set_view(ViewRequest::Focus { selected: 5 });
    assert_eq!(app.view_kind(), ViewKind::Spread);
    assert_eq!(app.selected(), None);
}

#[test]
fn focus_blank_returns_to_front_facing_spread() {
    let mut app = app_with(&[simple_config(3.0, 3.0), accordion_config(3)]);
    app.set_view(ViewRequest::Focus { selected: 0 });
    assert_eq!(app.selected(), Some(0));
    app.set_view(ViewRequest::Spread);
    app.set_view(ViewRequest::Focus { selected: 1 });
    run_frames(&mut app, 5);
    app.set_view(ViewRequest::Spread);
    assert!(app.cards().iter().all(|c| c.is_front_facing()));
    assert!(app.cards().iter().all(|c| !c.is_accordion_open()));
}
