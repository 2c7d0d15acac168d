use cards_core::{ScrollAxis, Tuning};

#[test]
fn drag_inside_bound_is_direct() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(2.0, 8.0);
    axis.drag(0.5, &t);
    axis.drag(-1.25, &t);
    assert!((axis.offset() + 0.75).abs() < 1e-6);
    assert!(!axis.is_overscrolled());
}

#[test]
fn drag_past_bound_is_resisted() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    axis.drag(1.5, &t);
    assert!(axis.is_overscrolled());
    axis.drag(1.0, &t);
    let expected = 1.5 + 1.0 * t.overscroll_resistance;
    assert!((axis.offset() - expected).abs() < 1e-6);
}

#[test]
fn offset_never_exceeds_hard_limit() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    for i in 0..500 {
        let delta = if i % 7 == 0 { -3.0 } else { 5.0 };
        axis.drag(delta, &t);
        assert!(axis.offset().abs() <= 4.0 + 1e-6);
        axis.release(200.0, &t);
        axis.step(&t, i % 2 == 0);
        assert!(axis.offset().abs() <= 4.0 + 1e-6);
    }
}

#[test]
fn limit_is_never_below_bound() {
    let axis = ScrollAxis::new(3.0, 1.0);
    assert_eq!(axis.limit(), 3.0);
}

#[test]
fn release_while_overscrolled_is_ignored() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    axis.drag(2.0, &t);
    axis.release(40.0, &t);
    assert_eq!(axis.momentum(), 0.0);
}

#[test]
fn momentum_coasts_and_decays_to_rest() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(100.0, 400.0);
    axis.release(30.0, &t);
    axis.step(&t, false);
    assert!((axis.offset() - 30.0 * t.swipe_to_world).abs() < 1e-5);
    assert!((axis.momentum() - 30.0 * t.momentum_friction).abs() < 1e-4);

    let mut prev = axis.offset();
    for _ in 0..400 {
        axis.step(&t, false);
        assert!(axis.offset() >= prev);
        prev = axis.offset();
    }
    assert_eq!(axis.momentum(), 0.0);
    // Geometric coast: total travel is bounded by v * k / (1 - friction).
    let max_travel = 30.0 * t.swipe_to_world / (1.0 - t.momentum_friction);
    assert!(axis.offset() <= max_travel + 1e-4);
}

#[test]
fn hitting_the_bound_kills_momentum_in_one_tick() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    axis.drag(0.9, &t);
    axis.release(30.0, &t);
    assert!(axis.momentum() > 0.0);
    axis.step(&t, false);
    assert_eq!(axis.momentum(), 0.0);
    assert!(axis.offset() > 1.0);
}

#[test]
fn overscroll_springs_back_to_bound() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    axis.drag(1.5, &t);
    let mut prev = axis.offset();
    for _ in 0..300 {
        axis.step(&t, false);
        assert!(axis.offset() <= prev);
        assert!(axis.offset() >= 1.0);
        prev = axis.offset();
    }
    assert_eq!(axis.offset(), 1.0);
}

#[test]
fn dragging_holds_overscroll() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(1.0, 4.0);
    axis.drag(-1.5, &t);
    for _ in 0..20 {
        axis.step(&t, true);
    }
    assert!((axis.offset() + 1.5).abs() < 1e-6);
}

#[test]
fn reset_clears_offset_and_momentum() {
    let t = Tuning::default();
    let mut axis = ScrollAxis::new(5.0, 20.0);
    axis.drag(2.0, &t);
    axis.release(10.0, &t);
    axis.reset();
    assert_eq!(axis.offset(), 0.0);
    assert_eq!(axis.momentum(), 0.0);
}

#[test]
fn bounce_spring_combines_base_and_snap_strength() {
    let mut t = Tuning::default();
    assert!((t.bounce_spring() - 0.1).abs() < 1e-6);
    t.bounce_snap_strength = 50.0;
    assert_eq!(t.bounce_spring(), 1.0);
}
