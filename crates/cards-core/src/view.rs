//! Presentation modes and the transitions between them.
//!
//! ```text
//! Stack  --card-->      Spread
//! Spread --card i-->    Focus(i)
//! Spread --blank-->     Stack
//! Focus  --blank-->     Spread
//! Focus  --card i==sel-> Focus (flip / accordion toggle)
//! ```
//!
//! Each variant keeps its own interpolation state. The app applies a
//! returned [`Transition`] by calling `exit` on the old view and `enter` for
//! the new one within the same call.

use crate::camera::Camera;
use crate::card::Card;
use crate::config::Tuning;
use crate::momentum::ScrollAxis;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// What a view may touch while it runs.
pub struct ViewContext<'a> {
    pub cards: &'a mut [Card],
    pub tuning: &'a Tuning,
    pub camera: &'a Camera,
    /// Normalized pointer, −1..1.
    pub pointer: Vec2,
    /// A finger is on the glass.
    pub dragging: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Stack,
    Spread,
    Focus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewRequest {
    Stack,
    Spread,
    Focus { selected: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Stay,
    To(ViewRequest),
}

#[derive(Clone, Debug)]
pub enum View {
    Stack(StackView),
    Spread(SpreadView),
    Focus(FocusView),
}

impl Default for View {
    fn default() -> Self {
        View::Stack(StackView)
    }
}

impl View {
    pub fn enter(request: ViewRequest, ctx: &mut ViewContext) -> View {
        match request {
            ViewRequest::Stack => View::Stack(StackView::enter(ctx)),
            ViewRequest::Spread => View::Spread(SpreadView::enter(ctx)),
            ViewRequest::Focus { selected } => View::Focus(FocusView::enter(selected, ctx)),
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::Stack(_) => ViewKind::Stack,
            View::Spread(_) => ViewKind::Spread,
            View::Focus(_) => ViewKind::Focus,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        match self {
            View::Focus(f) => Some(f.selected),
            _ => None,
        }
    }

    pub fn exit(&mut self, ctx: &mut ViewContext) {
        match self {
            View::Stack(_) => {}
            View::Spread(v) => v.exit(),
            View::Focus(v) => v.exit(ctx),
        }
        log::debug!("[view] exit {:?}", self.kind());
    }

    pub fn update(&mut self, ctx: &mut ViewContext, dt_sec: f32) {
        match self {
            View::Stack(v) => v.update(ctx),
            View::Spread(v) => v.update(ctx, dt_sec),
            View::Focus(v) => v.update(ctx),
        }
    }

    pub fn on_card_click(&mut self, ctx: &mut ViewContext, index: usize) -> Transition {
        match self {
            View::Stack(_) => Transition::To(ViewRequest::Spread),
            View::Spread(_) => Transition::To(ViewRequest::Focus { selected: index }),
            View::Focus(v) => {
                v.on_card_click(ctx, index);
                Transition::Stay
            }
        }
    }

    pub fn on_blank_click(&mut self, _ctx: &mut ViewContext) -> Transition {
        match self {
            View::Stack(_) => Transition::Stay,
            View::Spread(_) => Transition::To(ViewRequest::Stack),
            View::Focus(_) => Transition::To(ViewRequest::Spread),
        }
    }

    /// Horizontal finger travel in pixels. Views without scrolling ignore it.
    pub fn on_swipe(&mut self, ctx: &mut ViewContext, dx: f32) {
        match self {
            View::Stack(_) => {}
            View::Spread(v) => v.scroll.drag(dx * ctx.tuning.swipe_to_world, ctx.tuning),
            View::Focus(v) => v.on_swipe(ctx, dx),
        }
    }

    /// Release velocity in pixels per frame. Views without scrolling ignore it.
    pub fn on_momentum(&mut self, ctx: &mut ViewContext, velocity: f32) {
        match self {
            View::Stack(_) => {}
            View::Spread(v) => v.scroll.release(velocity, ctx.tuning),
            View::Focus(v) => v.on_momentum(ctx, velocity),
        }
    }
}

/// All cards piled at the origin, card 0 nearest, tilting together.
#[derive(Clone, Copy, Debug, Default)]
pub struct StackView;

impl StackView {
    fn enter(ctx: &mut ViewContext) -> Self {
        log::info!("[view] enter stack");
        let n = ctx.cards.len();
        let spacing = ctx.tuning.stack_depth_spacing;
        for (i, card) in ctx.cards.iter_mut().enumerate() {
            card.set_position(0.0, 0.0, (n - 1 - i) as f32 * spacing);
            card.set_scale(1.0);
        }
        StackView
    }

    fn update(&mut self, ctx: &mut ViewContext) {
        for card in ctx.cards.iter_mut() {
            card.set_hover_tilt(ctx.pointer.x, ctx.pointer.y);
        }
    }
}

/// Cards in a row, swipeable, bobbing gently.
#[derive(Clone, Debug)]
pub struct SpreadView {
    scroll: ScrollAxis,
    elapsed: f32,
}

impl SpreadView {
    fn enter(ctx: &mut ViewContext) -> Self {
        log::info!("[view] enter spread");
        let t = ctx.tuning;
        let n = ctx.cards.len();
        let bound = spread_bound(n, t.spread_spacing);
        for card in ctx.cards.iter_mut() {
            card.reset_to_front();
            card.set_scale(t.spread_scale);
            card.set_tilt(0.0, 0.0);
        }
        let mut view = SpreadView {
            scroll: ScrollAxis::new(bound, bound * t.overscroll_limit_multiple),
            elapsed: 0.0,
        };
        view.place(ctx);
        view
    }

    pub fn scroll(&self) -> &ScrollAxis {
        &self.scroll
    }

    fn exit(&mut self) {
        self.scroll.reset();
    }

    fn place(&self, ctx: &mut ViewContext) {
        let t = ctx.tuning;
        let n = ctx.cards.len();
        let start_x = -spread_bound(n, t.spread_spacing);
        for (i, card) in ctx.cards.iter_mut().enumerate() {
            let phase = self.elapsed * t.bob_frequency + i as f32 * t.bob_phase_step;
            card.set_position(
                start_x + i as f32 * t.spread_spacing + self.scroll.offset(),
                phase.sin() * t.bob_amplitude,
                (n - 1 - i) as f32 * t.spread_depth_step,
            );
            if self.elapsed > 0.0 {
                card.set_tilt(
                    (phase + FRAC_PI_2).sin() * t.bob_tilt,
                    phase.sin() * t.bob_tilt * 0.5,
                );
            }
        }
    }

    fn update(&mut self, ctx: &mut ViewContext, dt_sec: f32) {
        self.scroll.step(ctx.tuning, ctx.dragging);
        self.elapsed += dt_sec.max(0.0);
        self.place(ctx);
    }
}

/// Half-width of an evenly spaced row of `n` cards.
pub fn spread_bound(n: usize, spacing: f32) -> f32 {
    n.saturating_sub(1) as f32 * spacing / 2.0
}

/// Scale at which a `width`×`height` card at depth `z` fills `fill` of the
/// viewport along its limiting dimension.
pub fn focus_fill_scale(camera: &Camera, width: f32, height: f32, z: f32, fill: f32) -> f32 {
    let visible = camera.visible_size_at(z);
    let for_width = fill * visible.x / width.max(f32::EPSILON);
    let for_height = fill * visible.y / height.max(f32::EPSILON);
    for_width.min(for_height)
}

/// One card centred and enlarged; the rest parked below the screen.
#[derive(Clone, Debug)]
pub struct FocusView {
    selected: usize,
    fill_scale: f32,
    face_scroll: ScrollAxis,
}

impl FocusView {
    fn enter(selected: usize, ctx: &mut ViewContext) -> Self {
        log::info!("[view] enter focus, selected={}", selected);
        let t = ctx.tuning;
        let mut fill_scale = 1.0;
        let mut face_scroll = ScrollAxis::default();
        let mut parked = 0usize;
        for (i, card) in ctx.cards.iter_mut().enumerate() {
            if i == selected {
                fill_scale =
                    focus_fill_scale(ctx.camera, card.width(), card.height(), t.focus_depth, t.focus_fill);
                card.set_position(0.0, 0.0, t.focus_depth);
                card.set_scale(fill_scale);
                if let Some(acc) = card.accordion() {
                    let bound = acc.fan_half_width() * fill_scale;
                    let buffer = t.overscroll_buffer_fraction * acc.face_width() * fill_scale;
                    face_scroll = ScrollAxis::new(bound, bound + buffer);
                }
            } else {
                card.set_position(0.0, t.parked_y, t.parked_z + parked as f32 * t.parked_depth_step);
                card.set_scale(t.parked_scale);
                card.set_tilt(0.0, 0.0);
                parked += 1;
            }
        }
        FocusView {
            selected,
            fill_scale,
            face_scroll,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn fill_scale(&self) -> f32 {
        self.fill_scale
    }

    pub fn face_scroll(&self) -> &ScrollAxis {
        &self.face_scroll
    }

    fn browsing_faces(&self, ctx: &ViewContext) -> bool {
        ctx.cards
            .get(self.selected)
            .is_some_and(|c| c.is_accordion_open())
    }

    fn exit(&mut self, _ctx: &mut ViewContext) {
        self.face_scroll.reset();
    }

    fn update(&mut self, ctx: &mut ViewContext) {
        let browsing = self.browsing_faces(ctx);
        if browsing {
            self.face_scroll.step(ctx.tuning, ctx.dragging);
        } else {
            self.face_scroll.reset();
        }
        let depth = ctx.tuning.focus_depth;
        for (i, card) in ctx.cards.iter_mut().enumerate() {
            if i != self.selected {
                card.set_tilt(0.0, 0.0);
            } else if browsing {
                card.set_tilt(0.0, 0.0);
                card.set_position(self.face_scroll.offset(), 0.0, depth);
            } else {
                card.set_hover_tilt(ctx.pointer.x, ctx.pointer.y);
                card.set_position(0.0, 0.0, depth);
            }
        }
    }

    fn on_card_click(&mut self, ctx: &mut ViewContext, index: usize) {
        if index != self.selected {
            return;
        }
        let Some(card) = ctx.cards.get_mut(index) else {
            return;
        };
        if card.is_accordion() {
            card.toggle_accordion();
            if !card.is_accordion_open() {
                self.face_scroll.reset();
            }
            log::info!("[focus] accordion {} open={}", index, card.is_accordion_open());
        } else {
            card.flip();
            log::info!("[focus] flip {} front={}", index, card.is_front_facing());
        }
    }

    fn on_swipe(&mut self, ctx: &mut ViewContext, dx: f32) {
        if self.browsing_faces(ctx) {
            self.face_scroll.drag(dx * ctx.tuning.swipe_to_world, ctx.tuning);
        }
    }

    fn on_momentum(&mut self, ctx: &mut ViewContext, velocity: f32) {
        if self.browsing_faces(ctx) {
            self.face_scroll.release(velocity, ctx.tuning);
        }
    }
}
