//! Pointer and touch gesture recognition.
//!
//! Raw pointer input is classified into hover, swipe, pinch and tap. The
//! controller keeps pinch zoom smoothing and release velocity itself; what a
//! swipe or a momentum hand-off means is left to whichever view is active.

use crate::camera::Viewport;
use crate::config::Tuning;
use crate::constants::PINCH_NEUTRAL_EPSILON;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: i32,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub fn new(id: i32, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }

    fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

pub type Touches = SmallVec<[TouchPoint; 4]>;

/// Raw input in screen pixels (origin top-left).
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    MouseMove { x: f32, y: f32 },
    MouseClick { x: f32, y: f32 },
    TouchStart { touches: Touches },
    TouchMove { touches: Touches },
    /// `touches` are the contacts still down, `changed` the ones lifted.
    TouchEnd { touches: Touches, changed: Touches },
    /// The platform took the contacts away; never a tap or a fling.
    TouchCancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureAction {
    /// Normalized pointer position, −1..1 per axis, y up.
    Hover { nx: f32, ny: f32 },
    /// Horizontal finger travel since the previous sample, pixels.
    Swipe { dx: f32 },
    /// Release velocity of a swipe, pixels per frame.
    Momentum { velocity: f32 },
    /// Click or tap at screen coordinates.
    Click { x: f32, y: f32 },
}

pub type GestureActions = SmallVec<[GestureAction; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct GestureState {
    pub pointer: Vec2,
    pub last_touch: Option<Vec2>,
    pub touch_start: Option<(Vec2, f64)>,
    pub max_travel: f32,
    pub velocity: f32,
    pub swiping: bool,
    pub pinching: bool,
    pub pinch_start_distance: Option<f32>,
    pub pinch_zoom: f32,
    pub pinch_zoom_target: f32,
    pub pinch_center: Vec2,
    pub touching: bool,
    /// An unsupported contact count joined this session.
    pub rejected: bool,
}

impl Default for GestureState {
    fn default() -> Self {
        Self {
            pointer: Vec2::ZERO,
            last_touch: None,
            touch_start: None,
            max_travel: 0.0,
            velocity: 0.0,
            swiping: false,
            pinching: false,
            pinch_start_distance: None,
            pinch_zoom: 1.0,
            pinch_zoom_target: 1.0,
            pinch_center: Vec2::ZERO,
            touching: false,
            rejected: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GestureController {
    state: GestureState,
    pinch_min: f32,
    pinch_max: f32,
    tap_max_ms: f64,
    tap_max_distance_px: f32,
}

impl GestureController {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            state: GestureState::default(),
            pinch_min: tuning.pinch_min,
            pinch_max: tuning.pinch_max,
            tap_max_ms: tuning.tap_max_ms,
            tap_max_distance_px: tuning.tap_max_distance_px,
        }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn pointer(&self) -> Vec2 {
        self.state.pointer
    }

    pub fn is_pinching(&self) -> bool {
        self.state.pinching
    }

    /// A finger is down (drags suppress elastic bounce-back).
    pub fn is_touching(&self) -> bool {
        self.state.touching
    }

    pub fn pinch_zoom(&self) -> f32 {
        self.state.pinch_zoom
    }

    pub fn pinch_center(&self) -> Vec2 {
        self.state.pinch_center
    }

    pub fn zoom_active(&self) -> bool {
        (self.state.pinch_zoom - 1.0).abs() > PINCH_NEUTRAL_EPSILON
    }

    /// Move the smoothed zoom toward its target; settles exactly on neutral.
    pub fn step_pinch(&mut self, rate: f32) {
        let s = &mut self.state;
        s.pinch_zoom += (s.pinch_zoom_target - s.pinch_zoom) * rate.clamp(0.0, 1.0);
        if (s.pinch_zoom_target - s.pinch_zoom).abs() < PINCH_NEUTRAL_EPSILON {
            s.pinch_zoom = s.pinch_zoom_target;
        }
    }

    pub fn handle(&mut self, input: &PointerInput, viewport: &Viewport, now_ms: f64) -> GestureActions {
        let mut out = GestureActions::new();
        match input {
            PointerInput::MouseMove { x, y } => {
                self.state.pointer = viewport.to_ndc(*x, *y);
                out.push(hover(self.state.pointer));
            }
            PointerInput::MouseClick { x, y } => {
                out.push(GestureAction::Click { x: *x, y: *y });
            }
            PointerInput::TouchStart { touches } => self.touch_start(touches, viewport, now_ms, &mut out),
            PointerInput::TouchMove { touches } => self.touch_move(touches, viewport, &mut out),
            PointerInput::TouchEnd { touches, changed } => {
                self.touch_end(touches, changed, now_ms, &mut out)
            }
            PointerInput::TouchCancel => {
                log::debug!("[gesture] touch cancelled");
                self.release();
                out.push(hover(Vec2::ZERO));
            }
        }
        out
    }

    fn touch_start(&mut self, touches: &Touches, viewport: &Viewport, now_ms: f64, out: &mut GestureActions) {
        let s = &mut self.state;
        s.touching = true;
        match touches.len() {
            1 if !s.pinching && !s.rejected => {
                let p = touches[0].pos();
                s.touch_start = Some((p, now_ms));
                s.last_touch = Some(p);
                s.max_travel = 0.0;
                s.velocity = 0.0;
                s.swiping = false;
                s.pointer = viewport.to_ndc(p.x, p.y);
                out.push(hover(s.pointer));
            }
            2 => {
                s.pinching = true;
                let d = touches[0].pos().distance(touches[1].pos());
                s.pinch_start_distance = Some(rebase_pinch(d, s.pinch_zoom_target));
                s.pinch_center = midpoint_ndc(&touches[0], &touches[1], viewport);
            }
            0 | 1 => {}
            _ => reject(s),
        }
    }

    fn touch_move(&mut self, touches: &Touches, viewport: &Viewport, out: &mut GestureActions) {
        let (pinch_min, pinch_max) = (self.pinch_min, self.pinch_max);
        let s = &mut self.state;
        match touches.len() {
            2 => {
                s.pinching = true;
                let d = touches[0].pos().distance(touches[1].pos());
                match s.pinch_start_distance {
                    Some(d0) if d0 > f32::EPSILON => {
                        s.pinch_zoom_target = (d / d0).clamp(pinch_min, pinch_max);
                    }
                    _ => s.pinch_start_distance = Some(rebase_pinch(d, s.pinch_zoom_target)),
                }
                s.pinch_center = midpoint_ndc(&touches[0], &touches[1], viewport);
            }
            1 if !s.pinching && !s.rejected => {
                let p = touches[0].pos();
                let last = s.last_touch.unwrap_or(p);
                let dx = p.x - last.x;
                s.last_touch = Some(p);
                if let Some((start, _)) = s.touch_start {
                    s.max_travel = s.max_travel.max(start.distance(p));
                }
                s.velocity = dx;
                if dx != 0.0 {
                    s.swiping = true;
                }
                s.pointer = viewport.to_ndc(p.x, p.y);
                out.push(hover(s.pointer));
                out.push(GestureAction::Swipe { dx });
            }
            0 | 1 => {}
            _ => reject(s),
        }
    }

    fn touch_end(&mut self, touches: &Touches, changed: &Touches, now_ms: f64, out: &mut GestureActions) {
        if !touches.is_empty() {
            // A finger lifted out of a pinch; keep single-touch suppressed
            // until every contact is gone.
            if self.state.pinching {
                self.state.pinch_start_distance = None;
            }
            return;
        }
        let s = &self.state;
        let release = changed
            .first()
            .map(TouchPoint::pos)
            .or(s.last_touch)
            .unwrap_or(Vec2::ZERO);
        if !s.pinching && !s.rejected {
            let tap = s.touch_start.is_some_and(|(start, t0)| {
                now_ms - t0 < self.tap_max_ms
                    && s.max_travel.max(start.distance(release)) < self.tap_max_distance_px
            });
            if tap {
                log::debug!("[gesture] tap at ({:.0},{:.0})", release.x, release.y);
                out.push(GestureAction::Click {
                    x: release.x,
                    y: release.y,
                });
            } else if s.swiping {
                out.push(GestureAction::Momentum {
                    velocity: s.velocity,
                });
            }
        }
        self.release();
        out.push(hover(Vec2::ZERO));
    }

    fn release(&mut self) {
        let zoom = self.state.pinch_zoom;
        self.state = GestureState {
            pinch_zoom: zoom,
            ..GestureState::default()
        };
    }
}

/// Three or more contacts: the session can no longer end in a tap or a fling.
fn reject(s: &mut GestureState) {
    if !s.rejected {
        log::debug!("[gesture] ignoring multi-finger touch");
    }
    s.rejected = true;
    s.touch_start = None;
    s.swiping = false;
}

/// Baseline distance that keeps the current zoom target when a new finger
/// pair lands mid-pinch.
fn rebase_pinch(distance: f32, zoom_target: f32) -> f32 {
    if zoom_target > f32::EPSILON {
        distance / zoom_target
    } else {
        distance
    }
}

#[inline]
fn hover(p: Vec2) -> GestureAction {
    GestureAction::Hover { nx: p.x, ny: p.y }
}

fn midpoint_ndc(a: &TouchPoint, b: &TouchPoint, viewport: &Viewport) -> Vec2 {
    let m = (a.pos() + b.pos()) * 0.5;
    viewport.to_ndc(m.x, m.y)
}
