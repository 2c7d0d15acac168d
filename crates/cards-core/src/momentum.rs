//! One-dimensional scroll physics: direct drag, coasting momentum with
//! friction, and an elastic pull back inside `[-bound, bound]`.

use crate::config::Tuning;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollAxis {
    offset: f32,
    /// Screen pixels per frame.
    momentum: f32,
    bound: f32,
    limit: f32,
}

impl ScrollAxis {
    /// `limit` is the hard clamp for elastic overscroll; never below `bound`.
    pub fn new(bound: f32, limit: f32) -> Self {
        let bound = bound.max(0.0);
        Self {
            offset: 0.0,
            momentum: 0.0,
            bound,
            limit: limit.max(bound),
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn momentum(&self) -> f32 {
        self.momentum
    }

    pub fn bound(&self) -> f32 {
        self.bound
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn is_overscrolled(&self) -> bool {
        self.offset.abs() > self.bound
    }

    pub fn reset(&mut self) {
        self.offset = 0.0;
        self.momentum = 0.0;
    }

    /// Finger drag by `delta` world units. Any coast in flight stops; past the
    /// bound the drag is resisted.
    pub fn drag(&mut self, delta: f32, tuning: &Tuning) {
        self.momentum = 0.0;
        let delta = if self.is_overscrolled() {
            delta * tuning.overscroll_resistance
        } else {
            delta
        };
        self.offset = (self.offset + delta).clamp(-self.limit, self.limit);
    }

    /// Hand over the release velocity (pixels per frame). Ignored while
    /// overscrolled.
    pub fn release(&mut self, velocity: f32, tuning: &Tuning) {
        if self.is_overscrolled() || !velocity.is_finite() {
            self.momentum = 0.0;
            return;
        }
        self.momentum = if velocity.abs() < tuning.momentum_epsilon {
            0.0
        } else {
            velocity
        };
    }

    /// One frame of coasting and bounce-back.
    pub fn step(&mut self, tuning: &Tuning, dragging: bool) {
        if self.momentum != 0.0 {
            self.offset += self.momentum * tuning.swipe_to_world;
            self.momentum *= tuning.momentum_friction;
            if self.momentum.abs() < tuning.momentum_epsilon {
                self.momentum = 0.0;
            }
        }
        if self.is_overscrolled() {
            // No bounce-through: contact with the bound kills the coast.
            self.momentum = 0.0;
            if !dragging {
                let edge = self.offset.clamp(-self.bound, self.bound);
                self.offset += (edge - self.offset) * tuning.bounce_spring();
                if (edge - self.offset).abs() < 1e-4 {
                    self.offset = edge;
                }
            }
        }
        self.offset = self.offset.clamp(-self.limit, self.limit);
    }
}
