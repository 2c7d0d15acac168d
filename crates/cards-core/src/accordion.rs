//! Fold state of a multi-face card.
//!
//! Faces blend between a z-folded stack (closed) and an edge-to-edge fan
//! (open). `fold_progress` runs 0 (folded) → 1 (unfolded) and is eased with
//! a smoothstep before it is applied to face placement.

use crate::config::Tuning;
use crate::smoothing::{lerp_angle, smoothstep, TransformTarget};
use glam::Vec3;
use std::f32::consts::PI;

/// Placement of face `i` when folded: alternating front/back orientation,
/// earlier faces slightly nearer so paint order survives the fold.
pub fn closed_layout(i: usize, face_count: usize, depth_step: f32) -> TransformTarget {
    TransformTarget {
        position: Vec3::new(0.0, 0.0, face_count.saturating_sub(i) as f32 * depth_step),
        rotation_x: 0.0,
        rotation_y: if i % 2 == 0 { 0.0 } else { PI },
        scale: 1.0,
    }
}

/// Placement of face `i` when unfolded: centred fan, faces edge to edge
/// along x with an alternating small tilt.
pub fn open_layout(i: usize, face_count: usize, face_width: f32, fan_tilt: f32) -> TransformTarget {
    let center = (face_count as f32 - 1.0) / 2.0;
    TransformTarget {
        position: Vec3::new((i as f32 - center) * face_width, 0.0, 0.0),
        rotation_x: 0.0,
        rotation_y: if i % 2 == 0 { fan_tilt } else { -fan_tilt },
        scale: 1.0,
    }
}

#[derive(Clone, Debug)]
pub struct Accordion {
    face_count: usize,
    face_width: f32,
    is_open: bool,
    is_animating: bool,
    fold_progress: f32,
    faces: Vec<TransformTarget>,
    depth_step: f32,
    fan_tilt: f32,
}

impl Accordion {
    pub fn new(face_count: usize, face_width: f32, tuning: &Tuning) -> Self {
        let face_count = face_count.max(1);
        let mut acc = Self {
            face_count,
            face_width,
            is_open: false,
            is_animating: false,
            fold_progress: 0.0,
            faces: vec![TransformTarget::default(); face_count],
            depth_step: tuning.fold_depth_step,
            fan_tilt: tuning.fan_tilt,
        };
        acc.layout();
        acc
    }

    pub fn face_count(&self) -> usize {
        self.face_count
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_animating(&self) -> bool {
        self.is_animating
    }

    pub fn fold_progress(&self) -> f32 {
        self.fold_progress
    }

    pub fn face_transforms(&self) -> &[TransformTarget] {
        &self.faces
    }

    /// Half the width spanned by face centres when fully unfolded.
    pub fn fan_half_width(&self) -> f32 {
        (self.face_count as f32 - 1.0) * self.face_width / 2.0
    }

    pub fn face_width(&self) -> f32 {
        self.face_width
    }

    /// Returns false when already open.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        self.is_animating = true;
        true
    }

    /// Returns false when already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        self.is_animating = true;
        true
    }

    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Advance the fold one frame and re-place every face.
    pub fn step(&mut self, rate: f32, epsilon: f32) {
        if !self.is_animating {
            return;
        }
        let target = if self.is_open { 1.0 } else { 0.0 };
        self.fold_progress += (target - self.fold_progress) * rate.clamp(f32::MIN_POSITIVE, 1.0);
        if (target - self.fold_progress).abs() < epsilon {
            self.fold_progress = target;
            self.is_animating = false;
        }
        self.layout();
    }

    fn layout(&mut self) {
        let eased = smoothstep(self.fold_progress);
        for (i, face) in self.faces.iter_mut().enumerate() {
            let closed = closed_layout(i, self.face_count, self.depth_step);
            let open = open_layout(i, self.face_count, self.face_width, self.fan_tilt);
            *face = TransformTarget {
                position: closed.position.lerp(open.position, eased),
                rotation_x: lerp_angle(closed.rotation_x, open.rotation_x, eased),
                rotation_y: lerp_angle(closed.rotation_y, open.rotation_y, eased),
                scale: 1.0,
            };
        }
    }
}
