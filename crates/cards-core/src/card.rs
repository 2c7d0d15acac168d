//! A flippable card: target transform, smoothed current transform, flip and
//! hover state, pinch offset and the optional accordion sub-state.

use crate::accordion::Accordion;
use crate::config::{CardConfig, Tuning};
use crate::constants::{CARD_THICKNESS, THIN_BACK_OFFSET};
use crate::scene::{BackMaterial, Material, NodeId, Quad, SceneGraph, TextureId};
use crate::smoothing::{approach, approach_vec3, TransformTarget};
use glam::{Vec2, Vec3};
use std::f32::consts::{FRAC_PI_2, PI};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceMaterial {
    pub front: TextureId,
    pub back: BackMaterial,
}

/// Card-local copy of the tuning values a card needs every frame.
#[derive(Clone, Copy, Debug)]
struct Motion {
    smoothing_rate: f32,
    flip_rate: f32,
    hover_tilt_factor: f32,
    pinch_pan: f32,
    fold_rate: f32,
    fold_epsilon: f32,
}

#[derive(Clone, Debug)]
pub struct Card {
    index: usize,
    width: f32,
    height: f32,
    has_thickness: bool,
    edge_color: Option<[f32; 3]>,

    current: TransformTarget,
    target: TransformTarget,

    is_front_facing: bool,
    flip_phase: f32,
    hover_rotation: Vec2,
    hover_target: Vec2,
    base_scale: f32,
    pinch_offset: Vec2,

    accordion: Option<Accordion>,
    materials: Vec<FaceMaterial>,
    is_loaded: bool,

    group: Option<NodeId>,
    face_nodes: Vec<NodeId>,
    motion: Motion,
}

impl Card {
    /// Unloaded card; `update` does nothing until `finish_loading`.
    pub fn new(index: usize, config: &CardConfig, tuning: &Tuning) -> Self {
        let accordion = config
            .is_accordion()
            .then(|| Accordion::new(config.faces().len(), config.width, tuning));
        Self {
            index,
            width: config.width,
            height: config.height,
            has_thickness: config.has_thickness,
            edge_color: config.edge_color,
            current: TransformTarget::default(),
            target: TransformTarget::default(),
            is_front_facing: true,
            flip_phase: 0.0,
            hover_rotation: Vec2::ZERO,
            hover_target: Vec2::ZERO,
            base_scale: 1.0,
            pinch_offset: Vec2::ZERO,
            accordion,
            materials: Vec::new(),
            is_loaded: false,
            group: None,
            face_nodes: Vec::new(),
            motion: Motion {
                smoothing_rate: tuning.smoothing_rate,
                flip_rate: tuning.flip_rate,
                hover_tilt_factor: tuning.hover_tilt_factor,
                pinch_pan: tuning.pinch_pan,
                fold_rate: tuning.fold_rate,
                fold_epsilon: tuning.fold_epsilon,
            },
        }
    }

    pub fn finish_loading(&mut self, materials: Vec<FaceMaterial>) {
        self.materials = materials;
        self.is_loaded = true;
    }

    pub fn index(&self) -> usize {
        self.index
    }
    pub fn width(&self) -> f32 {
        self.width
    }
    pub fn height(&self) -> f32 {
        self.height
    }
    pub fn is_loaded(&self) -> bool {
        self.is_loaded
    }
    pub fn is_front_facing(&self) -> bool {
        self.is_front_facing
    }
    pub fn flip_phase(&self) -> f32 {
        self.flip_phase
    }
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }
    pub fn pinch_offset(&self) -> Vec2 {
        self.pinch_offset
    }
    pub fn hover_rotation(&self) -> Vec2 {
        self.hover_rotation
    }
    pub fn current(&self) -> &TransformTarget {
        &self.current
    }
    pub fn target(&self) -> &TransformTarget {
        &self.target
    }
    pub fn accordion(&self) -> Option<&Accordion> {
        self.accordion.as_ref()
    }
    pub fn is_accordion(&self) -> bool {
        self.accordion.is_some()
    }
    pub fn is_accordion_open(&self) -> bool {
        self.accordion.as_ref().is_some_and(|a| a.is_open())
    }
    pub fn materials(&self) -> &[FaceMaterial] {
        &self.materials
    }
    pub fn group(&self) -> Option<NodeId> {
        self.group
    }

    pub fn set_position(&mut self, x: f32, y: f32, z: f32) {
        self.target.position = Vec3::new(x, y, z);
    }

    /// Also records the pre-pinch reference scale.
    pub fn set_scale(&mut self, s: f32) {
        self.base_scale = s;
        self.target.scale = s;
    }

    /// Tilt toward a normalized pointer position (−1..1 per axis).
    pub fn set_hover_tilt(&mut self, nx: f32, ny: f32) {
        let f = self.motion.hover_tilt_factor;
        self.set_tilt(ny * f, nx * f);
    }

    /// Raw tilt target in radians about x and y.
    pub fn set_tilt(&mut self, rx: f32, ry: f32) {
        self.hover_target = Vec2::new(rx, ry);
        self.sync_rotation_target();
    }

    pub fn flip(&mut self) {
        self.is_front_facing = !self.is_front_facing;
        self.sync_rotation_target();
    }

    fn sync_rotation_target(&mut self) {
        let flip = if self.is_front_facing { 0.0 } else { PI };
        self.target.rotation_x = self.hover_target.x;
        self.target.rotation_y = flip + self.hover_target.y;
    }

    /// Flip rotation target alone: 0 front-facing, π back-facing.
    pub fn flip_target(&self) -> f32 {
        if self.is_front_facing {
            0.0
        } else {
            PI
        }
    }

    pub fn apply_pinch_zoom(&mut self, multiplier: f32, center_x: f32, center_y: f32) {
        self.target.scale = self.base_scale * multiplier;
        self.pinch_offset = Vec2::new(center_x, center_y) * self.motion.pinch_pan * (multiplier - 1.0);
    }

    pub fn reset_pinch_offset(&mut self) {
        self.pinch_offset = Vec2::ZERO;
        self.target.scale = self.base_scale;
    }

    /// No-op when already open or not an accordion card.
    pub fn open_accordion(&mut self) -> bool {
        self.accordion.as_mut().is_some_and(|a| a.open())
    }

    pub fn close_accordion(&mut self) -> bool {
        self.accordion.as_mut().is_some_and(|a| a.close())
    }

    pub fn toggle_accordion(&mut self) {
        if let Some(a) = self.accordion.as_mut() {
            a.toggle();
        }
    }

    /// Canonical presentation: front-facing, accordion folded.
    pub fn reset_to_front(&mut self) {
        if !self.is_front_facing {
            self.flip();
        }
        self.close_accordion();
    }

    pub fn update(&mut self) {
        if !self.is_loaded {
            return;
        }
        let m = self.motion;
        let target_pos = self.target.position + self.pinch_offset.extend(0.0);
        self.current.position = approach_vec3(self.current.position, target_pos, m.smoothing_rate);
        self.current.scale = approach(self.current.scale, self.target.scale, m.smoothing_rate);

        // Flip and hover converge at their own rates; their sum is the
        // rotation target.
        self.hover_rotation.x = approach(self.hover_rotation.x, self.hover_target.x, m.smoothing_rate);
        self.hover_rotation.y = approach(self.hover_rotation.y, self.hover_target.y, m.smoothing_rate);
        let phase_target = if self.is_front_facing { 0.0 } else { 1.0 };
        self.flip_phase = approach(self.flip_phase, phase_target, m.flip_rate);
        self.current.rotation_x = self.hover_rotation.x;
        self.current.rotation_y = self.flip_phase * PI + self.hover_rotation.y;

        if let Some(acc) = self.accordion.as_mut() {
            acc.step(m.fold_rate, m.fold_epsilon);
        }
    }

    /// Face placements relative to the card group.
    pub fn face_transforms(&self) -> Vec<TransformTarget> {
        match &self.accordion {
            Some(acc) => acc.face_transforms().to_vec(),
            None => vec![TransformTarget::default()],
        }
    }

    /// Build this card's nodes: a top-level group, one node per face, and
    /// under each face a front quad, a back quad and, for thick cards, edges.
    pub fn attach_to_scene(&mut self, scene: &mut SceneGraph) -> NodeId {
        let group = scene.add_group(None);
        let half_depth = if self.has_thickness {
            CARD_THICKNESS / 2.0
        } else {
            THIN_BACK_OFFSET
        };
        let (w, h) = (self.width, self.height);
        self.face_nodes.clear();
        for (face_t, mat) in self.face_transforms().into_iter().zip(self.materials.clone()) {
            let face = scene.add_group(Some(group));
            scene.set_transform(face, face_t);
            let front_z = if self.has_thickness { half_depth } else { 0.0 };
            scene.add_quad(
                face,
                Quad {
                    width: w,
                    height: h,
                    material: Material::Front(mat.front),
                },
                TransformTarget {
                    position: Vec3::new(0.0, 0.0, front_z),
                    ..Default::default()
                },
            );
            scene.add_quad(
                face,
                Quad {
                    width: w,
                    height: h,
                    material: Material::Back(mat.back),
                },
                TransformTarget {
                    position: Vec3::new(0.0, 0.0, -half_depth),
                    rotation_y: PI,
                    ..Default::default()
                },
            );
            if let (true, Some(color)) = (self.has_thickness, self.edge_color) {
                add_edges(scene, face, w, h, color);
            }
            self.face_nodes.push(face);
        }
        scene.set_render_order(group, self.index as i32);
        self.group = Some(group);
        group
    }

    /// Push the current card and face transforms into the scene.
    pub fn sync_scene(&self, scene: &mut SceneGraph) {
        let Some(group) = self.group else {
            return;
        };
        scene.set_transform(group, self.current);
        if let Some(acc) = &self.accordion {
            for (node, t) in self.face_nodes.iter().zip(acc.face_transforms()) {
                scene.set_transform(*node, *t);
            }
        }
    }
}

fn add_edges(scene: &mut SceneGraph, face: NodeId, w: f32, h: f32, color: [f32; 3]) {
    let t = CARD_THICKNESS;
    let edge = |width, height| Quad {
        width,
        height,
        material: Material::Edge(color),
    };
    for (y, rx) in [(h / 2.0, -FRAC_PI_2), (-h / 2.0, FRAC_PI_2)] {
        scene.add_quad(
            face,
            edge(w, t),
            TransformTarget {
                position: Vec3::new(0.0, y, 0.0),
                rotation_x: rx,
                ..Default::default()
            },
        );
    }
    for (x, ry) in [(-w / 2.0, -FRAC_PI_2), (w / 2.0, FRAC_PI_2)] {
        scene.add_quad(
            face,
            edge(t, h),
            TransformTarget {
                position: Vec3::new(x, 0.0, 0.0),
                rotation_y: ry,
                ..Default::default()
            },
        );
    }
}
