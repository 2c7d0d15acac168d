//! Retained scene graph with parent links and a ray-intersection query.
//!
//! Nodes hold a local transform and optionally a two-sided quad lying in the
//! node's local XY plane. The graph is what the renderer draws and what the
//! hit tester casts rays into.

use crate::camera::{Camera, Ray};
use crate::smoothing::TransformTarget;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Handle handed out by an asset loader for one decoded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BackMaterial {
    Texture(TextureId),
    Color([f32; 3]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Front(TextureId),
    Back(BackMaterial),
    Edge([f32; 3]),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quad {
    pub width: f32,
    pub height: f32,
    pub material: Material,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    transform: TransformTarget,
    quad: Option<Quad>,
    render_order: i32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    pub distance: f32,
    pub point: Vec3,
}

/// One quad ready to draw: its world matrix, geometry and paint order.
#[derive(Clone, Copy, Debug)]
pub struct Drawable {
    pub node: NodeId,
    pub world: Mat4,
    pub quad: Quad,
    pub render_order: i32,
}

/// Draws a scene from a camera once per frame.
pub trait Renderer {
    fn render(&mut self, scene: &SceneGraph, camera: &Camera);
}

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

pub fn local_matrix(t: &TransformTarget) -> Mat4 {
    Mat4::from_scale_rotation_translation(
        Vec3::splat(t.scale),
        Quat::from_euler(EulerRot::XYZ, t.rotation_x, t.rotation_y, 0.0),
        t.position,
    )
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    fn push(&mut self, parent: Option<NodeId>, quad: Option<Quad>, t: TransformTarget) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            transform: t,
            quad,
            render_order: 0,
        });
        match parent {
            Some(p) => self.attach(id, p),
            None => self.roots.push(id),
        }
        id
    }

    /// Empty grouping node; top level when `parent` is `None`.
    pub fn add_group(&mut self, parent: Option<NodeId>) -> NodeId {
        self.push(parent, None, TransformTarget::default())
    }

    pub fn add_quad(&mut self, parent: NodeId, quad: Quad, transform: TransformTarget) -> NodeId {
        self.push(Some(parent), Some(quad), transform)
    }

    /// Re-parent `child` under `parent`, detaching it from wherever it was.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) {
        if child == parent {
            return;
        }
        match self.nodes[child.0 as usize].parent {
            Some(old) => self.nodes[old.0 as usize].children.retain(|c| *c != child),
            None => self.roots.retain(|r| *r != child),
        }
        self.nodes[child.0 as usize].parent = Some(parent);
        self.nodes[parent.0 as usize].children.push(child);
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0 as usize).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0 as usize)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn transform(&self, id: NodeId) -> Option<&TransformTarget> {
        self.nodes.get(id.0 as usize).map(|n| &n.transform)
    }

    pub fn set_transform(&mut self, id: NodeId, t: TransformTarget) {
        if let Some(n) = self.nodes.get_mut(id.0 as usize) {
            n.transform = t;
        }
    }

    pub fn quad(&self, id: NodeId) -> Option<&Quad> {
        self.nodes.get(id.0 as usize).and_then(|n| n.quad.as_ref())
    }

    /// Paint order applied to a node and its whole subtree.
    pub fn set_render_order(&mut self, id: NodeId, order: i32) {
        let mut stack = vec![id];
        while let Some(n) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(n.0 as usize) {
                node.render_order = order;
                stack.extend(node.children.iter().copied());
            }
        }
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut m = Mat4::IDENTITY;
        let mut cur = Some(id);
        while let Some(n) = cur {
            let node = &self.nodes[n.0 as usize];
            m = local_matrix(&node.transform) * m;
            cur = node.parent;
        }
        m
    }

    fn collect(&self, id: NodeId, recursive: bool, out: &mut Vec<NodeId>) {
        out.push(id);
        if recursive {
            for c in self.children(id) {
                self.collect(*c, true, out);
            }
        }
    }

    /// Intersect `ray` with the quads of `candidates` (and their descendants
    /// when `recursive`). Hits come back nearest first.
    pub fn intersect(&self, ray: &Ray, candidates: &[NodeId], recursive: bool) -> Vec<Hit> {
        let mut nodes = Vec::new();
        for c in candidates {
            if (c.0 as usize) < self.nodes.len() {
                self.collect(*c, recursive, &mut nodes);
            }
        }
        let mut hits: Vec<Hit> = nodes
            .into_iter()
            .filter_map(|id| {
                let quad = self.quad(id)?;
                let world = self.world_matrix(id);
                ray_quad(ray, &world, quad).map(|(distance, point)| Hit {
                    node: id,
                    distance,
                    point,
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    /// Every quad in the graph with its world matrix, sorted by paint order.
    pub fn drawables(&self) -> Vec<Drawable> {
        let mut out: Vec<Drawable> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| {
                let id = NodeId(i as u32);
                n.quad.map(|quad| Drawable {
                    node: id,
                    world: self.world_matrix(id),
                    quad,
                    render_order: n.render_order,
                })
            })
            .collect();
        out.sort_by_key(|d| d.render_order);
        out
    }
}

/// Two-sided ray/quad test in the quad's local space. Returns world distance
/// along the ray and the world hit point.
pub fn ray_quad(ray: &Ray, world: &Mat4, quad: &Quad) -> Option<(f32, Vec3)> {
    let det = world.determinant();
    if det.abs() < 1e-12 {
        return None;
    }
    let inv = world.inverse();
    let lo = inv.transform_point3(ray.origin);
    let ld = inv.transform_vector3(ray.direction);
    if ld.z.abs() < 1e-8 {
        return None;
    }
    let t = -lo.z / ld.z;
    if t < 0.0 {
        return None;
    }
    let p = lo + ld * t;
    if p.x.abs() > quad.width / 2.0 || p.y.abs() > quad.height / 2.0 {
        return None;
    }
    let point = ray.origin + ray.direction * t;
    Some(((point - ray.origin).length(), point))
}
