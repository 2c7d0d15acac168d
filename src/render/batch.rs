use crate::constants::{BACK_TEXTURE_COLOR, FRONT_FACE_COLOR};
use cards_core::{BackMaterial, Material, TextureId};
use std::ops::Range;

/// Texture bound while drawing a quad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureSlot {
    /// 1x1 white; the instance tint is the final color.
    Plain,
    Image(TextureId),
}

/// Texture and tint for one quad. Card images are drawn untinted; a face whose
/// image is not on the GPU yet shows a placeholder color instead.
pub fn shade(material: &Material, uploaded: usize) -> (TextureSlot, [f32; 3]) {
    let image = |id: TextureId, pending: [f32; 3]| {
        if (id.0 as usize) < uploaded {
            (TextureSlot::Image(id), [1.0; 3])
        } else {
            (TextureSlot::Plain, pending)
        }
    };
    match material {
        Material::Front(id) => image(*id, FRONT_FACE_COLOR),
        Material::Back(BackMaterial::Texture(id)) => image(*id, BACK_TEXTURE_COLOR),
        Material::Back(BackMaterial::Color(rgb)) | Material::Edge(rgb) => (TextureSlot::Plain, *rgb),
    }
}

/// Consecutive instances sharing a texture, in draw order.
pub fn runs(slots: &[TextureSlot]) -> Vec<(TextureSlot, Range<u32>)> {
    let mut out: Vec<(TextureSlot, Range<u32>)> = Vec::new();
    for (i, slot) in slots.iter().enumerate() {
        let i = i as u32;
        match out.last_mut() {
            Some((prev, range)) if prev == slot => range.end = i + 1,
            _ => out.push((*slot, i..i + 1)),
        }
    }
    out
}
