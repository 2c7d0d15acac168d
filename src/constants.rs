/// Web front-end constants: page wiring and renderer colors.
///
/// Interaction tuning lives in `cards_core::constants`; these values only
/// concern how the deck is hosted and drawn in the browser.

// DOM id of the canvas the deck renders into
pub const CANVAS_ID: &str = "app-canvas";

// Colors below are linear; the surface is sRGB.

// Page background #d4c4a8 behind the cards
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.658_375,
    g: 0.552_011,
    b: 0.391_572,
    a: 1.0,
};

// Placeholder tint for faces whose image is not on the GPU yet
pub const FRONT_FACE_COLOR: [f32; 3] = [0.9114, 0.8900, 0.8276];
pub const BACK_TEXTURE_COLOR: [f32; 3] = [0.7106, 0.6739, 0.6038];

// Directional shading: light direction (view space) and ambient floor
pub const LIGHT_DIR: [f32; 3] = [0.3, 0.5, 1.0];
pub const AMBIENT: f32 = 0.6;

// Initial instance buffer capacity; grows on demand
pub const INITIAL_INSTANCE_CAPACITY: usize = 64;

pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

// Upper bound for one frame step so a backgrounded tab does not jump
pub const MAX_FRAME_DT_SEC: f32 = 0.1;
