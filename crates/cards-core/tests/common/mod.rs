// Shared fixtures for the host-side integration tests.

#![allow(dead_code)]

use cards_core::{
    AppState, BackConfig, BackMaterial, Camera, Card, CardConfig, FaceConfig, FaceMaterial,
    TextureId, Tuning, Viewport,
};

pub const FRAME_DT: f32 = 1.0 / 60.0;

pub fn simple_config(width: f32, height: f32) -> CardConfig {
    CardConfig::simple(width, height, "front.png", BackConfig::Color([1.0, 1.0, 1.0]))
}

pub fn accordion_config(faces: usize) -> CardConfig {
    let faces = (0..faces)
        .map(|i| FaceConfig {
            front: format!("face-{i}.png"),
            back: BackConfig::Color([1.0, 1.0, 1.0]),
        })
        .collect();
    CardConfig::accordion(2.0, 3.0, faces)
}

/// A card that skips asset loading; every face gets placeholder textures.
pub fn loaded_card(index: usize, config: &CardConfig, tuning: &Tuning) -> Card {
    let mut card = Card::new(index, config, tuning);
    let materials = config
        .faces()
        .iter()
        .enumerate()
        .map(|(i, _)| FaceMaterial {
            front: TextureId(i as u32),
            back: BackMaterial::Color([1.0, 1.0, 1.0]),
        })
        .collect();
    card.finish_loading(materials);
    card
}

/// App on a 1600x900 viewport with the given cards installed.
pub fn app_with(configs: &[CardConfig]) -> AppState {
    let tuning = Tuning::default();
    let cards = configs
        .iter()
        .enumerate()
        .map(|(i, c)| loaded_card(i, c, &tuning))
        .collect();
    let mut app = AppState::new(tuning, Camera::default(), Viewport::new(1600.0, 900.0));
    app.install_cards(cards);
    app
}

pub fn run_frames(app: &mut AppState, frames: usize) {
    for _ in 0..frames {
        app.frame(FRAME_DT);
    }
}

pub fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}
