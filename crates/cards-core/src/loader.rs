//! Asynchronous card construction.
//!
//! Each card is one task that resolves to a fully built card or to the first
//! asset failure; all tasks are joined and the join fails on the first error.

use crate::card::{Card, FaceMaterial};
use crate::config::{BackConfig, CardConfig, Tuning};
use crate::error::{AssetError, CardError};
use crate::scene::{BackMaterial, TextureId};
use futures::future::{try_join_all, LocalBoxFuture};

/// Source of decoded images; front-ends implement this.
pub trait AssetLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<TextureId, AssetError>>;
}

async fn load_texture<L: AssetLoader + ?Sized>(
    loader: &L,
    index: usize,
    path: &str,
) -> Result<TextureId, CardError> {
    loader
        .load(path)
        .await
        .map_err(|source| CardError::AssetLoad {
            index,
            path: path.to_string(),
            source,
        })
}

pub async fn load_card<L: AssetLoader + ?Sized>(
    index: usize,
    config: &CardConfig,
    tuning: &Tuning,
    loader: &L,
) -> Result<Card, CardError> {
    let mut card = Card::new(index, config, tuning);
    let mut materials = Vec::with_capacity(config.faces().len());
    for face in config.faces() {
        let front = load_texture(loader, index, &face.front).await?;
        let back = match &face.back {
            BackConfig::Asset(path) => BackMaterial::Texture(load_texture(loader, index, path).await?),
            BackConfig::Color(rgb) => BackMaterial::Color(*rgb),
        };
        materials.push(FaceMaterial { front, back });
    }
    card.finish_loading(materials);
    log::debug!("[load] card {} ready", index);
    Ok(card)
}

/// Load every card; cards come back in configuration order.
pub async fn load_cards<L: AssetLoader + ?Sized>(
    configs: &[CardConfig],
    tuning: &Tuning,
    loader: &L,
) -> Result<Vec<Card>, CardError> {
    let cards = try_join_all(
        configs
            .iter()
            .enumerate()
            .map(|(index, config)| load_card(index, config, tuning, loader)),
    )
    .await?;
    log::info!("[load] all cards loaded: {}", cards.len());
    Ok(cards)
}
