//! Load-time configuration: the interaction tuning table and the card list.
//!
//! Card records arrive as JSON in the same shape the page ships them:
//!
//! ```json
//! [
//!   { "width": 3, "height": 3, "front": "card1-front.png", "back": "card1-back.png" },
//!   { "width": 3.49, "height": 3.49, "front": "card3.png", "backColor": "#fbf9f1", "hasThickness": true },
//!   { "width": 2, "height": 3, "faces": [ { "front": "a.png", "backColor": "#ffffff" }, ... ] }
//! ]
//! ```

use crate::constants::*;
use crate::error::CardError;
use serde::Deserialize;

/// Hand-tuned interaction constants. Every value is a plain knob; none is
/// derived from another.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    pub smoothing_rate: f32,
    pub flip_rate: f32,
    pub hover_tilt_factor: f32,

    pub fold_rate: f32,
    pub fold_epsilon: f32,
    pub fold_depth_step: f32,
    pub fan_tilt: f32,

    pub stack_depth_spacing: f32,

    pub spread_spacing: f32,
    pub spread_scale: f32,
    pub spread_depth_step: f32,
    pub bob_amplitude: f32,
    pub bob_tilt: f32,
    pub bob_frequency: f32,
    pub bob_phase_step: f32,

    pub focus_depth: f32,
    pub focus_fill: f32,
    pub parked_y: f32,
    pub parked_z: f32,
    pub parked_depth_step: f32,
    pub parked_scale: f32,

    pub swipe_to_world: f32,
    pub momentum_friction: f32,
    pub momentum_epsilon: f32,
    pub overscroll_resistance: f32,
    pub bounce_snap_strength: f32,
    pub bounce_spring_base: f32,
    pub overscroll_buffer_fraction: f32,
    pub overscroll_limit_multiple: f32,

    pub pinch_min: f32,
    pub pinch_max: f32,
    pub pinch_smoothing: f32,
    pub pinch_pan: f32,

    pub tap_max_ms: f64,
    pub tap_max_distance_px: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            smoothing_rate: SMOOTHING_RATE,
            flip_rate: FLIP_RATE,
            hover_tilt_factor: HOVER_TILT_FACTOR,
            fold_rate: FOLD_RATE,
            fold_epsilon: FOLD_EPSILON,
            fold_depth_step: FOLD_DEPTH_STEP,
            fan_tilt: FAN_TILT,
            stack_depth_spacing: STACK_DEPTH_SPACING,
            spread_spacing: SPREAD_SPACING,
            spread_scale: SPREAD_SCALE,
            spread_depth_step: SPREAD_DEPTH_STEP,
            bob_amplitude: BOB_AMPLITUDE,
            bob_tilt: BOB_TILT,
            bob_frequency: BOB_FREQUENCY,
            bob_phase_step: BOB_PHASE_STEP,
            focus_depth: FOCUS_DEPTH,
            focus_fill: FOCUS_FILL,
            parked_y: PARKED_Y,
            parked_z: PARKED_Z,
            parked_depth_step: PARKED_DEPTH_STEP,
            parked_scale: PARKED_SCALE,
            swipe_to_world: SWIPE_TO_WORLD,
            momentum_friction: MOMENTUM_FRICTION,
            momentum_epsilon: MOMENTUM_EPSILON,
            overscroll_resistance: OVERSCROLL_RESISTANCE,
            bounce_snap_strength: BOUNCE_SNAP_STRENGTH,
            bounce_spring_base: BOUNCE_SPRING_BASE,
            overscroll_buffer_fraction: OVERSCROLL_BUFFER_FRACTION,
            overscroll_limit_multiple: OVERSCROLL_LIMIT_MULTIPLE,
            pinch_min: PINCH_MIN,
            pinch_max: PINCH_MAX,
            pinch_smoothing: PINCH_SMOOTHING,
            pinch_pan: PINCH_PAN,
            tap_max_ms: TAP_MAX_MS,
            tap_max_distance_px: TAP_MAX_DISTANCE_PX,
        }
    }
}

impl Tuning {
    /// Per-frame pull toward the bound once a scroll axis is overscrolled.
    pub fn bounce_spring(&self) -> f32 {
        (self.bounce_spring_base * self.bounce_snap_strength).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BackConfig {
    Asset(String),
    Color([f32; 3]),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceConfig {
    pub front: String,
    pub back: BackConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub enum CardKind {
    Simple(FaceConfig),
    Accordion(Vec<FaceConfig>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    pub has_thickness: bool,
    pub edge_color: Option<[f32; 3]>,
    pub kind: CardKind,
}

impl CardConfig {
    pub fn simple(width: f32, height: f32, front: &str, back: BackConfig) -> Self {
        Self {
            width,
            height,
            has_thickness: false,
            edge_color: None,
            kind: CardKind::Simple(FaceConfig {
                front: front.to_string(),
                back,
            }),
        }
    }

    pub fn accordion(width: f32, height: f32, faces: Vec<FaceConfig>) -> Self {
        Self {
            width,
            height,
            has_thickness: false,
            edge_color: None,
            kind: CardKind::Accordion(faces),
        }
    }

    pub fn faces(&self) -> &[FaceConfig] {
        match &self.kind {
            CardKind::Simple(face) => std::slice::from_ref(face),
            CardKind::Accordion(faces) => faces,
        }
    }

    pub fn is_accordion(&self) -> bool {
        matches!(self.kind, CardKind::Accordion(_))
    }

    /// Parse and validate an ordered JSON list of card records.
    pub fn parse_list(json: &str) -> Result<Vec<CardConfig>, CardError> {
        let raw: Vec<RawCard> = serde_json::from_str(json)?;
        raw.into_iter()
            .enumerate()
            .map(|(index, r)| r.validate(index))
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFace {
    front: String,
    back: Option<String>,
    back_color: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    width: f32,
    height: f32,
    front: Option<String>,
    back: Option<String>,
    back_color: Option<String>,
    #[serde(default)]
    has_thickness: bool,
    edge_color: Option<String>,
    faces: Option<Vec<RawFace>>,
}

fn back_config(
    index: usize,
    back: Option<String>,
    back_color: Option<String>,
) -> Result<BackConfig, CardError> {
    match (back, back_color) {
        (Some(path), _) => Ok(BackConfig::Asset(path)),
        (None, Some(color)) => parse_hex_color(&color)
            .map(BackConfig::Color)
            .ok_or_else(|| CardError::InvalidConfig {
                index,
                reason: format!("bad color `{color}`"),
            }),
        (None, None) => Err(CardError::InvalidConfig {
            index,
            reason: "face needs `back` or `backColor`".to_string(),
        }),
    }
}

impl RawCard {
    fn validate(self, index: usize) -> Result<CardConfig, CardError> {
        let invalid = |reason: &str| CardError::InvalidConfig {
            index,
            reason: reason.to_string(),
        };
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(invalid("width and height must be positive"));
        }
        let kind = match self.faces {
            Some(faces) => {
                if faces.is_empty() {
                    return Err(invalid("accordion card needs at least one face"));
                }
                let faces = faces
                    .into_iter()
                    .map(|f| {
                        Ok(FaceConfig {
                            front: f.front,
                            back: back_config(index, f.back, f.back_color)?,
                        })
                    })
                    .collect::<Result<Vec<_>, CardError>>()?;
                CardKind::Accordion(faces)
            }
            None => {
                let front = self.front.ok_or_else(|| invalid("missing `front`"))?;
                CardKind::Simple(FaceConfig {
                    front,
                    back: back_config(index, self.back, self.back_color)?,
                })
            }
        };
        let edge_color = match self.edge_color {
            Some(c) => Some(parse_hex_color(&c).ok_or_else(|| invalid("bad `edgeColor`"))?),
            // Thick cards without an explicit edge take the back color.
            None => match &kind {
                CardKind::Simple(FaceConfig {
                    back: BackConfig::Color(c),
                    ..
                }) => Some(*c),
                _ => None,
            },
        };
        Ok(CardConfig {
            width: self.width,
            height: self.height,
            has_thickness: self.has_thickness,
            edge_color,
            kind,
        })
    }
}

/// `#rrggbb` (sRGB) → linear RGB, ready for an sRGB render target.
pub fn parse_hex_color(s: &str) -> Option<[f32; 3]> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .ok()
            .map(|c| srgb_to_linear(c as f32 / 255.0))
    };
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Decode one sRGB-encoded channel in 0..=1.
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
