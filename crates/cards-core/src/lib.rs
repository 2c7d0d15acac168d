pub mod accordion;
pub mod app;
pub mod camera;
pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod gesture;
pub mod loader;
pub mod momentum;
pub mod scene;
pub mod smoothing;
pub mod view;

pub use accordion::Accordion;
pub use app::AppState;
pub use camera::{Camera, Ray, Viewport};
pub use card::{Card, FaceMaterial};
pub use config::{BackConfig, CardConfig, CardKind, FaceConfig, Tuning};
pub use error::{AssetError, CardError};
pub use gesture::{GestureAction, GestureController, PointerInput, TouchPoint, Touches};
pub use hit_test::{HitTester, Pick};
pub use loader::{load_card, load_cards, AssetLoader};
pub use momentum::ScrollAxis;
pub use scene::{BackMaterial, Drawable, Material, NodeId, Quad, Renderer, SceneGraph, TextureId};
pub use smoothing::TransformTarget;
pub use view::{Transition, View, ViewKind, ViewRequest};
