use cards_core::{AssetError, AssetLoader, TextureId};
use futures::future::LocalBoxFuture;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Decoded card images, indexed by `TextureId`.
#[derive(Clone, Default)]
pub struct ImageRegistry {
    images: Rc<RefCell<Vec<web::HtmlImageElement>>>,
}

impl ImageRegistry {
    pub fn insert(&self, img: web::HtmlImageElement) -> TextureId {
        let mut images = self.images.borrow_mut();
        let id = TextureId(images.len() as u32);
        images.push(img);
        id
    }

    pub fn len(&self) -> usize {
        self.images.borrow().len()
    }

    pub fn get(&self, id: TextureId) -> Option<web::HtmlImageElement> {
        self.images.borrow().get(id.0 as usize).cloned()
    }
}

/// Loads card images through `HtmlImageElement`, resolving once the browser
/// has decoded them.
pub struct WebAssetLoader {
    registry: ImageRegistry,
}

impl WebAssetLoader {
    pub fn new(registry: ImageRegistry) -> Self {
        Self { registry }
    }
}

impl AssetLoader for WebAssetLoader {
    fn load(&self, path: &str) -> LocalBoxFuture<'_, Result<TextureId, AssetError>> {
        let url = path.to_string();
        Box::pin(async move {
            let img = load_image(&url)
                .await
                .map_err(|e| AssetError::new(format!("{}: {:?}", url, e)))?;
            let id = self.registry.insert(img);
            log::debug!("[assets] {} -> texture {}", url, id.0);
            Ok(id)
        })
    }
}

async fn load_image(url: &str) -> Result<web::HtmlImageElement, JsValue> {
    let img = web::HtmlImageElement::new()?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&reject));
    });
    img.set_src(url);
    let res = JsFuture::from(promise).await;
    img.set_onload(None);
    img.set_onerror(None);
    res?;
    Ok(img)
}
