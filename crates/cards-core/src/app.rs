//! The app controller: owns the cards, the scene, the gesture state and the
//! active view, and runs one frame at a time.

use crate::camera::{Camera, Viewport};
use crate::card::Card;
use crate::config::Tuning;
use crate::gesture::{GestureAction, GestureController, PointerInput};
use crate::hit_test::{HitTester, Pick};
use crate::scene::{Renderer, SceneGraph};
use crate::view::{Transition, View, ViewContext, ViewKind, ViewRequest};

pub struct AppState {
    cards: Vec<Card>,
    scene: SceneGraph,
    hit_tester: HitTester,
    camera: Camera,
    viewport: Viewport,
    gesture: GestureController,
    tuning: Tuning,
    view: View,
}

impl AppState {
    pub fn new(tuning: Tuning, camera: Camera, viewport: Viewport) -> Self {
        let mut camera = camera;
        camera.aspect = viewport.aspect();
        Self {
            cards: Vec::new(),
            scene: SceneGraph::new(),
            hit_tester: HitTester::new(),
            camera,
            viewport,
            gesture: GestureController::new(&tuning),
            tuning,
            view: View::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_kind(&self) -> ViewKind {
        self.view.kind()
    }

    pub fn selected(&self) -> Option<usize> {
        self.view.selected()
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn gesture(&self) -> &GestureController {
        &self.gesture
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
    }

    /// Take ownership of freshly loaded cards, put them in the scene and
    /// enter the stack.
    pub fn install_cards(&mut self, cards: Vec<Card>) {
        self.scene.clear();
        self.hit_tester.clear();
        self.cards = cards;
        for card in self.cards.iter_mut() {
            let group = card.attach_to_scene(&mut self.scene);
            self.hit_tester.register(card.index(), group);
        }
        log::info!("[app] installed {} cards", self.cards.len());
        self.set_view(ViewRequest::Stack);
    }

    fn with_view<R>(&mut self, f: impl FnOnce(&mut View, &mut ViewContext) -> R) -> R {
        let Self {
            cards,
            view,
            tuning,
            camera,
            gesture,
            ..
        } = self;
        let mut ctx = ViewContext {
            cards: cards.as_mut_slice(),
            tuning,
            camera,
            pointer: gesture.pointer(),
            dragging: gesture.is_touching(),
        };
        f(view, &mut ctx)
    }

    /// Leave the current view and enter the requested one in a single step.
    pub fn set_view(&mut self, request: ViewRequest) {
        let request = match request {
            ViewRequest::Focus { selected } if selected >= self.cards.len() => {
                log::warn!("[app] focus on missing card {}; showing spread", selected);
                ViewRequest::Spread
            }
            r => r,
        };
        self.with_view(|view, ctx| {
            view.exit(ctx);
            *view = View::enter(request, ctx);
        });
    }

    fn apply(&mut self, transition: Transition) {
        if let Transition::To(request) = transition {
            self.set_view(request);
        }
    }

    /// Route a click at screen coordinates through the hit tester.
    pub fn click(&mut self, x: f32, y: f32) {
        let pick = self
            .hit_tester
            .pick(&self.scene, &self.camera, &self.viewport, x, y);
        let transition = match pick {
            Pick::Card(index) => {
                log::debug!("[click] card {}", index);
                self.with_view(|view, ctx| view.on_card_click(ctx, index))
            }
            Pick::Blank => self.with_view(|view, ctx| view.on_blank_click(ctx)),
            Pick::Unowned => Transition::Stay,
        };
        self.apply(transition);
    }

    pub fn handle_pointer(&mut self, input: &PointerInput, now_ms: f64) {
        let actions = self.gesture.handle(input, &self.viewport, now_ms);
        for action in actions {
            match action {
                // Pointer position already lives in the gesture state.
                GestureAction::Hover { .. } => {}
                GestureAction::Swipe { dx } => self.with_view(|view, ctx| view.on_swipe(ctx, dx)),
                GestureAction::Momentum { velocity } => {
                    self.with_view(|view, ctx| view.on_momentum(ctx, velocity))
                }
                GestureAction::Click { x, y } => self.click(x, y),
            }
        }
    }

    /// One tick: pinch smoothing, pinch offsets, view, cards, scene sync.
    pub fn frame(&mut self, dt_sec: f32) {
        self.gesture.step_pinch(self.tuning.pinch_smoothing);
        if self.gesture.zoom_active() {
            let zoom = self.gesture.pinch_zoom();
            let center = self.gesture.pinch_center();
            for card in self.cards.iter_mut() {
                card.apply_pinch_zoom(zoom, center.x, center.y);
            }
        } else {
            for card in self.cards.iter_mut() {
                card.reset_pinch_offset();
            }
        }
        self.with_view(|view, ctx| view.update(ctx, dt_sec));
        for card in self.cards.iter_mut() {
            card.update();
            card.sync_scene(&mut self.scene);
        }
    }

    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.render(&self.scene, &self.camera);
    }
}
