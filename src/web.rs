// web.rs - Browser glue
//
// Canvas lookup, sizing to the viewport, click and resize listeners and the
// requestAnimationFrame loop. Everything runs on the page's event loop, so
// the shared world is never borrowed twice at once.

use std::cell::RefCell;
use std::rc::Rc;

use log::LevelFilter;
use wasm_bindgen::prelude::*;
use web_sys::{Document, MouseEvent, Window};

use crate::error::EngineError;
use crate::logging;
use crate::sim::{BurstWorld, Rng};
use crate::sprite::SpriteCache;
use crate::surface::{CanvasSurface, Surface};

const CANVAS_SELECTOR: &str = ".canvas";

#[wasm_bindgen]
pub struct BurstEngine {
    world: BurstWorld,
    surface: CanvasSurface,
    window: Window,
    document: Document,
}

#[wasm_bindgen]
impl BurstEngine {
    /// Attach to the canvas matching `selector` and size it to the viewport
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str) -> Result<BurstEngine, JsValue> {
        logging::init(LevelFilter::Info);
        Ok(Self::create(selector)?)
    }

    /// Run one frame. The host is expected to schedule the next one first.
    pub fn tick(&mut self) {
        self.world.tick(&mut self.surface);
    }

    /// Spawn a burst at viewport coordinates
    pub fn click(&mut self, x: f64, y: f64) -> usize {
        self.world.click(x, y)
    }

    /// Resize the canvas to the document's client area and drop all particles
    pub fn fit(&mut self) {
        let (w, h) = client_size(&self.document);
        self.resize(w, h);
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.surface.resize(w, h);
        self.world.resize(w, h);
    }

    pub fn particle_count(&self) -> usize { self.world.particle_count() }
    pub fn width(&self) -> u32 { self.world.width() }
    pub fn height(&self) -> u32 { self.world.height() }
}

impl BurstEngine {
    fn create(selector: &str) -> crate::Result<Self> {
        let window = web_sys::window().ok_or(EngineError::NoWindow)?;
        let document = window.document().ok_or(EngineError::NoDocument)?;

        let sprites = SpriteCache::build();
        let surface = CanvasSurface::select(&document, selector, &sprites)?;
        let (w, h) = client_size(&document);
        let rng = Rng::from_unit(js_sys::Math::random());

        let mut engine = Self {
            world: BurstWorld::new(w, h, sprites, rng),
            surface,
            window,
            document,
        };
        engine.resize(w, h);
        log::info!("burst engine attached to '{}' at {}x{}", selector, w, h);
        Ok(engine)
    }
}

/// Wire a canvas up end to end and start the frame loop.
///
/// Clicks anywhere on the document spawn bursts; window resizes refit the
/// canvas. Defaults to the `.canvas` element.
#[wasm_bindgen]
pub fn start(selector: Option<String>) -> Result<(), JsValue> {
    logging::init(LevelFilter::Info);
    let selector = selector.unwrap_or_else(|| CANVAS_SELECTOR.to_string());

    let engine = match BurstEngine::create(&selector) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("startup failed: {}", e);
            return Err(e.into());
        }
    };
    let window = engine.window.clone();
    let document = engine.document.clone();
    let engine = Rc::new(RefCell::new(engine));

    // Click -> burst
    {
        let engine = engine.clone();
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            engine
                .borrow_mut()
                .click(event.client_x() as f64, event.client_y() as f64);
        });
        document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Resize -> refit and reset
    {
        let engine = engine.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            engine.borrow_mut().fit();
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Frame loop: schedule the next frame, then tick
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let first = frame.clone();
    let loop_window = window.clone();
    *first.borrow_mut() = Some(Closure::new(move || {
        if let Some(cb) = frame.borrow().as_ref() {
            request_frame(&loop_window, cb);
        }
        engine.borrow_mut().tick();
    }));

    if let Some(cb) = first.borrow().as_ref() {
        request_frame(&window, cb);
    }
    Ok(())
}

fn request_frame(window: &Window, cb: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

fn client_size(document: &Document) -> (u32, u32) {
    document
        .document_element()
        .map(|el| (el.client_width().max(0) as u32, el.client_height().max(0) as u32))
        .unwrap_or((0, 0))
}
