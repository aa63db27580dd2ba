// canvas.rs - Browser canvas surface
//
// Sprites are uploaded once into offscreen canvases so each particle costs
// a single drawImage call.

use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData};

use super::Surface;
use crate::error::{EngineError, Result};
use crate::sprite::{Rgba, Sprite, SpriteCache, SpriteId};

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    sprites: Vec<HtmlCanvasElement>,
}

impl CanvasSurface {
    /// Find the first element matching `selector` and wrap it
    pub fn select(document: &Document, selector: &str, sprites: &SpriteCache) -> Result<Self> {
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| EngineError::CanvasNotFound(selector.to_string()))?;
        let canvas = element
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| EngineError::NotACanvas(selector.to_string()))?;
        Self::new(document, canvas, sprites)
    }

    pub fn new(document: &Document, canvas: HtmlCanvasElement, sprites: &SpriteCache) -> Result<Self> {
        // Opaque backbuffer: the trail fade never needs to composite with the page
        let options = js_sys::Object::new();
        js_sys::Reflect::set(&options, &JsValue::from_str("alpha"), &JsValue::FALSE)?;
        let ctx = context_2d(&canvas, Some(&options))?;

        let mut uploaded = Vec::with_capacity(sprites.len());
        for (_, sprite) in sprites.iter() {
            uploaded.push(upload(document, sprite)?);
        }

        Ok(Self { canvas, ctx, sprites: uploaded })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, w: u32, h: u32) {
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x, y, w, h);
    }

    fn blit(&mut self, sprite: SpriteId, x: f64, y: f64, alpha: f64) {
        // Canvas ignores out-of-range globalAlpha instead of clamping it
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }
        let Some(src) = self.sprites.get(sprite.index()) else { return };
        self.ctx.set_global_alpha(alpha);
        if let Err(e) = self.ctx.draw_image_with_html_canvas_element(src, x, y) {
            log::warn!("drawImage failed: {:?}", e);
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement, options: Option<&js_sys::Object>) -> Result<CanvasRenderingContext2d> {
    let ctx = match options {
        Some(o) => canvas.get_context_with_context_options("2d", o)?,
        None => canvas.get_context("2d")?,
    };
    ctx.ok_or(EngineError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| EngineError::ContextUnavailable)
}

/// Copy a rasterized sprite into its own offscreen canvas
fn upload(document: &Document, sprite: &Sprite) -> Result<HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| EngineError::NotACanvas("offscreen sprite".to_string()))?;
    canvas.set_width(sprite.size());
    canvas.set_height(sprite.size());

    let ctx = context_2d(&canvas, None)?;
    let data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(sprite.pixels()),
        sprite.size(),
        sprite.size(),
    )?;
    ctx.put_image_data(&data, 0.0, 0.0)?;
    Ok(canvas)
}
