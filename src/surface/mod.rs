// surface/ - Drawing backends
//
// The simulation only needs four operations from whatever it draws on.
// The raster backend works everywhere; the canvas backend is wasm only.

mod raster;
#[cfg(target_arch = "wasm32")]
mod canvas;

pub use raster::Raster;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sprite::{Rgba, SpriteId};

/// A 2D raster drawing target.
///
/// Implementations clamp `alpha` to [0, 1]; a negative alpha draws nothing.
pub trait Surface {
    /// Current (width, height) in pixels
    fn size(&self) -> (u32, u32);

    /// Change dimensions; contents are discarded
    fn resize(&mut self, w: u32, h: u32);

    /// Blend a solid rectangle over the surface
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba);

    /// Draw a cached sprite with its top-left corner at (x, y)
    fn blit(&mut self, sprite: SpriteId, x: f64, y: f64, alpha: f64);

    /// Fill the whole surface
    fn fill(&mut self, color: Rgba) {
        let (w, h) = self.size();
        self.fill_rect(0.0, 0.0, w as f64, h as f64, color);
    }
}
