// raster.rs - Software RGBA surface
//
// Opaque RGBA8 framebuffer with source-over blending. Starts black, like a
// canvas context created with `alpha: false`.

use super::Surface;
use crate::sprite::{Rgba, SpriteCache, SpriteId};

pub struct Raster {
    w: u32,
    h: u32,
    out: Vec<u8>,
    sprites: SpriteCache,
}

impl Raster {
    pub fn new(w: u32, h: u32, sprites: SpriteCache) -> Self {
        Self {
            w,
            h,
            out: black(w, h),
            sprites,
        }
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.out
    }

    /// RGBA at (x, y), or `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.w || y >= self.h {
            return None;
        }
        let i = ((y * self.w + x) * 4) as usize;
        Some([self.out[i], self.out[i + 1], self.out[i + 2], self.out[i + 3]])
    }

    /// Write the current frame as a PNG
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_png(&self, path: &std::path::Path) -> crate::Result<()> {
        image::save_buffer(path, &self.out, self.w, self.h, image::ColorType::Rgba8)?;
        Ok(())
    }
}

impl Surface for Raster {
    fn size(&self) -> (u32, u32) {
        (self.w, self.h)
    }

    fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.out = black(w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: Rgba) {
        let a = color.a.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        let x0 = x.max(0.0).floor() as u32;
        let y0 = y.max(0.0).floor() as u32;
        let x1 = ((x + w).min(self.w as f64).ceil().max(0.0)) as u32;
        let y1 = ((y + h).min(self.h as f64).ceil().max(0.0)) as u32;

        for py in y0..y1 {
            for px in x0..x1 {
                blend(&mut self.out, self.w, px, py, [color.r, color.g, color.b], a);
            }
        }
    }

    fn blit(&mut self, sprite: SpriteId, x: f64, y: f64, alpha: f64) {
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha == 0.0 {
            return;
        }
        let Some(src) = self.sprites.get(sprite) else { return };
        let size = src.size() as i64;
        let ox = x.floor() as i64;
        let oy = y.floor() as i64;
        let pixels = src.pixels();
        let (w, h) = (self.w as i64, self.h as i64);

        for sy in 0..size {
            let py = oy + sy;
            if py < 0 || py >= h { continue; }
            for sx in 0..size {
                let px = ox + sx;
                if px < 0 || px >= w { continue; }
                let i = ((sy * size + sx) * 4) as usize;
                let a = pixels[i + 3] as f64 / 255.0 * alpha;
                if a == 0.0 { continue; }
                blend(&mut self.out, self.w, px as u32, py as u32, [pixels[i], pixels[i + 1], pixels[i + 2]], a);
            }
        }
    }
}

fn black(w: u32, h: u32) -> Vec<u8> {
    let mut out = vec![0u8; (w as usize) * (h as usize) * 4];
    for px in out.chunks_exact_mut(4) {
        px[3] = 255;
    }
    out
}

/// Source-over onto an opaque pixel
#[inline]
fn blend(out: &mut [u8], w: u32, x: u32, y: u32, rgb: [u8; 3], a: f64) {
    let i = ((y * w + x) * 4) as usize;
    let inv = 1.0 - a;
    for c in 0..3 {
        out[i + c] = mix(out[i + c], rgb[c], a, inv);
    }
    out[i + 3] = 255;
}

#[inline]
fn mix(dst: u8, src: u8, a: f64, inv: f64) -> u8 {
    (src as f64 * a + dst as f64 * inv).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(w: u32, h: u32) -> Raster {
        Raster::new(w, h, SpriteCache::build())
    }

    #[test]
    fn starts_opaque_black() {
        let r = raster(4, 3);
        assert_eq!(r.pixels().len(), 4 * 3 * 4);
        assert_eq!(r.pixel(3, 2), Some([0, 0, 0, 255]));
        assert_eq!(r.pixel(4, 0), None);
    }

    #[test]
    fn negative_alpha_blit_draws_nothing() {
        let mut r = raster(20, 20);
        r.blit(SpriteId(0), 5.0, 5.0, -0.004);
        assert!(r.pixels().chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn over_range_alpha_is_clamped_to_opaque() {
        let mut r = raster(20, 20);
        r.blit(SpriteId(0), 0.0, 0.0, 3.0);
        assert_eq!(r.pixel(5, 5), Some([0xdc, 0x26, 0x26, 255]));
    }

    #[test]
    fn blit_uses_floor_of_position_and_clips() {
        let mut r = raster(8, 8);
        // Sprite center lands at (2 + 5, 3 + 5) = (7, 8): row 8 is off-surface
        r.blit(SpriteId(1), 2.7, 3.2, 1.0);
        assert_eq!(r.pixel(7, 7), Some([0x16, 0xa3, 0x4a, 255]));
        // Far off-surface blits are ignored
        r.blit(SpriteId(1), -100.0, 500.0, 1.0);
    }

    #[test]
    fn translucent_black_fill_darkens() {
        let mut r = raster(2, 2);
        r.fill(Rgba::new(200, 100, 60, 1.0));
        r.fill(Rgba::black(0.05));
        assert_eq!(r.pixel(0, 0), Some([190, 95, 57, 255]));
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut r = raster(4, 4);
        r.fill_rect(-2.0, -2.0, 4.0, 4.0, Rgba::new(255, 255, 255, 1.0));
        assert_eq!(r.pixel(1, 1), Some([255, 255, 255, 255]));
        assert_eq!(r.pixel(2, 2), Some([0, 0, 0, 255]));
    }

    #[test]
    fn resize_discards_contents() {
        let mut r = raster(4, 4);
        r.fill(Rgba::new(255, 0, 0, 1.0));
        r.resize(6, 2);
        assert_eq!(r.size(), (6, 2));
        assert_eq!(r.pixel(5, 1), Some([0, 0, 0, 255]));
    }
}
