// sprite.rs - Pre-rendered particle glyphs
//
// Two small filled circles rasterized once at startup. Surfaces upload or
// copy these and particles refer to them by `SpriteId`.

use crate::sim::Rng;

/// Sprite raster edge length in pixels
pub const SPRITE_SIZE: u32 = 10;

/// Glyph radius in pixels
pub const SPRITE_RADIUS: f64 = 3.0;

// Circle center inside the raster
const CENTER: f64 = 5.0;

// Subsamples per axis for edge coverage
const SUPERSAMPLE: u32 = 4;

/// Straight (non-premultiplied) RGBA color, alpha in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black(a: f64) -> Self {
        Self::new(0, 0, 0, a)
    }

    /// CSS color string, as canvas `fillStyle` expects
    pub fn css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }
}

/// Color variant of a cached glyph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteColor {
    Red,
    Green,
}

impl SpriteColor {
    pub const ALL: [SpriteColor; 2] = [SpriteColor::Red, SpriteColor::Green];

    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            SpriteColor::Red => (0xdc, 0x26, 0x26),
            SpriteColor::Green => (0x16, 0xa3, 0x4a),
        }
    }
}

/// Index of a sprite inside the cache
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteId(pub u8);

impl SpriteId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable RGBA8 raster, row-major, straight alpha
#[derive(Clone, Debug)]
pub struct Sprite {
    color: SpriteColor,
    size: u32,
    pixels: Vec<u8>,
}

impl Sprite {
    /// Rasterize a filled circle of `SPRITE_RADIUS` centred in the raster
    pub fn circle(color: SpriteColor) -> Self {
        let (r, g, b) = color.rgb();
        let size = SPRITE_SIZE;
        let mut pixels = vec![0u8; (size * size * 4) as usize];
        let r2 = SPRITE_RADIUS * SPRITE_RADIUS;
        let step = 1.0 / SUPERSAMPLE as f64;

        for py in 0..size {
            for px in 0..size {
                let mut hits = 0u32;
                for sy in 0..SUPERSAMPLE {
                    for sx in 0..SUPERSAMPLE {
                        let x = px as f64 + (sx as f64 + 0.5) * step - CENTER;
                        let y = py as f64 + (sy as f64 + 0.5) * step - CENTER;
                        if x * x + y * y <= r2 {
                            hits += 1;
                        }
                    }
                }
                if hits == 0 {
                    continue;
                }
                let coverage = hits as f64 / (SUPERSAMPLE * SUPERSAMPLE) as f64;
                let i = ((py * size + px) * 4) as usize;
                pixels[i] = r;
                pixels[i + 1] = g;
                pixels[i + 2] = b;
                pixels[i + 3] = (coverage * 255.0).round() as u8;
            }
        }

        Self { color, size, pixels }
    }

    pub fn color(&self) -> SpriteColor {
        self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at (x, y), or `None` outside the raster
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let i = ((y * self.size + x) * 4) as usize;
        Some([self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]])
    }
}

/// The fixed set of particle glyphs
#[derive(Clone, Debug)]
pub struct SpriteCache {
    sprites: Vec<Sprite>,
}

impl SpriteCache {
    pub fn build() -> Self {
        let sprites: Vec<Sprite> = SpriteColor::ALL.iter().map(|&c| Sprite::circle(c)).collect();
        log::debug!("sprite cache built: {} glyphs of {}x{}", sprites.len(), SPRITE_SIZE, SPRITE_SIZE);
        Self { sprites }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SpriteId, &Sprite)> {
        self.sprites.iter().enumerate().map(|(i, s)| (SpriteId(i as u8), s))
    }

    /// Uniform pick among the cached glyphs
    pub fn choose(&self, rng: &mut Rng) -> SpriteId {
        SpriteId(rng.index(self.sprites.len()) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_holds_two_distinct_colors() {
        let cache = SpriteCache::build();
        assert_eq!(cache.len(), 2);
        let red = cache.get(SpriteId(0)).unwrap();
        let green = cache.get(SpriteId(1)).unwrap();
        assert_eq!(red.color(), SpriteColor::Red);
        assert_eq!(green.color(), SpriteColor::Green);
        assert!(cache.get(SpriteId(2)).is_none());
    }

    #[test]
    fn circle_is_solid_at_center_and_empty_at_corners() {
        let sprite = Sprite::circle(SpriteColor::Red);
        assert_eq!(sprite.size(), 10);
        assert_eq!(sprite.pixel(5, 5), Some([0xdc, 0x26, 0x26, 255]));
        assert_eq!(sprite.pixel(4, 4).map(|p| p[3]), Some(255));
        assert_eq!(sprite.pixel(0, 0).map(|p| p[3]), Some(0));
        assert_eq!(sprite.pixel(9, 9).map(|p| p[3]), Some(0));
        assert_eq!(sprite.pixel(10, 0), None);
    }

    #[test]
    fn circle_is_symmetric_about_center() {
        let sprite = Sprite::circle(SpriteColor::Green);
        // pixel (5 + k) mirrors pixel (4 - k) around x = 5
        for y in 0..10 {
            for k in 0..5 {
                let a = sprite.pixel(5 + k, y).unwrap()[3];
                let b = sprite.pixel(4 - k, y).unwrap()[3];
                assert_eq!(a, b, "row {y} offset {k}");
            }
        }
    }

    #[test]
    fn choose_returns_valid_ids() {
        let cache = SpriteCache::build();
        let mut rng = Rng::new(3);
        for _ in 0..100 {
            assert!(cache.get(cache.choose(&mut rng)).is_some());
        }
    }

    #[test]
    fn css_formats_alpha() {
        assert_eq!(Rgba::black(0.05).css(), "rgba(0,0,0,0.05)");
    }
}
