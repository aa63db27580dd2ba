// sim/ - Burst simulation
//
// The world owns every piece of mutable state: the live particles, the
// last click point, the surface dimensions and the random source.

mod params;
mod particle;
mod rng;
mod spawner;
mod store;

pub use params::BurstParams;
pub use particle::Particle;
pub use rng::Rng;
pub use spawner::spawn_burst;
pub use store::ParticleStore;

use crate::sprite::{Rgba, SpriteCache};
use crate::surface::Surface;

/// Loop lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    /// No frame has run yet
    Idle,
    /// Steady state; runs until the host tears the surface down
    Running,
}

/// Burst simulation world
pub struct BurstWorld {
    // Surface dimensions
    w: u32,
    h: u32,

    params: BurstParams,
    sprites: SpriteCache,
    particles: ParticleStore,

    // Last click point
    mouse: (f64, f64),

    state: LoopState,
    frame: u64,
    rng: Rng,
}

impl BurstWorld {
    pub fn new(w: u32, h: u32, sprites: SpriteCache, rng: Rng) -> Self {
        Self::with_params(w, h, BurstParams::default(), sprites, rng)
    }

    pub fn with_params(w: u32, h: u32, params: BurstParams, sprites: SpriteCache, rng: Rng) -> Self {
        Self {
            w,
            h,
            params,
            sprites,
            particles: ParticleStore::new(),
            mouse: (w as f64 / 2.0, h as f64 / 2.0),
            state: LoopState::Idle,
            frame: 0,
            rng,
        }
    }

    /// New dimensions; every live particle is dropped
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        let dropped = self.particles.len();
        self.particles.clear();
        log::info!("resized to {}x{}, dropped {} particles", w, h, dropped);
    }

    /// Record the click point and spawn a burst there
    pub fn click(&mut self, x: f64, y: f64) -> usize {
        self.mouse = (x, y);
        let n = spawn_burst(&mut self.particles, x, y, &self.params, &self.sprites, &mut self.rng);
        log::debug!("burst of {} at ({:.1}, {:.1}), {} live", n, x, y, self.particles.len());
        n
    }

    /// One frame: dim the previous frame, then cull, draw and step particles
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.state = LoopState::Running;
        self.frame += 1;

        surface.fill_rect(
            0.0,
            0.0,
            self.w as f64,
            self.h as f64,
            Rgba::black(self.params.trail_alpha),
        );

        let removed = self.particles.step(&self.params, surface);
        if removed > 0 {
            log::trace!("frame {}: culled {}, {} live", self.frame, removed, self.particles.len());
        }
    }

    // Accessors
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
    pub fn mouse(&self) -> (f64, f64) { self.mouse }
    pub fn state(&self) -> LoopState { self.state }
    pub fn frame(&self) -> u64 { self.frame }
    pub fn params(&self) -> &BurstParams { &self.params }
    pub fn particles(&self) -> &ParticleStore { &self.particles }
    pub fn particle_count(&self) -> usize { self.particles.len() }

    /// Direct store access for hosts that place particles themselves
    pub fn particles_mut(&mut self) -> &mut ParticleStore { &mut self.particles }
}
