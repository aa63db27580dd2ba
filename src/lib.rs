// ============================================================================
// BURST ENGINE - Click-spawned particle bursts with cached sprites
// ============================================================================
//
// Each click spawns a ring of particles that fly out, fall, slow down and
// fade. Every frame dims the previous one for a trail, culls dead
// particles, draws the rest and steps them.
//
//   sprite/   two pre-rasterized glyphs, built once
//   sim/      particles, store, spawner, world
//   surface/  drawing backends (software raster, browser canvas)
//   web       wasm glue: DOM wiring and the frame loop

pub mod error;
pub mod sim;
pub mod sprite;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod web;

pub use error::{EngineError, Result};
pub use sim::{BurstParams, BurstWorld, LoopState, Particle, ParticleStore, Rng};
pub use sprite::{Rgba, Sprite, SpriteCache, SpriteColor, SpriteId};
pub use surface::{Raster, Surface};

#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use web::{start, BurstEngine};
