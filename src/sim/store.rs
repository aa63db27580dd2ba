// store.rs - Live particle collection
//
// Unordered. Dead particles are culled by compacting survivors toward the
// front, so every particle is visited exactly once per tick.

use super::{BurstParams, Particle};
use crate::surface::Surface;

#[derive(Default)]
pub struct ParticleStore {
    items: Vec<Particle>,
}

impl ParticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, p: Particle) {
        self.items.push(p);
    }

    pub fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.items
    }

    /// Cull dead particles, draw the rest, then step them.
    ///
    /// Returns how many particles were removed.
    pub fn step<S: Surface + ?Sized>(&mut self, params: &BurstParams, surface: &mut S) -> usize {
        let n = self.items.len();
        let mut write = 0;

        for read in 0..n {
            let mut p = self.items[read];
            if p.is_dead() {
                continue;
            }

            p.render(surface);
            p.integrate(params);

            self.items[write] = p;
            write += 1;
        }

        self.items.truncate(write);
        n - write
    }
}

impl Extend<Particle> for ParticleStore {
    fn extend<I: IntoIterator<Item = Particle>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
