// spawner.rs - Ring bursts
//
// Direction is fixed by the particle's index in the burst; only the speed
// along each ray is random, one draw shared by both axes.

use super::{BurstParams, Particle, ParticleStore, Rng};
use crate::sprite::SpriteCache;

/// Append one full burst centred on (x, y). Returns the number spawned.
pub fn spawn_burst(
    store: &mut ParticleStore,
    x: f64,
    y: f64,
    params: &BurstParams,
    sprites: &SpriteCache,
    rng: &mut Rng,
) -> usize {
    let count = params.burst_size;
    let step = params.angle_step();
    store.reserve(count);

    for i in 0..count {
        let sprite = sprites.choose(rng);
        let angle = step * i as f64;
        let speed = rng.unit() * params.power;
        store.push(Particle::new(x, y, angle.cos() * speed, angle.sin() * speed, sprite));
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_fills_store_at_click_point() {
        let params = BurstParams::default();
        let sprites = SpriteCache::build();
        let mut rng = Rng::new(11);
        let mut store = ParticleStore::new();

        let n = spawn_burst(&mut store, 30.0, 40.0, &params, &sprites, &mut rng);

        assert_eq!(n, 450);
        assert_eq!(store.len(), 450);
        for p in store.iter() {
            assert_eq!((p.x, p.y), (30.0, 40.0));
            assert_eq!(p.alpha, 1.0);
            assert!(p.speed() < params.power);
            assert!(sprites.get(p.sprite).is_some());
        }
    }

    #[test]
    fn rays_follow_index_angle() {
        let params = BurstParams::default();
        let sprites = SpriteCache::build();
        let mut rng = Rng::new(5);
        let mut store = ParticleStore::new();
        spawn_burst(&mut store, 0.0, 0.0, &params, &sprites, &mut rng);

        let ps = store.as_slice();
        // Index 0 points along +x
        assert!(ps[0].vy.abs() < 1e-12);
        assert!(ps[0].vx >= 0.0 && ps[0].vx < 20.0);

        for (i, p) in ps.iter().enumerate() {
            if p.speed() < 1e-6 {
                continue;
            }
            let expected = params.angle_step() * i as f64;
            let d = (p.vy.atan2(p.vx) - expected).rem_euclid(std::f64::consts::TAU);
            assert!(d < 1e-9 || (std::f64::consts::TAU - d) < 1e-9, "index {i}");
        }
    }

    #[test]
    fn both_sprites_appear() {
        let params = BurstParams::default();
        let sprites = SpriteCache::build();
        let mut rng = Rng::new(8);
        let mut store = ParticleStore::new();
        spawn_burst(&mut store, 0.0, 0.0, &params, &sprites, &mut rng);

        let reds = store.iter().filter(|p| p.sprite.0 == 0).count();
        assert!(reds > 150 && reds < 300, "{reds}");
    }
}
