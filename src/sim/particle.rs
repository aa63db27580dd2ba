// particle.rs - A single burst particle
//
// Semi-implicit Euler: velocity is updated first, then position moves by
// the new velocity.

use super::BurstParams;
use crate::sprite::SpriteId;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub sprite: SpriteId,
    /// Opacity; starts at 1 and is not clamped below 0
    pub alpha: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, sprite: SpriteId) -> Self {
        Self { x, y, vx, vy, sprite, alpha: 1.0 }
    }

    /// Dead particles are neither drawn nor stepped again
    #[inline]
    pub fn is_dead(&self) -> bool {
        self.alpha < 0.0
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }

    /// Advance one tick
    #[inline]
    pub fn integrate(&mut self, params: &BurstParams) {
        self.vx *= params.friction;
        self.vy *= params.friction;
        self.vy += params.gravity;
        self.x += self.vx;
        self.y += self.vy;
        self.alpha -= params.fade;
    }

    /// Draw at the current position with opacity as global alpha
    #[inline]
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.blit(self.sprite, self.x, self.y, self.alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn one_step_from_rest() {
        let params = BurstParams::default();
        let mut p = Particle::new(100.0, 100.0, 0.0, 0.0, SpriteId(0));
        p.integrate(&params);
        assert!((p.vx - 0.0).abs() < EPS);
        assert!((p.vy - 0.02).abs() < EPS);
        assert!((p.x - 100.0).abs() < EPS);
        assert!((p.y - 100.02).abs() < EPS);
        assert!((p.alpha - 0.995).abs() < EPS);
    }

    #[test]
    fn gravity_applies_before_position_update() {
        let params = BurstParams::default();
        let mut p = Particle::new(0.0, 0.0, 0.0, 1.0, SpriteId(0));
        p.integrate(&params);
        // (1 * 0.99 + 0.02) moved this tick, not 1.0
        assert!((p.y - 1.01).abs() < EPS);
    }

    #[test]
    fn friction_decays_speed_geometrically() {
        let params = BurstParams::default().with_gravity(0.0);
        let mut p = Particle::new(0.0, 0.0, 3.0, -4.0, SpriteId(1));
        for t in 1..=150 {
            p.integrate(&params);
            let expected = 5.0 * 0.99f64.powi(t);
            assert!((p.speed() - expected).abs() < 1e-9, "tick {t}");
        }
    }

    #[test]
    fn dies_only_below_zero() {
        let mut p = Particle::new(0.0, 0.0, 0.0, 0.0, SpriteId(0));
        p.alpha = 0.0;
        assert!(!p.is_dead());
        p.alpha = -1e-9;
        assert!(p.is_dead());
    }
}
