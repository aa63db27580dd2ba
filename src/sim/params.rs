// params.rs - Burst simulation constants
//
// One home for the fixed tuning values. The shipped engine always runs
// with the defaults.

/// Parameters controlling burst physics and the trail effect.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstParams {
    /// Added to vertical velocity every tick (units/tick²).
    pub gravity: f64,

    /// Multiplicative velocity decay per tick.
    pub friction: f64,

    /// Opacity lost per tick.
    pub fade: f64,

    /// Particles created per click.
    pub burst_size: usize,

    /// Upper bound on initial particle speed.
    pub power: f64,

    /// Opacity of the black rectangle painted over the frame each tick.
    pub trail_alpha: f64,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            gravity: 0.02,
            friction: 0.99,
            fade: 0.005,
            burst_size: 450,
            power: 20.0,
            trail_alpha: 0.05,
        }
    }
}

impl BurstParams {
    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Angle between neighbouring rays of a burst
    pub fn angle_step(&self) -> f64 {
        std::f64::consts::TAU / self.burst_size as f64
    }

    /// Ticks until a fresh particle's opacity reaches zero
    pub fn lifetime_ticks(&self) -> u32 {
        (1.0 / self.fade).ceil() as u32
    }
}
