// burst-render - Headless burst renderer
//
// Pipeline:
//   1. Build the sprite cache and a software raster surface
//   2. Replay scripted clicks at their frames
//   3. Tick the world for N frames
//   4. Write every Nth frame as a PNG
//
// Usage: cargo run --bin burst-render -- [--frames N] [--click X,Y[@FRAME]] [--out DIR]

#[cfg(not(target_arch = "wasm32"))]
mod args;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = <args::Options as clap::Parser>::parse();
    if let Err(e) = run(&opts) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
fn run(opts: &args::Options) -> burst_engine::Result<()> {
    use burst_engine::{BurstWorld, Raster, Rng, SpriteCache};

    std::fs::create_dir_all(&opts.out)?;

    log::info!(
        "Rendering {} frames at {}x{} into {}",
        opts.frames,
        opts.width,
        opts.height,
        opts.out.display()
    );

    let sprites = SpriteCache::build();
    let mut surface = Raster::new(opts.width, opts.height, sprites.clone());
    let mut world = BurstWorld::new(opts.width, opts.height, sprites, Rng::new(opts.seed));

    let clicks = opts.scripted_clicks();
    let mut written = 0;
    for frame in 0..opts.frames {
        for c in clicks.iter().filter(|c| c.frame == frame) {
            world.click(c.x, c.y);
        }

        world.tick(&mut surface);

        if frame % opts.every == 0 {
            let path = opts.out.join(format!("frame_{:04}.png", frame));
            surface.save_png(&path)?;
            written += 1;
            log::info!("  frame {:4}: {} particles -> {}", frame, world.particle_count(), path.display());
        }
    }

    log::info!("Done! {} frames written", written);
    Ok(())
}
