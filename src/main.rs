//! Brick Breaker - headless native runner
//!
//! Plays one auto-play game into an offscreen mesh surface and logs what
//! happens. Usage:
//!
//!   brick-breaker [config.json] [max_ticks] [--realtime]
//!
//! `--realtime` paces frames at the fixed tick rate instead of running flat out.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use brick_breaker::consts::TICK_INTERVAL;
    use brick_breaker::renderer::MeshSurface;
    use brick_breaker::sim::LogObserver;
    use brick_breaker::{Game, GameConfig};

    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let mut realtime = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else {
            positional.push(arg);
        }
    }

    let mut config = match positional.first() {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => GameConfig::default(),
    };
    config.auto_play = true;

    let max_ticks: u64 = match positional.get(1) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("max_ticks must be a whole number, got {raw:?}"))?,
        None => 100_000,
    };

    let mut game = Game::with_observer(config, LogObserver).context("starting game")?;
    let mut surface = MeshSurface::new();

    let mut ticks = 0;
    while game.is_running() && ticks < max_ticks {
        game.frame(&mut surface);
        ticks += 1;

        if ticks % 500 == 0 {
            log::debug!(
                "tick {}: {} triangles, {} text runs",
                ticks,
                surface.triangle_count(),
                surface.texts.len()
            );
        }
        if realtime {
            std::thread::sleep(TICK_INTERVAL);
        }
    }

    let pg = game.playground();
    let alive = pg.bricks().iter().filter(|b| b.alive()).count();
    log::info!(
        "Finished after {} ticks: {:?}, score {}, lives {}, {} bricks left",
        ticks,
        game.status(),
        pg.score(),
        pg.life(),
        alive
    );
    println!("{:?} score={} life={} ticks={}", game.status(), pg.score(), pg.life(), ticks);

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts on wasm drive `Game` directly
}
