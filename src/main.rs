//! Stellar Fury entry point
//!
//! Native builds run a headless session: the autopilot flies, every frame is
//! tessellated into a vertex batch, and a summary is printed at the end.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use stellar_fury::persistence::TextFileStore;
    use stellar_fury::platform::{Autopilot, InputSource};
    use stellar_fury::renderer::{VertexBatch, draw_frame};
    use stellar_fury::sim::tick::was_damaging;
    use stellar_fury::sim::{GameEvent, GameMode, GameState, tick};
    use stellar_fury::{HighScore, QualityPreset, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "stellar-fury")]
    #[command(about = "Headless Stellar Fury session driven by the autopilot")]
    struct Args {
        /// Run seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Simulated seconds to run
        #[arg(long, default_value_t = 120.0)]
        seconds: f32,
        /// Frames per simulated second
        #[arg(long, default_value_t = 60)]
        fps: u32,
        /// JSON settings file (defaults are used if it is missing)
        #[arg(long)]
        settings: Option<PathBuf>,
        /// Override the quality preset (low, medium, high)
        #[arg(long)]
        quality: Option<String>,
        /// Plain-text high score file
        #[arg(long, default_value = "highscore.txt")]
        high_score: PathBuf,
        /// Start another run after each game over
        #[arg(long)]
        restart: bool,
    }

    #[derive(Debug, Default)]
    struct Summary {
        frames: u64,
        runs: u32,
        shots: u64,
        kills: u64,
        escapes: u64,
        hits_taken: u64,
        pickups: u64,
        bosses_defeated: u32,
        peak_triangles: usize,
    }

    impl Summary {
        fn record(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::RunStarted => self.runs += 1,
                    GameEvent::ShotFired(_) => self.shots += 1,
                    GameEvent::EnemyKilled { .. } => self.kills += 1,
                    GameEvent::EnemyEscaped { .. } => self.escapes += 1,
                    GameEvent::PlayerHit(outcome) if was_damaging(*outcome) => {
                        self.hits_taken += 1
                    }
                    GameEvent::PowerUpCollected(_) => self.pickups += 1,
                    GameEvent::BossDefeated { .. } => self.bosses_defeated += 1,
                    GameEvent::GameOver {
                        score,
                        new_high_score,
                    } => {
                        log::info!("Run over: {score} (new high score: {new_high_score})");
                    }
                    _ => {}
                }
            }
        }
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();
        if args.fps == 0 {
            bail!("--fps must be positive");
        }

        let mut settings = match &args.settings {
            Some(path) => Settings::load(path),
            None => Settings::default(),
        };
        if let Some(name) = &args.quality {
            settings.quality = QualityPreset::from_str(name)
                .with_context(|| format!("unknown quality preset {name:?}"))?;
        }

        let high_score = HighScore::load(Box::new(TextFileStore::new(&args.high_score)));
        let mut state = GameState::new(&settings, args.seed)
            .context("invalid settings")?
            .with_high_score(high_score);

        let mut pilot = Autopilot::new().with_restart(args.restart);
        let mut batch = VertexBatch::with_capacity(16 * 1024);
        let mut summary = Summary::default();

        let dt = 1.0 / args.fps as f32;
        let frames = (args.seconds.max(0.0) * args.fps as f32) as u64;
        log::info!(
            "Headless run: seed {}, {} frames at {} fps, quality {}",
            args.seed,
            frames,
            args.fps,
            settings.quality.as_str()
        );

        for _ in 0..frames {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, dt);
            summary.record(&state.events);
            summary.frames += 1;

            batch.clear();
            draw_frame(&state, &mut batch);
            summary.peak_triangles = summary.peak_triangles.max(batch.triangle_count());

            if state.quit_requested || (state.mode == GameMode::GameOver && !args.restart) {
                break;
            }
        }

        let hud = state.hud();
        println!("frames simulated : {}", summary.frames);
        println!("simulated time   : {:.1}s", summary.frames as f32 * dt.min(state.max_frame_dt()));
        println!("runs             : {}", summary.runs);
        println!("final mode       : {:?}", hud.mode);
        println!("score            : {}", hud.score);
        println!("high score       : {}", hud.high_score);
        println!("shots fired      : {}", summary.shots);
        println!("enemies killed   : {}", summary.kills);
        println!("enemies escaped  : {}", summary.escapes);
        println!("hits taken       : {}", summary.hits_taken);
        println!("power-ups        : {}", summary.pickups);
        println!("bosses defeated  : {}", summary.bosses_defeated);
        println!("difficulty       : {:.2}", hud.difficulty);
        println!("peak triangles   : {}", summary.peak_triangles);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Stellar Fury (native) starting...");
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a host page; there is no standalone entry point
}
