//! Coop Dash headless runner
//!
//! Runs the simulation at a simulated 60 Hz with the demo player at the
//! controls and logs how the run went.
//!
//! Usage: coop-dash [--variant classic|coop] [--config FILE] [--seed N]
//!                  [--frames N] [--dump]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Coop Dash (headless) starting...");

    native::run(native::Options::parse());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser host embeds the library directly
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use clap::Parser;
    use coop_dash::audio::LogSink;
    use coop_dash::renderer::{AllAssetsReady, DrawList, Renderer};
    use coop_dash::sim::spawn::active_count;
    use coop_dash::sim::{GamePhase, ObstacleKind};
    use coop_dash::{FrameDriver, GameConfig, Settings, Variant};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    #[derive(Parser)]
    #[command(name = "coop-dash")]
    #[command(about = "Run Coop Dash headless with the demo player")]
    pub struct Options {
        /// Game variant: classic or coop
        #[arg(long, default_value = "coop", value_parser = parse_variant)]
        variant: Variant,
        /// JSON config overriding the variant preset
        #[arg(long)]
        config: Option<PathBuf>,
        /// RNG seed
        #[arg(long, default_value_t = 1)]
        seed: u64,
        /// Frames to simulate before giving up
        #[arg(long, default_value_t = 60 * 120)]
        frames: u64,
        /// Print the final state as JSON
        #[arg(long)]
        dump: bool,
    }

    fn parse_variant(name: &str) -> Result<Variant, String> {
        Variant::from_str(name).ok_or_else(|| format!("unknown variant: {name} (classic, coop)"))
    }

    impl Options {
        /// Variant preset, overridden by the config file when it is usable
        fn config(&self) -> GameConfig {
            let fallback = GameConfig::from_variant(self.variant);
            let Some(path) = &self.config else {
                return fallback;
            };
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(e) => {
                    log::warn!(
                        "Cannot read {}: {e}; using {} preset",
                        path.display(),
                        self.variant.as_str()
                    );
                    return fallback;
                }
            };
            match GameConfig::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("{e}; using {} preset", self.variant.as_str());
                    fallback
                }
            }
        }
    }

    /// Counts frames instead of drawing them
    #[derive(Default)]
    struct NullRenderer {
        frames: u64,
        commands: usize,
    }

    impl Renderer for NullRenderer {
        fn draw(&mut self, frame: &DrawList) {
            self.frames += 1;
            self.commands += frame.len();
        }
    }

    pub fn run(options: Options) {
        let config = options.config();
        log::info!(
            "Winning score {}, platforms {}, goal object {}",
            config.winning_score,
            config.has_platforms,
            config.has_goal_object
        );

        let mut driver = FrameDriver::new(
            config,
            Settings::default(),
            options.seed,
            NullRenderer::default(),
            LogSink,
            AllAssetsReady,
        );
        driver.set_autopilot(true);

        for frame in 0..options.frames {
            driver.frame(frame as f64 * FRAME_MS);
            if driver.state().phase.is_terminal() {
                break;
            }
        }

        let state = driver.state();
        let outcome = match state.phase {
            GamePhase::Won => "won",
            GamePhase::GameOver => "crashed",
            GamePhase::Playing | GamePhase::Idle => "out of frames",
        };
        println!(
            "Run {outcome}: score {} after {} ticks ({:.1}s), speed {:.2}",
            state.score,
            state.time_ticks,
            state.playing_ms / 1000.0,
            state.obstacle_speed
        );
        println!(
            "On screen: {} hazards, {} platforms; {} frames drawn, {} draw commands",
            active_count(state, ObstacleKind::Hazard),
            active_count(state, ObstacleKind::Platform),
            driver.renderer().frames,
            driver.renderer().commands
        );

        if options.dump {
            match serde_json::to_string_pretty(state) {
                Ok(json) => println!("{json}"),
                Err(e) => log::error!("Failed to serialize state: {e}"),
            }
        }
    }
}
