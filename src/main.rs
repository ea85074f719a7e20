//! Birdman entry point
//!
//! Headless driver: runs the simulation with the autopilot, routing sound and
//! telemetry requests to the log.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};
    use std::time::{Duration, Instant};

    use birdman::records::{Leaderboard, format_record};
    use birdman::sim::autopilot::decide_tap;
    use birdman::sim::{
        EffectSink, GameState, Mode, SoundEffect, TelemetryEvent, TickClock, TickInput, advance,
    };
    use birdman::{ConfigError, SimConfig};
    use clap::Parser;

    /// The autopilot can hover forever; cut a run off after ten minutes of ticks
    const MAX_TICKS_PER_RUN: u64 = 10 * 60 * 60;

    #[derive(Parser, Debug)]
    #[command(name = "birdman")]
    #[command(about = "Headless Birdman Challenge driven by the autopilot")]
    struct Args {
        /// JSON file with screen and sprite sizes
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Number of runs to play before printing the records
        #[arg(
            long,
            value_name = "COUNT",
            default_value_t = 3,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        runs: u32,

        /// Tick as fast as possible instead of in real time
        #[arg(long)]
        fast: bool,
    }

    /// Sink that writes every request to the log
    struct LogSink;

    impl EffectSink for LogSink {
        fn play_sound(&mut self, sound: SoundEffect) {
            log::debug!("sound: {:?}", sound);
        }

        fn emit_telemetry(&mut self, event: &TelemetryEvent) {
            match serde_json::to_string(event) {
                Ok(json) => log::info!("telemetry: {}", json),
                Err(e) => log::warn!("telemetry {} dropped: {}", event.name(), e),
            }
        }
    }

    fn load_config(path: Option<&Path>) -> SimConfig {
        let Some(path) = path else {
            return SimConfig::default();
        };
        match SimConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("{}; using defaults", e);
                SimConfig::default()
            }
        }
    }

    /// Autopilot session plus the bookkeeping for finished runs
    struct Driver<S: EffectSink> {
        state: GameState,
        sink: S,
        leaderboard: Leaderboard,
        finished: u32,
        run_ticks: u64,
    }

    impl<S: EffectSink> Driver<S> {
        fn new(state: GameState, sink: S) -> Self {
            let mut driver = Self {
                state,
                sink,
                leaderboard: Leaderboard::new(),
                finished: 0,
                run_ticks: 0,
            };
            let pending = driver.state.take_pending_effects();
            driver.sink.dispatch(&pending);
            driver
        }

        /// Run up to `ticks` ticks, stopping early once `max_runs` runs are over.
        /// Ticks left after a run ends go to the next one.
        fn step(&mut self, ticks: u32, max_runs: u32) {
            for _ in 0..ticks {
                if self.finished >= max_runs {
                    return;
                }
                self.tick();
            }
        }

        fn tick(&mut self) {
            let was_playing = self.state.mode == Mode::Playing;
            let input = TickInput {
                tap: decide_tap(&self.state),
            };
            let effects = advance(&mut self.state, &input);
            self.sink.dispatch(&effects);

            if self.state.mode == Mode::Playing {
                self.run_ticks += 1;
            }
            let fell = was_playing && self.state.mode == Mode::GameOver;
            let stalled = self.run_ticks >= MAX_TICKS_PER_RUN;
            if !(fell || stalled) {
                return;
            }

            self.finished += 1;
            let record = self.state.record();
            let hits = self.state.birdman.damage_count;
            let rank = self.leaderboard.add_run(record, hits);
            log::info!(
                "Run {} over: {} with {} hits (rank {:?})",
                self.finished,
                format_record(record),
                hits,
                rank
            );
            if stalled {
                log::warn!("Run exceeded {} ticks, abandoning it", MAX_TICKS_PER_RUN);
                self.state.initialize_run();
                let pending = self.state.take_pending_effects();
                self.sink.dispatch(&pending);
            }
            self.run_ticks = 0;
        }
    }

    pub fn run() -> Result<(), ConfigError> {
        let args = Args::parse();
        let config = load_config(args.config.as_deref());
        let mut clock = TickClock::new(config.ticks_per_second);
        let mut driver = Driver::new(GameState::new(config)?, LogSink);
        log::info!("Birdman starting (run id {})", driver.state.counter.run_id);

        let mut last_time = Instant::now();
        while driver.finished < args.runs {
            let ticks = if args.fast {
                1
            } else {
                std::thread::sleep(Duration::from_secs_f32(clock.tick_dt()));
                let now = Instant::now();
                let dt = (now - last_time).as_secs_f32();
                last_time = now;
                clock.advance(dt)
            };
            driver.step(ticks, args.runs);
        }

        println!("YOUR RECORDS");
        for (i, entry) in driver.leaderboard.entries.iter().enumerate() {
            println!(
                "{:>2}. {:>10}  ({} hits)",
                i + 1,
                format_record(entry.record),
                entry.damage_count
            );
        }
        if let Some(best) = driver.leaderboard.best() {
            println!("Best: {}", format_record(best));
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use birdman::sim::BirdmanState;

        #[derive(Default)]
        struct CountingSink {
            game_overs: usize,
        }

        impl EffectSink for CountingSink {
            fn play_sound(&mut self, sound: SoundEffect) {
                if sound == SoundEffect::GameOver {
                    self.game_overs += 1;
                }
            }

            fn emit_telemetry(&mut self, _event: &TelemetryEvent) {}
        }

        /// Driver whose next tick drops the character into the sea
        fn driver_about_to_fall() -> Driver<CountingSink> {
            let mut state = GameState::with_seed(SimConfig::default(), 3).unwrap();
            advance(&mut state, &TickInput::tap());
            while state.birdman.state == BirdmanState::Running {
                advance(&mut state, &TickInput::default());
            }
            state.birds.clear();
            state.birdman.pos.y = state.config.screen_height;
            state.birdman.take_damage();
            Driver::new(state, CountingSink::default())
        }

        #[test]
        fn test_args_defaults() {
            let args = Args::try_parse_from(["birdman"]).unwrap();
            assert_eq!(args.runs, 3);
            assert!(!args.fast);
            assert!(args.config.is_none());
        }

        #[test]
        fn test_args_reject_zero_or_garbage_runs() {
            assert!(Args::try_parse_from(["birdman", "--runs", "0"]).is_err());
            assert!(Args::try_parse_from(["birdman", "--runs", "lots"]).is_err());
            assert!(Args::try_parse_from(["birdman", "--bogus"]).is_err());

            let args =
                Args::try_parse_from(["birdman", "--runs", "5", "--fast", "--config", "a.json"])
                    .unwrap();
            assert_eq!(args.runs, 5);
            assert!(args.fast);
            assert_eq!(args.config, Some(PathBuf::from("a.json")));
        }

        #[test]
        fn test_leftover_ticks_start_next_run() {
            let mut driver = driver_about_to_fall();

            // Fall, tap back to the title, tap into a new run
            driver.step(3, 10);

            assert_eq!(driver.finished, 1);
            assert_eq!(driver.sink.game_overs, 1);
            assert_eq!(driver.leaderboard.entries.len(), 1);
            assert_eq!(driver.state.mode, Mode::Playing);
            assert_eq!(driver.state.counter.initialize_count, 2);
        }

        #[test]
        fn test_step_stops_at_run_limit() {
            let mut driver = driver_about_to_fall();

            driver.step(3, 1);

            assert_eq!(driver.finished, 1);
            assert_eq!(driver.state.mode, Mode::GameOver);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the embedding page
}
