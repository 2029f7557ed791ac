//! Antigravity entry point
//!
//! Headless runner: loads a configuration, drives the player bodies from a
//! script and reports how the run ended.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::Parser;

    use antigravity::SimConfig;
    use antigravity::platform::{PlayerBodies, Script};
    use antigravity::sim::{GameEvent, LoseCause, Simulation};

    #[derive(Parser, Debug)]
    #[command(author, version, about = "Steer a body into the goal with antigravity", long_about = None)]
    struct Args {
        /// JSON config file (reference layout when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the number of active players (0-4)
        #[arg(short, long)]
        players: Option<usize>,

        /// JSON script of per-tick player moves
        #[arg(short, long)]
        script: Option<PathBuf>,

        /// Stop after this many ticks if the run hasn't ended
        #[arg(short, long, default_value_t = 10_000)]
        max_ticks: u64,

        /// Print the effective configuration as JSON and exit
        #[arg(long)]
        dump_config: bool,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        let mut config = match &args.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };
        if let Some(players) = args.players {
            config.players = players;
        }
        config.validate().context("invalid configuration")?;

        if args.dump_config {
            println!("{}", config.to_json()?);
            return Ok(());
        }

        let mut script = match &args.script {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading script {}", path.display()))?;
                serde_json::from_str::<Script>(&json)
                    .with_context(|| format!("parsing script {}", path.display()))?
            }
            None => Script::default(),
        };

        let mut players = PlayerBodies::new(config.player_starts, config.player_speed);
        let frame_hz = config.frame_hz;
        let mut sim = Simulation::new(config)?;

        let event = sim.run(
            |_| {
                players.apply(&script.next_moves());
                players.tick_input()
            },
            args.max_ticks,
        )?;

        if !script.is_finished() {
            log::info!("Run ended before the script did");
        }

        let state = sim.state();
        log::info!(
            "Finished after {} ticks at ({:.1}, {:.1})",
            state.time_ticks,
            state.target.pos.x,
            state.target.pos.y
        );

        match event {
            GameEvent::Won { .. } => {
                println!("Congratulations! You won!");
                println!("Your time was: {:.2} seconds", state.elapsed_secs(frame_hz));
            }
            GameEvent::Lost { cause, .. } => {
                match cause {
                    LoseCause::OutOfBounds => log::info!("Target left the arena"),
                    LoseCause::Obstacle { index } => log::info!("Target hit obstacle {}", index),
                }
                println!("You hit a wall! Game over.");
            }
            GameEvent::Continue => {
                bail!("run still going after {} ticks", args.max_ticks);
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Antigravity (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Windowed builds drive `antigravity::sim` from their own frame loop
}
