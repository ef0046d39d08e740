use rollball_sim::bot::{Autopilot, Controller, Passive};
use rollball_sim::config::SimConfig;
use rollball_sim::game_loop::{run_realtime, GameCommand, RunLoop, RunSummary, StopCondition};
use rollball_sim::render::LogRenderer;
use rollball_sim::state::GameState;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match SimConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid simulation configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid simulation configuration: {}", e);
        std::process::exit(1);
    }

    let game_config = match config.load_game_config() {
        Ok(game_config) => game_config,
        Err(e) => {
            eprintln!("Invalid game configuration: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = match GameState::new(game_config, config.rng_seed) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build arena: {}", e);
            std::process::exit(1);
        }
    };

    let mut renderer = LogRenderer::new(60);
    let stop = StopCondition::Either(config.frame_limit);

    tracing::info!(
        seed = config.rng_seed,
        frame_limit = config.frame_limit,
        autopilot = config.autopilot,
        realtime = config.realtime,
        "starting rollball simulation"
    );

    let summary = if config.autopilot {
        run(&config, &mut state, &mut renderer, &mut Autopilot::default(), stop).await
    } else {
        run(&config, &mut state, &mut renderer, &mut Passive, stop).await
    };

    println!("{}", state.hud().timer);
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::warn!("cannot encode run summary: {}", e),
    }
}

async fn run<C: Controller>(
    config: &SimConfig,
    state: &mut GameState,
    renderer: &mut LogRenderer,
    controller: &mut C,
    stop: StopCondition,
) -> RunSummary {
    if !config.realtime {
        return RunLoop::new(state).run(state, renderer, controller, stop);
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<GameCommand>(64);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = cmd_tx.send(GameCommand::Shutdown).await;
        }
    });
    run_realtime(state, renderer, controller, cmd_rx, stop).await
}
