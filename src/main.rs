#![warn(clippy::all)]

use anyhow::anyhow;
use clap::{Parser, ValueEnum};
use conway_scan::{
    EngineKind, LogReporter, Pattern, SilentSink, SimConfig, Simulation, TerminalSink,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum RenderMode {
    /// Window with the field and controls
    Gui,
    /// Text frames on stdout
    Terminal,
    /// Only the final report
    #[value(name = "none")]
    Quiet,
}

/// Conway's Game of Life on a bounded square grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Initial pattern: b[linker], g[lider-gun], r[andom] or i/custom
    #[arg(short, long, default_value = "glider-gun")]
    pattern: Pattern,
    /// Side length of the grid
    #[arg(short, long, default_value_t = 40)]
    size: usize,
    /// Upper bound on the number of generations
    #[arg(short = 'n', long, default_value_t = 200)]
    steps: u64,
    /// Seed for the random pattern
    #[arg(long)]
    seed: Option<u64>,
    /// Stepping engine: pruned or naive
    #[arg(short, long, default_value = "pruned")]
    engine: EngineKind,
    #[arg(short, long, value_enum, default_value_t = RenderMode::Gui)]
    render: RenderMode,
    /// Frame rate limit for the gui and terminal output
    #[arg(long, default_value_t = 20.)]
    fps: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = SimConfig::new(args.pattern, args.size, args.steps, args.seed)?;

    match args.render {
        RenderMode::Gui => run_viewer(config, args.engine, args.fps),
        RenderMode::Terminal => {
            let mut sim = Simulation::new(
                args.engine.create(config.initial_grid()),
                config.time_steps(),
            );
            sim.run(&mut TerminalSink::stdout(args.fps), &mut LogReporter);
            Ok(())
        }
        RenderMode::Quiet => {
            let mut sim = Simulation::new(
                args.engine.create(config.initial_grid()),
                config.time_steps(),
            );
            sim.run(&mut SilentSink, &mut LogReporter);
            Ok(())
        }
    }
}

fn run_viewer(config: SimConfig, engine: EngineKind, max_fps: f64) -> anyhow::Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(1280., 800.))
            .with_min_inner_size(vec2(640.0, 360.0)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| {
            Ok(Box::new(
                conway_scan::App::new(&cc.egui_ctx, config, engine).with_max_fps(max_fps),
            ))
        }),
    )
    .map_err(|err| anyhow!("viewer failed: {}", err))
}
