use super::{Config, FrameBuffer};
use crate::{EngineKind, FpsLimiter, LogReporter, Pattern, ReportSink, SimConfig, Simulation};
use eframe::egui::{
    CentralPanel, Color32, ColorImage, Context, Frame, Key, Margin, TextureHandle,
};
use std::time::Instant;

pub struct App {
    pub(super) simulation: Simulation,     // Current run.
    pub(super) engine_kind: EngineKind,    // Engine used for restarts.
    pub(super) config: SimConfig,          // Configuration of the current run.
    pub(super) frame: FrameBuffer,         // Last generation received from the simulation.
    pub(super) is_paused: bool,            // Flag indicating whether the simulation is paused.
    pub(super) do_one_step: bool,          // Do one step and pause.
    pub(super) reported: bool,             // The summary of the finished run was emitted.
    pub(super) last_update_duration: f64,  // Duration of the last step in seconds.
    pub(super) texture: TextureHandle,     // Texture handle of the field.
    pub(super) fps_limiter: FpsLimiter,    // Limits the frame rate to a certain value.
    pub(super) max_fps: f64,

    // Settings applied on the next restart.
    pub(super) next_pattern: Pattern,
    pub(super) next_grid_size: usize,
    pub(super) next_time_steps: u64,
    pub(super) config_error: Option<String>,
}

impl App {
    pub fn new(ctx: &Context, config: SimConfig, engine_kind: EngineKind) -> Self {
        let simulation = Simulation::new(
            engine_kind.create(config.initial_grid()),
            config.time_steps(),
        );
        let engine = simulation.engine();
        let frame = FrameBuffer::new(engine.side(), &engine.live_cells());
        Self {
            simulation,
            engine_kind,
            config,
            frame,
            is_paused: true,
            do_one_step: false,
            reported: false,
            last_update_duration: 0.,
            texture: ctx.load_texture(
                "Game of Life field",
                ColorImage::default(),
                Default::default(),
            ),
            fps_limiter: FpsLimiter::new(Config::MAX_FPS),
            max_fps: Config::MAX_FPS,
            next_pattern: config.pattern(),
            next_grid_size: config.grid_size(),
            next_time_steps: config.time_steps(),
            config_error: None,
        }
    }

    pub fn with_max_fps(mut self, max_fps: f64) -> Self {
        self.max_fps = max_fps;
        self
    }

    /// Start a new run with the settings from the control panel.
    pub fn restart(&mut self) {
        let config = match SimConfig::new(
            self.next_pattern,
            self.next_grid_size,
            self.next_time_steps,
            self.config.seed(),
        ) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("restart rejected: {}", err);
                self.config_error = Some(err.to_string());
                return;
            }
        };
        self.config_error = None;
        self.config = config;
        self.simulation = Simulation::new(
            self.engine_kind.create(config.initial_grid()),
            config.time_steps(),
        );
        self.frame = FrameBuffer::new(
            self.simulation.engine().side(),
            &self.simulation.engine().live_cells(),
        );
        self.is_paused = true;
        self.do_one_step = false;
        self.reported = false;
        self.last_update_duration = 0.;
    }

    fn update_simulation(&mut self) {
        if self.is_paused && !self.do_one_step {
            return;
        }
        self.do_one_step = false;

        let timer = Instant::now();
        self.simulation.advance(&mut self.frame);
        self.last_update_duration = timer.elapsed().as_secs_f64();

        if self.simulation.is_finished() && !self.reported {
            // the last generation is never passed to the sink, show it anyway
            let engine = self.simulation.engine();
            self.frame = FrameBuffer::new(engine.side(), &engine.live_cells());
            LogReporter.report(&self.simulation.report());
            self.reported = true;
            self.is_paused = true;
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        ctx.input(|input| {
            if input.key_pressed(Key::Space) {
                self.do_one_step = true;
            }
            if input.key_pressed(Key::E) && !input.modifiers.ctrl {
                self.is_paused = !self.is_paused;
            }
            if input.key_pressed(Key::R) && !input.modifiers.ctrl {
                self.restart();
            }
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // full-window panel
        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(Color32::LIGHT_GRAY),
            )
            .show(ctx, |ui| {
                ctx.request_repaint();

                self.handle_keys(ctx);
                self.update_simulation();
                self.draw(ui);
            });

        self.fps_limiter.set_max_fps(self.max_fps);
        self.fps_limiter.delay();
    }
}
