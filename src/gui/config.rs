use eframe::egui::Color32;

pub struct Config;

impl Config {
    pub const FRAME_MARGIN: f32 = 20.;
    pub const CONTROL_PANEL_WIDTH: f32 = 360.;
    pub const TEXT_SIZE: f32 = 16.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const ERROR_COLOR: Color32 = Color32::DARK_RED;
    pub const BUTTON_STROKE_WIDTH: f32 = 3.;
    pub const BUTTON_STROKE_COLOR: Color32 = Color32::DARK_GRAY;
    pub const BUTTON_FILL_COLOR: Color32 = Color32::LIGHT_GRAY;

    pub const GAP_ABOVE_STATS: f32 = 30.;

    pub const MAX_FPS: f64 = 20.;
    pub const MAX_GRID_SIZE: usize = 1024;
    pub const MAX_TIME_STEPS: u64 = 1_000_000;

    pub const ALIVE: u8 = u8::MAX;
    pub const DEAD: u8 = 24;
}
