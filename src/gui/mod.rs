mod app;
mod config;
mod draw;
mod frame;

pub use app::App;
pub use config::Config;
use frame::FrameBuffer;
