use clap::Parser;
use gpui_pointpanel::PanelConfig;

/// Panel parameters collected from the command line.
#[derive(Parser, Debug)]
#[command(about = "Show the most recent N generated points")]
pub struct Args {
    /// Panel width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: u32,

    /// Panel height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Minimum X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_x: f64,

    /// Maximum X
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max_x: f64,

    /// Minimum Y
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_y: f64,

    /// Maximum Y
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max_y: f64,

    /// Number of points N to keep
    #[arg(short = 'n', long, default_value_t = 10)]
    pub points: usize,

    /// Auto-generation period in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub interval_ms: u64,
}

impl Args {
    pub fn config(&self) -> PanelConfig {
        PanelConfig {
            pixel_width: self.width,
            pixel_height: self.height,
            min_x: self.min_x,
            max_x: self.max_x,
            min_y: self.min_y,
            max_y: self.max_y,
            capacity: self.points,
            ..PanelConfig::default()
        }
    }
}

pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("POINTPANEL_LOG")
        .init();
}
