//! Producer on a timer thread, consumer polling for redraws on the main thread.
//!
//! Run with `cargo run --example headless -- --interval-ms 200 --frames 10`.

mod common;

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use clap::Parser;
use gpui_pointpanel::{PointSource, PointsPanel, RedrawFlag, RenderCommand};

#[derive(Parser, Debug)]
struct HeadlessArgs {
    #[command(flatten)]
    panel: common::Args,

    /// Number of redraws to print before exiting
    #[arg(long, default_value_t = 5)]
    frames: usize,
}

fn main() -> ExitCode {
    common::init_logging();
    let args = HeadlessArgs::parse();
    let config = args.panel.config();

    let flag = RedrawFlag::new();
    let panel = match PointsPanel::with_redraw(&config, flag.clone()) {
        Ok(panel) => Arc::new(panel),
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let source = Arc::new(PointSource::new(panel.range()));
    source.subscribe(&panel);

    let running = Arc::new(AtomicBool::new(true));
    let producer = {
        let source = Arc::clone(&source);
        let running = Arc::clone(&running);
        let interval = Duration::from_millis(args.panel.interval_ms);
        thread::spawn(move || {
            while running.load(Ordering::Acquire) {
                thread::sleep(interval);
                source.generate_point();
            }
        })
    };

    let mut printed = 0;
    while printed < args.frames {
        thread::sleep(Duration::from_millis(16));
        if !flag.take() {
            continue;
        }
        printed += 1;
        for command in panel.frame().commands() {
            match command {
                RenderCommand::Points { points, .. } => {
                    let pixels: Vec<_> = points.iter().map(|p| (p.x, p.y)).collect();
                    println!("  markers {pixels:?}");
                }
                RenderCommand::Text { text, .. } => println!("  {text}"),
                _ => {}
            }
        }
        println!();
    }

    running.store(false, Ordering::Release);
    if producer.join().is_err() {
        log::error!("producer thread panicked");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
