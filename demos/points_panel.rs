//! GPUI window with a point panel, a "Generate point" button and an
//! auto-generation toggle.
//!
//! Run with `cargo run --example points_panel --features gpui -- -n 20`.

mod common;

use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use clap::Parser;
use gpui::prelude::*;
use gpui::{
    AppContext, Application, Bounds, Entity, MouseButton, WindowBounds, WindowOptions, div, px,
    rgb, size,
};

use gpui_pointpanel::{GpuiPointsView, PointSource, PointsPanel, RedrawFlag, spawn_redraw_loop};

struct PointsDemo {
    panel: Entity<GpuiPointsView>,
    source: Arc<PointSource>,
    auto: Arc<AtomicBool>,
}

impl PointsDemo {
    fn toggle_auto(&mut self, cx: &mut gpui::Context<Self>) {
        let enabled = !self.auto.load(Ordering::Acquire);
        self.auto.store(enabled, Ordering::Release);
        log::info!("auto-generation {}", if enabled { "on" } else { "off" });
        cx.notify();
    }
}

impl gpui::Render for PointsDemo {
    fn render(
        &mut self,
        _window: &mut gpui::Window,
        cx: &mut gpui::Context<Self>,
    ) -> impl gpui::IntoElement {
        let auto_label = if self.auto.load(Ordering::Acquire) {
            "Stop auto-generation"
        } else {
            "Start auto-generation"
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .child(div().flex_1().child(self.panel.clone()))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .justify_center()
                    .gap_2()
                    .p_2()
                    .child(
                        button("Generate point").on_mouse_down(
                            MouseButton::Left,
                            cx.listener(|this, _, _, _| {
                                this.source.generate_point();
                            }),
                        ),
                    )
                    .child(button(auto_label).on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _, _, cx| {
                            this.toggle_auto(cx);
                        }),
                    )),
            )
    }
}

fn button(label: &'static str) -> gpui::Div {
    div()
        .px_3()
        .py_1()
        .border_1()
        .border_color(rgb(0x808080))
        .bg(rgb(0xf0f0f0))
        .child(label)
}

fn spawn_timer(source: Arc<PointSource>, auto: Arc<AtomicBool>, interval: Duration) {
    thread::spawn(move || {
        loop {
            thread::sleep(interval);
            if auto.load(Ordering::Acquire) {
                source.generate_point();
            }
        }
    });
}

fn main() -> ExitCode {
    common::init_logging();
    let args = common::Args::parse();
    let config = args.config();

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

    let auto = Arc::new(AtomicBool::new(false));
    spawn_timer(
        Arc::clone(&source),
        Arc::clone(&auto),
        Duration::from_millis(args.interval_ms),
    );

    let (width, height) = (config.pixel_width as f32, config.pixel_height as f32 + 48.0);
    Application::new().run(move |cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(width), px(height)),
                cx,
            ))),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            let view = cx.new(|_| GpuiPointsView::new(Arc::clone(&panel)));
            spawn_redraw_loop(window, cx, view.clone(), flag.clone());
            cx.new(|_| PointsDemo {
                panel: view,
                source: Arc::clone(&source),
                auto: Arc::clone(&auto),
            })
        });
        if let Err(err) = opened {
            log::error!("failed to open window: {err}");
            cx.quit();
        }
    });
    ExitCode::SUCCESS
}
