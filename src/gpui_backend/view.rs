use std::sync::Arc;
use std::time::Duration;

use gpui::prelude::*;
use gpui::{App, AsyncWindowContext, Context, Entity, Timer, Window, canvas, div};

use crate::panel::{PointsPanel, RedrawFlag};

use super::paint::{paint_frame, to_hsla};

/// How often the redraw flag is polled.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A GPUI view that paints a [`PointsPanel`].
///
/// The view follows the element size: every layout pass forwards the canvas
/// bounds to the panel before building the frame.
#[derive(Clone)]
pub struct GpuiPointsView {
    panel: Arc<PointsPanel>,
}

impl GpuiPointsView {
    /// Create a view over a shared panel.
    pub fn new(panel: Arc<PointsPanel>) -> Self {
        Self { panel }
    }
}

impl Render for GpuiPointsView {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let panel = Arc::clone(&self.panel);
        let background = to_hsla(panel.theme().background);

        div().size_full().bg(background).child(
            canvas(
                move |bounds, _, _| {
                    let width = f32::from(bounds.size.width).round().max(1.0) as u32;
                    let height = f32::from(bounds.size.height).round().max(1.0) as u32;
                    if let Err(err) = panel.resize(width, height) {
                        log::warn!("panel resize rejected: {err}");
                    }
                    (bounds.origin, panel.frame())
                },
                move |_, (origin, frame), window, cx| {
                    paint_frame(&frame, origin, window, cx);
                },
            )
            .size_full(),
        )
    }
}

/// Poll `flag` on the window's executor and notify `view` when it is raised.
///
/// Producers may append from any thread; the repaint always happens on the
/// UI thread.
pub fn spawn_redraw_loop(
    window: &mut Window,
    cx: &mut App,
    view: Entity<GpuiPointsView>,
    flag: RedrawFlag,
) {
    window
        .spawn(cx, move |cx: &mut AsyncWindowContext| {
            let mut cx = cx.clone();
            async move {
                loop {
                    Timer::after(FRAME_INTERVAL).await;
                    if !flag.take() {
                        continue;
                    }
                    let updated = cx.update(|_, cx| {
                        view.update(cx, |_view, view_cx| view_cx.notify());
                    });
                    if updated.is_err() {
                        log::debug!("window closed, stopping redraw loop");
                        break;
                    }
                }
            }
        })
        .detach();
}
