use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use gpui_pointpanel::{
    CoordinateMapper, LogicalRange, PanelConfig, PixelBounds, Point, PointSource, PointsPanel,
    RedrawFlag, ScreenPoint,
};

fn scripted(values: Vec<(f64, f64)>) -> impl FnMut(&LogicalRange) -> Point + Send {
    let mut values = values.into_iter();
    move |_: &LogicalRange| values.next().map(Point::from).unwrap_or(Point::new(0.0, 0.0))
}

#[test]
fn three_point_panel_scenario() {
    let config = PanelConfig {
        capacity: 3,
        ..PanelConfig::default()
    };
    let panel = Arc::new(PointsPanel::new(&config).unwrap());
    let source = PointSource::with_generator(
        config.range().unwrap(),
        scripted(vec![(0.0, 0.0), (50.0, 50.0), (100.0, 100.0), (10.0, 10.0)]),
    );
    source.subscribe(&panel);
    for _ in 0..4 {
        source.generate_point();
    }

    assert_eq!(
        panel.snapshot(),
        vec![
            Point::new(50.0, 50.0),
            Point::new(100.0, 100.0),
            Point::new(10.0, 10.0)
        ]
    );

    let range = config.range().unwrap();
    let bounds = PixelBounds::new(600, 400, 20).unwrap();
    assert_eq!(CoordinateMapper::to_screen_x(50.0, &range, &bounds), 300);
    assert_eq!(CoordinateMapper::to_screen_y(50.0, &range, &bounds), 200);
    let markers: Vec<_> = panel.frame().points().collect();
    assert_eq!(
        markers,
        vec![
            ScreenPoint::new(300, 200),
            ScreenPoint::new(580, 20),
            ScreenPoint::new(76, 344)
        ]
    );
}

#[test]
fn panels_subscribed_to_one_source_agree() {
    let config = PanelConfig {
        capacity: 5,
        ..PanelConfig::default()
    };
    let source = PointSource::new(config.range().unwrap());
    let panels: Vec<_> = (0..3)
        .map(|_| Arc::new(PointsPanel::new(&config).unwrap()))
        .collect();
    for panel in &panels {
        source.subscribe(panel);
    }
    let produced: Vec<_> = (0..8).map(|_| source.generate_point()).collect();
    for panel in &panels {
        assert_eq!(panel.snapshot(), produced[3..].to_vec());
    }
}

#[test]
fn timer_thread_and_render_thread_share_a_panel() {
    let config = PanelConfig {
        capacity: 32,
        ..PanelConfig::default()
    };
    let flag = RedrawFlag::new();
    let panel = Arc::new(PointsPanel::with_redraw(&config, flag.clone()).unwrap());
    let source = Arc::new(PointSource::new(config.range().unwrap()));
    source.subscribe(&panel);

    let producers: Vec<_> = (0..3)
        .map(|_| {
            let source = Arc::clone(&source);
            thread::spawn(move || {
                for _ in 0..300 {
                    source.generate_point();
                }
            })
        })
        .collect();

    let frames = Arc::new(AtomicUsize::new(0));
    let renderer = {
        let panel = Arc::clone(&panel);
        let frames = Arc::clone(&frames);
        thread::spawn(move || {
            for _ in 0..200 {
                let render = panel.frame();
                assert!(render.points().count() <= 32);
                frames.fetch_add(1, Ordering::Relaxed);
            }
        })
    };

    for producer in producers {
        producer.join().unwrap();
    }
    renderer.join().unwrap();

    assert!(flag.take());
    assert_eq!(frames.load(Ordering::Relaxed), 200);
    assert_eq!(panel.buffer().generation(), 900);
    let snapshot = panel.snapshot();
    assert_eq!(snapshot.len(), 32);
    assert!(snapshot.iter().all(|point| panel.range().contains(*point)));
}
