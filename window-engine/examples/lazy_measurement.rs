// Example: stale measurements, invalidation, and the refresh policy.
use window_engine::{ElementRect, MeasurementPolicy, WindowEngine, WindowOptions};

fn rows(heights: &[u32]) -> Vec<ElementRect> {
    let mut y = 0u64;
    heights
        .iter()
        .map(|&h| {
            let rect = ElementRect::new(0, y, 320, h);
            y += h as u64;
            rect
        })
        .collect()
}

fn main() {
    let none = std::iter::empty::<ElementRect>();
    let mut engine = WindowEngine::new(WindowOptions::new(40, 1));
    engine.recompute(120, 0, 50, none.clone());
    engine.recompute(120, 0, 50, rows(&[40, 40, 40, 40]));

    // Row 1 expands (e.g. an image finished loading). The default policy keeps the first value.
    let expanded = rows(&[40, 200, 40, 40]);
    engine.recompute(120, 0, 50, &expanded);
    println!("keep_first: row1={:?}", engine.measurement(1));

    // Opt in to re-measurement for just that row.
    engine.invalidate(1);
    engine.recompute(120, 0, 50, &expanded);
    println!("after invalidate: row1={:?}", engine.measurement(1));

    // Or re-measure everything that is materialized on every recompute.
    let mut live = WindowEngine::new(
        WindowOptions::new(40, 1).with_measurement_policy(MeasurementPolicy::Refresh),
    );
    live.recompute(120, 0, 50, none);
    live.recompute(120, 0, 50, rows(&[40, 40, 40, 40]));
    let w = live.recompute(120, 0, 50, expanded);
    println!("refresh: row1={:?} window={w:?}", live.measurement(1));
}
