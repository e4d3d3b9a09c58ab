// Example: drive the engine the way a host list widget would.
use window_engine::{ElementRect, WindowEngine, WindowOptions};

fn main() {
    // 10_000 rows of roughly 24px, 3 extra rows on each side.
    let total = 10_000usize;
    let mut engine = WindowEngine::new(WindowOptions::new(24, 3).with_tail_threshold(20));

    // Pretend every row is actually 30px tall, laid out one after another.
    let layout = |range: std::ops::Range<usize>| -> Vec<ElementRect> {
        range
            .map(|i| ElementRect::new(0, i as u64 * 30, 480, 30))
            .collect()
    };

    let mut window = engine.recompute(600, 0, total, std::iter::empty::<ElementRect>());
    println!("initial: {window:?}");

    for scroll in [0u64, 300, 900, 2_400, 2_400] {
        let rendered = layout(window.materialize_range());
        window = engine.recompute(600, scroll, total, rendered);
        println!(
            "scroll={scroll} range={:?} head={} tail={} update={} tail_reached={}",
            window.materialize_range(),
            window.padding_head,
            window.padding_tail,
            window.should_update,
            window.reached_tail,
        );
    }

    println!("measured_len={}", engine.measurement_cache_len());
}
