// Example: infinite scrolling with a one-shot "load more" event.
use window_engine::{ElementRect, Frame, WindowOptions};
use window_engine_adapter::Controller;

fn main() {
    let mut loaded = 40usize;
    let mut c = Controller::<&str>::new(WindowOptions::new(32, 2).with_tail_threshold(5));
    c.set_data_key("inbox");

    let mut scroll = 0u64;
    for frame in 0..40 {
        let rendered: Vec<ElementRect> = c
            .materialized()
            .map(|i| ElementRect::new(0, i as u64 * 32, 640, 32))
            .collect();
        let out = c.on_frame(Frame::new(480, scroll, loaded), rendered);

        if !out.diff.is_empty() {
            println!(
                "frame={frame} mount={:?} unmount={:?}",
                out.diff.mount_ranges().collect::<Vec<_>>(),
                out.diff.unmount_ranges().collect::<Vec<_>>()
            );
        }
        if out.tail_reached {
            loaded += 40;
            println!("frame={frame} load more -> {loaded} items");
        }
        scroll += 64;
    }

    // Switching folders replaces the data set; measurements from "inbox" must not leak.
    c.set_data_key("archive");
    println!("after switch: range={:?}", c.engine().range());
}
