// Example: infinite carousel with autoplay, driven by a simulated clock.
use carousel::{Carousel, CarouselOptions, Frame, WrapMode};

fn main() {
    let options = CarouselOptions::new()
        .with_wrap(WrapMode::Infinite)
        .with_autoplay(true)
        .with_interval_ms(2_000);

    let render = |f: &Frame| {
        println!(
            "t={:>5} display={} logical={} animate={} indicator={}",
            f.at_ms, f.display_index, f.logical_index, f.animate, f.indicator
        );
    };

    let Ok(mut c) = Carousel::new(vec!["dawn", "noon", "dusk"], options, render, 0) else {
        eprintln!("no slides");
        return;
    };

    // A swipe to the left at t=500 advances, and pushes the next autoplay tick to t=2500.
    c.on_gesture_begin(300.0);
    c.on_gesture_end(120.0, 500);

    let mut now_ms = 0u64;
    while now_ms < 10_000 {
        now_ms += 16;
        c.tick(now_ms);
    }

    println!("next deadline: {:?}", c.next_deadline());
    c.teardown();
    println!("after teardown: {:?}", c.next_deadline());
}
