use carousel::{Frame, NoIndicators, RawOptions};
use carousel_adapter::{Controller, InputEvent, Key, Markup};

fn main() {
    // Example: a markup-mounted controller driving the strip tween for a renderer without native
    // transitions (e.g. a TUI).
    //
    // An adapter would:
    // - describe the container it found (track, buttons, indicators, classes, data attributes)
    // - forward input events addressed to this instance
    // - call tick(now_ms) in a frame loop and draw the returned strip offset
    let markup = Markup::new(vec!["harbor", "ridge", "meadow", "dunes"])
        .with_buttons()
        .with_indicators()
        .with_class("infinite-loop")
        .with_data("width", "80vw");

    let render = |f: &Frame| {
        println!(
            "commit t={} display={} logical={} animate={}",
            f.at_ms, f.display_index, f.logical_index, f.animate
        );
    };

    let mut c = match Controller::mount(
        markup,
        RawOptions::new().with_transition_speed("0.24"),
        render,
        NoIndicators,
        0,
    ) {
        Ok(c) => c,
        Err(err) => {
            eprintln!("mount failed: {err}");
            return;
        }
    };
    println!("layout={:?}", c.layout());

    let script = [
        (0u64, InputEvent::PrevButton),
        (400, InputEvent::Key(Key::from_name("ArrowRight"))),
        (800, InputEvent::IndicatorClick(3)),
    ];

    let mut now_ms = 0u64;
    let mut script = script.into_iter().peekable();
    while now_ms < 1_400 {
        while let Some((_, event)) = script.next_if(|(at, _)| *at <= now_ms) {
            c.handle(event, now_ms);
        }
        if let Some(s) = c.tick(now_ms) {
            if s.finished || now_ms % 80 == 0 {
                println!("t={now_ms} offset={}% finished={}", s.offset_percent, s.finished);
            }
        }
        now_ms += 16;
    }

    println!("state={:?}", c.carousel().snapshot());
}
