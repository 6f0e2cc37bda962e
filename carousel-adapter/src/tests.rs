use crate::*;

use alloc::vec;
use alloc::vec::Vec;

use carousel::{
    AutoplayState, Carousel, CarouselError, CarouselOptions, Frame, IndicatorView, NoIndicators,
    RawOptions, TransitionState, WrapMode,
};

type TestController = Controller<char, Vec<Frame>, NoIndicators>;

fn mount(markup: Markup<char>, explicit: RawOptions) -> TestController {
    Controller::mount(markup, explicit, Vec::new(), NoIndicators, 0).unwrap()
}

fn slides() -> Vec<char> {
    vec!['a', 'b', 'c']
}

#[test]
fn mount_requires_track_and_slides() {
    let err = Controller::mount(
        Markup::new(slides()).without_track(),
        RawOptions::new(),
        Vec::<Frame>::new(),
        NoIndicators,
        0,
    )
    .unwrap_err();
    assert_eq!(err, CarouselError::MissingTrack);

    let err = Controller::mount(
        Markup::<char>::new(Vec::new()),
        RawOptions::new(),
        Vec::<Frame>::new(),
        NoIndicators,
        0,
    )
    .unwrap_err();
    assert_eq!(err, CarouselError::NoSlides);
}

#[test]
fn markup_hints_feed_options() {
    let markup = Markup::new(slides())
        .with_class("infinite-loop")
        .with_class("auto-play")
        .with_class("unrelated")
        .with_data("width", "500bogus")
        .with_data("height", "300px")
        .with_data("mode", "responsive");
    let c = mount(markup, RawOptions::new().with_interval("2"));

    let o = c.carousel().options();
    assert_eq!(o.wrap, WrapMode::Infinite);
    assert!(o.autoplay);
    assert!(!o.hover_pause);
    assert_eq!(o.interval_ms, 2_000);
    assert_eq!(o.width, "100%");
    assert_eq!(o.height, "300px");
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Running);
    assert_eq!(c.carousel().display_index(), 1);
}

#[test]
fn explicit_options_override_markup() {
    let markup = Markup::new(slides())
        .with_class("infinite-loop")
        .with_data("mode", "fullscreen");
    let c = mount(
        markup,
        RawOptions::new().with_infinite(false).with_mode("responsive"),
    );
    assert_eq!(c.carousel().options().wrap, WrapMode::Rewind);
    assert_eq!(c.layout().container_margin, "0 auto");
}

#[test]
fn layout_follows_mode() {
    let full = Layout::resolve(&CarouselOptions::from_raw(
        &RawOptions::new().with_mode("fullscreen").with_width("40%"),
    ));
    assert_eq!(full.container_width, "100vw");
    assert_eq!(full.container_height, "100vh");
    assert_eq!(full.image_height, "100vh");
    assert!(full.reset_page_margins);

    let responsive = Layout::resolve(
        &CarouselOptions::new()
            .with_width("640px")
            .with_height("20rem"),
    );
    assert_eq!(responsive.container_width, "640px");
    assert_eq!(responsive.container_height, "20rem");
    assert_eq!(responsive.image_width, "100%");
    assert_eq!(responsive.image_height, "20rem");
    assert!(!responsive.reset_page_margins);
}

#[test]
fn unbound_sources_are_ignored() {
    let mut c = mount(Markup::new(slides()), RawOptions::new());
    assert!(!c.bindings().buttons);
    assert!(!c.bindings().indicators);
    assert!(!c.bindings().hover);

    assert!(!c.handle(InputEvent::NextButton, 0));
    assert!(!c.handle(InputEvent::IndicatorClick(2), 0));
    assert_eq!(c.carousel().current_logical_index(), 0);

    assert!(c.handle(InputEvent::Key(Key::from_name("ArrowRight")), 0));
    assert_eq!(c.carousel().current_logical_index(), 1);
}

#[test]
fn keyboard_can_be_scoped_out() {
    let mut c = mount(Markup::new(slides()), RawOptions::new());
    let bindings = c.bindings().with_keyboard(false);
    c.set_bindings(bindings);
    assert!(!c.handle(InputEvent::Key(Key::ArrowLeft), 0));
    assert_eq!(Key::from_name("Enter"), Key::Other);
    assert!(!c.handle(InputEvent::Key(Key::Other), 0));
}

#[test]
fn buttons_and_indicators_navigate() {
    let mut c = mount(
        Markup::new(slides()).with_buttons().with_indicators(),
        RawOptions::new(),
    );
    assert!(c.handle(InputEvent::PrevButton, 0));
    assert_eq!(c.carousel().current_logical_index(), 2);

    assert!(!c.handle(InputEvent::IndicatorClick(-1), 10));
    assert!(!c.handle(InputEvent::IndicatorClick(3), 10));
    assert_eq!(c.carousel().current_logical_index(), 2);

    // Direct selection is obeyed while the gate is locked.
    assert_eq!(c.carousel().transition_state(), TransitionState::Locked);
    assert!(c.handle(InputEvent::IndicatorClick(1), 10));
    assert_eq!(c.carousel().current_logical_index(), 1);
}

#[test]
fn instances_do_not_share_input() {
    let mut a = mount(Markup::new(slides()).with_buttons(), RawOptions::new());
    let mut b = mount(Markup::new(slides()), RawOptions::new());

    for c in [&mut a, &mut b] {
        c.handle(InputEvent::NextButton, 0);
    }
    assert_eq!(a.carousel().current_logical_index(), 1);
    assert_eq!(b.carousel().current_logical_index(), 0);
}

#[test]
fn swipe_events_navigate() {
    let mut c = mount(Markup::new(slides()), RawOptions::new());
    assert!(!c.handle(InputEvent::GestureBegin { x: 200.0 }, 0));
    assert!(c.handle(InputEvent::GestureEnd { x: 140.0 }, 0));
    assert_eq!(c.carousel().current_logical_index(), 1);

    assert!(c.handle(InputEvent::TransitionEnd { property: "transform" }, 100));
    c.handle(InputEvent::GestureBegin { x: 200.0 }, 200);
    assert!(!c.handle(InputEvent::GestureEnd { x: 160.0 }, 200));
    assert_eq!(c.carousel().current_logical_index(), 1);
}

#[test]
fn hover_binding_requires_autoplay_and_hover_pause() {
    let mut c = mount(
        Markup::new(slides())
            .with_class("auto-play")
            .with_class("hover-pause"),
        RawOptions::new(),
    );
    assert!(c.bindings().hover);
    assert!(c.handle(InputEvent::PointerEnter, 0));
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Paused);
    assert!(c.handle(InputEvent::PointerLeave, 100));
    assert_eq!(c.carousel().autoplay_state(), AutoplayState::Running);

    let mut c = mount(
        Markup::new(slides()).with_class("hover-pause"),
        RawOptions::new(),
    );
    assert!(!c.bindings().hover);
    assert!(!c.handle(InputEvent::PointerEnter, 0));
}

#[test]
fn easing_follows_css_timing_curves() {
    assert_eq!(Easing::Linear.sample(0.25), 0.25);
    assert_eq!(Easing::default(), Easing::EaseInOut);

    let mid = Easing::EaseInOut.sample(0.5);
    assert!(mid > 0.499 && mid < 0.501, "{mid}");
    assert!(Easing::EaseIn.sample(0.25) < 0.25);
    assert!(Easing::EaseOut.sample(0.25) > 0.25);

    for easing in [Easing::Ease, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
        assert!(easing.sample(0.0) < 0.001, "{easing:?}");
        assert!(easing.sample(1.0) > 0.999, "{easing:?}");
        let mut last = 0.0;
        for i in 0..=20 {
            let y = easing.sample(i as f32 / 20.0);
            assert!(y >= last, "{easing:?} at {i}");
            last = y;
        }
    }
}

#[test]
fn strip_tween_lands_on_target_display() {
    let t = StripTween::new(1.0, 2, 0, 100, Easing::Ease);
    let mut last = 1.0;
    for now_ms in [0u64, 10, 20, 40, 80, 99] {
        let p = t.position(now_ms);
        assert!(p >= last);
        assert!(p <= 2.0);
        last = p;
    }
    assert_eq!(t.position(100), 2.0);
    assert!(t.is_done(100));
    assert_eq!(t.progress(50), 0.5);
}

#[test]
fn animator_continues_from_interrupted_position() {
    let animator = StripAnimator::new(Vec::<Frame>::new(), 100, Easing::Linear);
    let mut c = Carousel::new(vec![0u8; 4], CarouselOptions::new(), animator, 0).unwrap();

    assert!(c.next(0));
    assert_eq!(c.render_sink_mut().tick(50).map(|s| s.offset_percent), Some(50));

    // Direct selection mid-slide starts from 0.5, not from the old target.
    assert!(c.go_to(3, 50));
    let s = c.render_sink_mut().tick(100).unwrap();
    assert_eq!(s.position, 1.75);
    assert_eq!(s.offset_percent, 175);
    assert_eq!(s.caption_offset_percent, 125);
    assert!(!s.finished);

    let s = c.render_sink_mut().tick(150).unwrap();
    assert!(s.finished);
    assert_eq!(s.offset_percent, 300);
    assert_eq!(c.render_sink().caption_offset_percent(), 250);
}

#[test]
fn animator_completion_releases_gate_before_fallback() {
    let animator = StripAnimator::new(Vec::<Frame>::new(), 300, Easing::Linear);
    let mut c = Carousel::new(
        slides(),
        CarouselOptions::new().with_transition_ms(1_000),
        animator,
        0,
    )
    .unwrap();
    assert_eq!(c.render_sink().offset_percent(), 0);

    assert!(c.next(0));
    assert!(c.render_sink().is_animating());
    let mid = c.render_sink_mut().tick(150).unwrap();
    assert_eq!(mid.offset_percent, 50);
    assert!(!mid.finished);

    let end = c.render_sink_mut().tick(300).unwrap();
    assert!(end.finished);
    assert_eq!(end.offset_percent, 100);
    assert!(c.on_transition_end("transform"));
    assert_eq!(c.transition_state(), TransitionState::Idle);
    assert_eq!(c.render_sink_mut().tick(400), None);
    assert_eq!(c.render_sink().inner().len(), 2);
}

#[test]
fn controller_tick_feeds_completion_signal() {
    let mut c = mount(
        Markup::new(slides()).with_buttons(),
        RawOptions::new().with_transition_speed("0.2"),
    );
    assert!(c.handle(InputEvent::NextButton, 0));
    assert!(c.is_animating());

    let mut last = 0;
    let mut now_ms = 0;
    while c.carousel().transition_state() == TransitionState::Locked {
        now_ms += 20;
        if let Some(s) = c.tick(now_ms) {
            assert!(s.offset_percent >= last);
            last = s.offset_percent;
        }
        assert!(now_ms <= 200);
    }
    assert_eq!(last, 100);
    assert!(!c.is_animating());
    assert!(c.handle(InputEvent::NextButton, now_ms));
}

#[test]
fn snap_jumps_then_settle_animates() {
    let mut c = mount(
        Markup::new(slides()).with_buttons().with_class("infinite-loop"),
        RawOptions::new(),
    );
    let mut now_ms = 0;
    for _ in 0..3 {
        assert!(c.handle(InputEvent::NextButton, now_ms));
        for _ in 0..40 {
            now_ms += 16;
            c.tick(now_ms);
        }
    }
    assert_eq!(c.carousel().display_index(), 4);
    assert_eq!(c.carousel().render_sink().offset_percent(), 400);

    assert!(c.handle(InputEvent::NextButton, now_ms));
    assert!(!c.is_animating());
    assert_eq!(c.carousel().render_sink().offset_percent(), 100);

    c.tick(now_ms + 50);
    assert!(c.is_animating());
    assert_eq!(c.carousel().display_index(), 2);

    let frames = c.render_sink();
    assert!(!frames[frames.len() - 2].animate);
    assert!(frames[frames.len() - 1].animate);
}

#[test]
fn indicators_reach_the_sink() {
    let mut c = Controller::mount(
        Markup::new(slides()).with_indicators(),
        RawOptions::new(),
        Vec::<Frame>::new(),
        Vec::<IndicatorView>::new(),
        0,
    )
    .unwrap();
    assert!(c.handle(InputEvent::IndicatorClick(2), 0));
    let views = c.carousel().indicator_sink();
    assert_eq!(
        views.last(),
        Some(&IndicatorView::Markers {
            count: 3,
            active: 2
        })
    );
}

#[test]
fn teardown_stops_the_controller() {
    let mut c = mount(
        Markup::new(slides()).with_buttons().with_class("auto-play"),
        RawOptions::new(),
    );
    c.handle(InputEvent::NextButton, 0);
    c.teardown();
    assert_eq!(c.carousel().next_deadline(), None);
    assert!(!c.handle(InputEvent::NextButton, 10));
    c.tick(60_000);
    assert_eq!(c.carousel().current_logical_index(), 1);
}
