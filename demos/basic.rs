// Example: a fluid slideshow with key controls and autoplay, and a fixed strip of thumbnails.
use revolver::{
    Carousel, CarouselOptions, ControlsOptions, Event, InputEvent, InstantAnimator, KEY_LEFT,
    KEY_RIGHT,
};

fn main() {
    let slides = ["intro", "features", "pricing", "faq"];
    let mut fluid = Carousel::new(
        slides,
        CarouselOptions::fluid(800)
            .with_controls(ControlsOptions {
                arrows: true,
                key: true,
            })
            .with_autoplay(500),
        InstantAnimator::new(),
        0,
    );
    fluid.on(Event::AfterChange, |s| {
        println!(
            "fluid: item {} (page {}/{})",
            s.current_item_index,
            s.current_page_index + 1,
            s.page_count()
        );
    });

    fluid.handle_input(InputEvent::KeyDown { key_code: KEY_RIGHT }, 100);
    fluid.handle_input(InputEvent::KeyDown { key_code: KEY_LEFT }, 200);
    for now_ms in (0..8_000).step_by(250) {
        fluid.tick(now_ms);
    }

    let mut fixed = Carousel::new(
        0..9u32,
        CarouselOptions::fixed(120, 400)
            .with_start_at_item(2)
            .with_infinite(true),
        InstantAnimator::new(),
        0,
    );
    println!(
        "fixed: {} per page, pages={:?}, clones per side={}",
        fixed.items_per_page(),
        fixed.pages(),
        fixed.state().clone_count
    );
    for now_ms in 1..=4 {
        fixed.next(now_ms * 10);
        fixed.tick(now_ms * 10 + 1);
        let current = fixed.item_at(fixed.current_item_index()).map(|it| *it.value());
        println!("fixed: current={current:?} position={}", fixed.position());
    }
    println!("lazy loads: {:?}", fixed.take_lazy_loads());
}
