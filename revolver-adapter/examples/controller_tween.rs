use revolver::CarouselOptions;
use revolver_adapter::{Controller, Easing};

fn main() {
    // Example: a controller driving tweened page moves without holding any UI objects.
    //
    // An adapter would:
    // - call next/previous/handle_input in response to UI events
    // - call tick(now_ms) in a frame loop / timer
    // - apply the returned position (or `offset()`) to the real container
    let options = CarouselOptions::fixed(200, 600)
        .with_infinite(true)
        .with_easing(Easing::EaseInOutCubic)
        .with_speed_ms(240);
    let mut c = Controller::new(0..7, options, 0);
    println!("pages={:?}", c.carousel().pages());

    let mut now_ms = 0u64;
    for _ in 0..3 {
        c.previous(now_ms);
        loop {
            now_ms += 16;
            if let Some(position) = c.tick(now_ms) {
                if now_ms.is_multiple_of(80) {
                    println!("t={now_ms} position={position} offset={:?}", c.offset());
                }
            }
            if !c.carousel().is_busy() {
                break;
            }
        }
        println!(
            "settled: item={} page={} position={}",
            c.carousel().current_item_index(),
            c.carousel().current_page_index(),
            c.position()
        );
    }
}
