// Example: compute now, apply on the next display frame, and drop plans that went stale.
use offscreen::{Callbacks, Coordinator, Geometry, ManualHost, PlaceholderOptions, Registration};

fn main() {
    let mut c = Coordinator::new(PlaceholderOptions::new(), ManualHost::new(400.0));
    for _ in 0..200 {
        c.register_element(
            Registration::new(0u32, Geometry::fixed(30.0), Callbacks::new(|_| Ok(()), || Ok(()))),
            0,
        )
        .expect("mount");
    }
    c.tick(1).unwrap();
    println!("first frame: {:?}", c.on_animation_frame().unwrap());

    // Two scroll events before the next frame: only the latest plan survives.
    c.host_mut().scroll_top = 900.0;
    let first = c.compute_update().unwrap().expect("plan");
    c.host_mut().scroll_top = 1800.0;
    let second = c.compute_update().unwrap().expect("plan");

    println!("older plan: {:?}", c.apply_update(first).unwrap());
    println!("newer plan: {:?}", c.apply_update(second).unwrap());
}
