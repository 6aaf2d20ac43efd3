// Example: a long list where only the items near the viewport stay mounted.
use offscreen::{
    Callbacks, Coordinator, Geometry, ManualHost, PlaceholderOptions, Registration,
};

fn main() {
    let options = PlaceholderOptions::new()
        .with_offsets(100.0, 100.0)
        .with_defer_apply_to_frame(false);
    let mut c = Coordinator::new(options, ManualHost::new(500.0));

    let mut ids = Vec::new();
    for i in 0..1_000usize {
        let lifecycle = Callbacks::new(
            move |p| {
                if i % 100 == 0 {
                    println!("mount #{i} at top={}", p.top);
                }
                Ok(())
            },
            || Ok(()),
        );
        let id = c
            .register_element(Registration::new("list", Geometry::new(45.0, 5.0), lifecycle), 0)
            .expect("mount");
        ids.push(id);
    }
    println!("total_height={}", c.group(&"list").unwrap().total_height());

    // The registration burst resolves in a single debounced cycle.
    println!("tick: {:?}", c.tick(1).unwrap());

    c.host_mut().scroll_top = 20_000.0;
    println!("scroll: {:?}", c.on_scroll(2).unwrap());

    let mounted = ids
        .iter()
        .filter(|id| c.item(**id).is_some_and(|it| it.is_mounted()))
        .count();
    println!("mounted={mounted} of {}", ids.len());
}
