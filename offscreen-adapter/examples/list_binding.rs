// Example: bind a keyed data set, then simulate a few frames of scrolling.
use offscreen::{ManualHost, PlaceholderOptions};
use offscreen_adapter::{Controller, style};

struct Row {
    label: String,
}

impl Drop for Row {
    fn drop(&mut self) {
        println!("teardown {}", self.label);
    }
}

fn main() {
    let mut c: Controller<usize, &str, ManualHost> =
        Controller::new(PlaceholderOptions::new(), ManualHost::new(300.0));
    c.coordinator_mut().set_on_layout(Some(|container: &&str, layout: offscreen::GroupLayout| {
        println!("{container}: {}", style::container_style(layout.total_height));
    }));

    let mut handles = Vec::new();
    for key in 0..50usize {
        let handle = c
            .bind(
                key,
                "messages",
                "40, 8",
                move |p| {
                    println!("mount row {key}: {}", style::item_style(p));
                    Ok(Row {
                        label: format!("row {key}"),
                    })
                },
                0,
            )
            .expect("bind");
        handles.push(handle);
    }

    let mut now = 1;
    for scroll_top in [0.0, 600.0, 1200.0] {
        c.coordinator_mut().host_mut().scroll_top = scroll_top;
        c.on_scroll(now).unwrap();
        println!("frame {now}: {:?}", c.frame(now).unwrap());
        now += 16;
    }

    let live = handles.iter().filter(|h| h.is_mounted()).count();
    println!("live rows: {live}");
}
