use crate::*;

use alloc::string::String;
use alloc::vec::Vec;
use std::format;

use offscreen::{
    Geometry, Lifecycle, ManualHost, Placement, PlaceholderOptions, Registration, UpdateOutcome,
};

#[test]
fn parses_height_with_and_without_margins() {
    assert_eq!(parse_geometry("120").unwrap(), Geometry::new(120.0, 0.0));
    assert_eq!(parse_geometry(" 120 , 8 ").unwrap(), Geometry::new(120.0, 8.0));
    assert_eq!(parse_geometry("40.5,0.5").unwrap().height, 41.0);
}

#[test]
fn rejects_malformed_attributes() {
    assert_eq!(parse_geometry("  "), Err(ParseGeometryError::Empty));
    assert_eq!(
        parse_geometry("1,2,3"),
        Err(ParseGeometryError::TooManyValues(3))
    );
    assert_eq!(
        parse_geometry("10, abc"),
        Err(ParseGeometryError::InvalidNumber {
            index: 1,
            value: String::from("abc")
        })
    );
    assert!(matches!(
        parse_geometry("10,"),
        Err(ParseGeometryError::InvalidNumber { index: 1, .. })
    ));
}

#[test]
fn styles_match_the_reserved_layout() {
    assert_eq!(
        style::container_style(1500.0),
        "height:1500px;position:relative;transform:translatez(0);"
    );
    assert_eq!(
        style::item_style(Placement {
            top: 250.0,
            inner_height: 42.5
        }),
        "height:42.5px;position:absolute;top:250px;transform:translatez(0);"
    );
    assert_eq!(style::placeholder_style(900.0), "height:900px;");
}

#[test]
fn slot_builds_and_drops_content() {
    let (mut slot, handle) = Slot::new(|p: Placement| Ok(format!("row@{}", p.top)));
    assert!(!handle.is_mounted());

    let placement = Placement {
        top: 100.0,
        inner_height: 50.0,
    };
    slot.mount(placement).unwrap();
    assert_eq!(handle.placement(), Some(placement));
    assert_eq!(handle.with_content(|s| s.clone()).as_deref(), Some("row@100"));

    slot.unmount().unwrap();
    assert!(!handle.is_mounted());
    assert_eq!(handle.placement(), None);

    slot.mount(placement).unwrap();
    assert_eq!(handle.mount_count(), 2);
}

#[test]
fn slot_factory_failure_leaves_it_empty() {
    let (mut slot, handle) = Slot::<String, _>::new(|_| Err("no template".into()));
    assert!(
        slot.mount(Placement {
            top: 0.0,
            inner_height: 10.0
        })
        .is_err()
    );
    assert!(!handle.is_mounted());
    assert_eq!(handle.mount_count(), 0);
}

fn controller() -> Controller<u32, u8, ManualHost> {
    Controller::new(
        PlaceholderOptions::new().with_offsets(100.0, 100.0),
        ManualHost::new(500.0),
    )
}

#[test]
fn controller_drives_bound_slots_per_frame() {
    let mut c = controller();
    let handles: Vec<SlotHandle<u32>> = (0..40u32)
        .map(|key| {
            c.bind(key, 0, "45, 5", move |_| Ok(key), 0)
                .unwrap()
        })
        .collect();
    assert_eq!(c.len(), 40);

    // Registration is debounced by one tick and the apply step waits for the frame.
    assert_eq!(c.frame(0).unwrap(), None);
    assert!(matches!(c.frame(1).unwrap(), Some(UpdateOutcome::Applied(_))));
    let mounted: Vec<u32> = handles
        .iter()
        .filter_map(|h| h.with_content(|k| *k))
        .collect();
    assert_eq!(mounted, (0..12).collect::<Vec<_>>());

    c.coordinator_mut().host_mut().scroll_top = 1000.0;
    assert!(matches!(
        c.on_scroll(2).unwrap(),
        Some(UpdateOutcome::Deferred(_))
    ));
    c.frame(3).unwrap();
    let mounted: Vec<u32> = handles
        .iter()
        .filter_map(|h| h.with_content(|k| *k))
        .collect();
    assert_eq!(mounted, (18..32).collect::<Vec<_>>());
    assert_eq!(handles[20].placement().unwrap().top, 1000.0);
}

#[test]
fn controller_rejects_duplicate_keys_and_bad_attributes() {
    let mut c = controller();
    c.bind(1, 0, "10", |_| Ok(()), 0).unwrap();
    assert!(matches!(
        c.bind(1, 0, "10", |_| Ok(()), 0),
        Err(BindError::DuplicateKey)
    ));
    assert!(matches!(
        c.bind(2, 0, "ten", |_| Ok(()), 0),
        Err(BindError::Parse(_))
    ));
    assert_eq!(c.len(), 1);
}

#[test]
fn failed_first_mount_rolls_back_the_binding() {
    let mut c = controller();
    let err = c
        .bind::<(), _>(7, 0, "10", |_| Err("boom".into()), 0)
        .unwrap_err();
    assert!(matches!(err, BindError::Coordinator(_)));
    assert!(c.item_id(&7).is_none());
    assert!(!c.unbind(&7));
    assert!(c.coordinator().groups().is_empty());
    assert_eq!(c.coordinator().item_count(), 0);

    // The key is free again, and a later bind is observable through its handle.
    let handle = c.bind(7, 0, "10", |_| Ok(()), 0).unwrap();
    assert!(handle.is_mounted());
    assert_eq!(c.len(), 1);
}

#[test]
fn unbinding_everything_detaches_listeners() {
    let mut c = controller();
    for key in 0..3 {
        c.bind(key, 0, "10", |_| Ok(()), 0).unwrap();
    }
    assert!(c.coordinator().host().listening);

    for key in 0..3 {
        assert!(c.unbind(&key));
    }
    assert!(!c.unbind(&0));
    assert!(c.is_empty());
    assert!(!c.coordinator().host().listening);
}

#[test]
fn bind_registration_accepts_deferred_geometry() {
    let mut c = controller();
    let (slot, handle) = Slot::new(|_| Ok(()));
    let id = c
        .bind_registration(
            9,
            Registration::measured(0, || Some(Geometry::fixed(30.0)), slot),
            0,
        )
        .unwrap();
    assert!(c.coordinator().is_measuring(id));

    c.frame(0).unwrap();
    assert!(c.coordinator().is_registered(id));
    assert!(handle.is_mounted());
}
