use attr_bool::{AttrBool, Slot};

#[derive(AttrBool)]
struct Tagged<T> {
    #[attr_bool(accessor, force)]
    pinned: Slot,
    payload: T,
}

fn main() {
    let mut tagged = Tagged {
        pinned: Slot::new(),
        payload: "cargo",
    };
    assert!(!tagged.pinned());
    tagged.set_pinned(true);
    assert!(tagged.pinned());
    assert_eq!(tagged.payload, "cargo");
}
