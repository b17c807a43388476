use attr_bool::{AttrBool, Slot, Value};

#[derive(Default, AttrBool)]
struct Switch {
    #[attr_bool(accessor, force)]
    on: Slot,
    #[attr_bool(accessor, default = "idle")]
    mode: Slot,
}

fn main() {
    let mut switch = Switch::default();
    assert!(!switch.on());
    switch.set_on(1);
    assert!(switch.on());
    assert_eq!(switch.mode(), Value::from("idle"));
}
