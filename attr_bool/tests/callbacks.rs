//! Custom reader and writer callbacks.

use attr_bool::{ClassDef, Declaration, Instance, Value};

fn tank_class() -> ClassDef {
    let mut class = ClassDef::new("Tank");
    class.enable_attr_bool();
    Declaration::accessor(["level"])
        .apply_to(&mut class)
        .expect("declare level");
    class
}

#[test]
fn reader_callbacks_replace_slot_reflection_entirely() {
    let mut class = tank_class();
    Declaration::reader(["full"])
        .read_with(|tank| {
            let level = tank.slots().fetch("level");
            Value::Bool(matches!(level, Value::Int(n) if n >= 100))
        })
        .apply_to(&mut class)
        .expect("declare full");
    let mut tank = Instance::new(&class.seal());

    tank.write("level", 100).expect("write");
    assert_eq!(tank.read("full").expect("read"), Value::Bool(true));

    // Even a directly poked backing slot is ignored by the callback.
    tank.slots_mut().set("full", Value::Bool(false));
    assert_eq!(tank.read("full").expect("read"), Value::Bool(true));
}

#[test]
fn writer_callbacks_control_what_gets_stored() {
    let mut class = tank_class();
    Declaration::writer(["refill"])
        .write_with(|tank, value| {
            let bumped = match value {
                Value::Int(n) => Value::Int(n + 10),
                other => other,
            };
            tank.slots_mut().set("level", bumped)
        })
        .apply_to(&mut class)
        .expect("declare refill");
    let mut tank = Instance::new(&class.seal());

    let stored = tank.write("refill", 40).expect("write");
    assert_eq!(stored, Value::Int(50));
    assert_eq!(tank.read("level").expect("read"), Value::Int(50));
}

#[test]
fn strict_reader_callbacks_have_their_result_coerced() {
    let mut class = tank_class();
    Declaration::bool_reader(["pressurised"])
        .read_with(|tank| tank.slots().fetch("level"))
        .apply_to(&mut class)
        .expect("declare");
    let mut tank = Instance::new(&class.seal());

    tank.write("level", 0).expect("write");
    assert_eq!(tank.read("pressurised").expect("read"), Value::Bool(true));
}

#[test]
fn strict_writer_callbacks_receive_the_coerced_argument() {
    let mut class = tank_class();
    Declaration::bool_writer(["sealed"])
        .write_with(|tank, value| tank.slots_mut().set("sealed", value))
        .apply_to(&mut class)
        .expect("declare");
    let mut tank = Instance::new(&class.seal());

    tank.write("sealed", 0).expect("write");
    assert_eq!(tank.slots().fetch("sealed"), Value::Bool(true));
}

#[test]
fn one_callback_serves_every_name_in_the_declaration() {
    let mut class = tank_class();
    Declaration::reader(["warm", "cosy"])
        .read_with(|tank| tank.slots().fetch("level").to_bool())
        .apply_to(&mut class)
        .expect("declare");
    let mut tank = Instance::new(&class.seal());

    tank.write("level", 1).expect("write");
    assert_eq!(tank.read("warm").expect("read"), Value::Bool(true));
    assert_eq!(tank.read("cosy").expect("read"), Value::Bool(true));
}

#[test]
fn callbacks_win_over_defaults() {
    let mut class = tank_class();
    Declaration::reader(["steady"])
        .default(5)
        .read_with(|_| Value::Bool(false))
        .apply_to(&mut class)
        .expect("declare");
    let tank = Instance::new(&class.seal());

    assert_eq!(tank.read("steady").expect("read"), Value::Bool(false));
}
