//! Default values and the unset-versus-assigned distinction.

use attr_bool::{ClassDef, DeclArg, Declaration, Instance, Value};

fn dial_class(declaration: Declaration) -> Instance {
    let mut class = ClassDef::new("Dial");
    class.enable_attr_bool();
    declaration.apply_to(&mut class).expect("declare");
    Instance::new(&class.seal())
}

#[test]
fn default_applies_until_the_first_assignment() {
    let mut dial = dial_class(Declaration::accessor(["volume"]).default(5));

    assert_eq!(dial.read("volume").expect("read"), Value::Int(5));
    dial.write("volume", 9).expect("write");
    assert_eq!(dial.read("volume").expect("read"), Value::Int(9));

    // Reads are idempotent: no further writes, same answer.
    assert_eq!(dial.read("volume").expect("read"), Value::Int(9));
}

#[test]
fn reading_the_default_does_not_mark_the_slot_assigned() {
    let dial = dial_class(Declaration::accessor(["volume"]).default(5));

    assert_eq!(dial.read("volume").expect("read"), Value::Int(5));
    assert!(!dial.slots().is_set("volume"));
}

#[test]
fn assignment_wins_even_when_the_value_is_falsy_or_nil() {
    let mut dial = dial_class(Declaration::accessor(["volume"]).default(5));

    dial.write("volume", Value::Nil).expect("write nil");
    assert_eq!(dial.read("volume").expect("read"), Value::Nil);

    let mut dial = dial_class(Declaration::accessor(["loud"]).default(true));
    dial.write("loud", false).expect("write false");
    assert_eq!(dial.read("loud").expect("read"), Value::Bool(false));
}

#[test]
fn assigning_a_value_equal_to_the_default_sets_the_slot() {
    let mut dial = dial_class(Declaration::accessor(["volume"]).default(5));

    dial.write("volume", 5).expect("write");
    assert!(dial.slots().is_set("volume"));
    assert_eq!(dial.read("volume").expect("read"), Value::Int(5));
}

#[test]
fn trailing_positional_value_acts_as_the_default() {
    let mut dial = dial_class(Declaration::accessor(vec![
        DeclArg::from("volume"),
        DeclArg::from(11),
    ]));

    assert_eq!(dial.read("volume").expect("read"), Value::Int(11));
    dial.write("volume", 3).expect("write");
    assert_eq!(dial.read("volume").expect("read"), Value::Int(3));
}

#[test]
fn positional_default_covers_every_declared_name() {
    let dial = dial_class(Declaration::accessor(vec![
        DeclArg::from("wide"),
        DeclArg::from("tall"),
        DeclArg::from(true),
    ]));

    assert_eq!(dial.read("wide").expect("read"), Value::Bool(true));
    assert_eq!(dial.read("tall").expect("read"), Value::Bool(true));
}

#[test]
fn named_default_wins_over_a_positional_one() {
    let dial = dial_class(
        Declaration::accessor(vec![DeclArg::from("volume"), DeclArg::from(11)]).default(5),
    );

    assert_eq!(dial.read("volume").expect("read"), Value::Int(5));
}

#[test]
fn without_a_default_unset_slots_read_as_nil() {
    let mut dial = dial_class(Declaration::accessor(["volume"]));

    assert_eq!(dial.read("volume").expect("read"), Value::Nil);
    dial.write("volume", "loud").expect("write");
    assert_eq!(dial.read("volume").expect("read"), Value::from("loud"));
}
