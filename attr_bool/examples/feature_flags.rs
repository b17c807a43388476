//! Feature-flag bookkeeping on both declaration surfaces.
//!
//! Run with `cargo run --example feature_flags`.

use attr_bool::{AttrBool, ClassDef, Declaration, Instance, Slot, Value};

#[derive(Default, AttrBool)]
struct Rollout {
    #[attr_bool(accessor, force)]
    enabled: Slot,
    #[attr_bool(accessor, default = 10)]
    percentage: Slot,
    #[attr_bool(reader, force, get_with = "Self::fully_rolled_out")]
    complete: Slot,
}

impl Rollout {
    fn fully_rolled_out(&self) -> Value {
        match self.percentage.get() {
            Some(Value::Int(p)) => Value::Bool(*p >= 100),
            _ => Value::Bool(false),
        }
    }
}

fn derived_surface() {
    let mut rollout = Rollout::default();
    println!("enabled on a fresh rollout: {}", rollout.enabled());
    println!("default percentage: {}", rollout.percentage());

    rollout.set_enabled("yes");
    rollout.set_percentage(100);
    println!("enabled after strict coercion: {}", rollout.enabled());
    println!("complete: {}", rollout.complete());
    println!("generated methods: {:?}", Rollout::ATTR_BOOL_METHODS);
}

fn runtime_surface() -> Result<(), attr_bool::AttrBoolError> {
    let mut class = ClassDef::new("Flag");
    class.enable_attr_bool();

    let names = Declaration::bool_accessor(["active"]).apply_to(&mut class)?;
    Declaration::accessor(["owner"]).default("platform").apply_to(&mut class)?;
    println!("declared at runtime: {names:?}");

    let class = class.seal();
    let mut flag = Instance::new(&class);
    println!("active before any write: {}", flag.read("active")?);

    flag.write("active", 1)?;
    println!("active after write(1): {}", flag.read("active")?);
    println!("owner: {}", flag.read("owner")?);
    Ok(())
}

fn main() -> Result<(), attr_bool::AttrBoolError> {
    derived_surface();
    runtime_surface()
}
