use attr_bool::{AttrBool, Slot};

mod panel {
    use super::*;

    #[derive(Default, AttrBool)]
    pub struct Panel {
        #[attr_bool(accessor, force)]
        visible: Slot,
        #[attr_bool(accessor, force, vis = "pub(self)")]
        internal: Slot,
    }

    impl Panel {
        pub fn toggle_internal(&mut self) -> bool {
            let next = !self.internal();
            self.set_internal(next)
        }
    }
}

fn main() {
    let mut panel = panel::Panel::default();
    assert!(!panel.visible());
    panel.set_visible("yes");
    assert!(panel.visible());
    // `internal` accessors are private to the module; only the wrapper is
    // reachable here.
    assert!(panel.toggle_internal());
}
