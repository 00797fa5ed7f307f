//! Entity implementation

use slotmap::Key;

slotmap::new_key_type! {
    /// Generational entity identifier
    pub struct Entity;
}

impl Entity {
    /// Stable numeric form of the handle, for logs and snapshots
    pub fn id(&self) -> u64 {
        self.data().as_ffi()
    }
}
