use std::fmt;
use std::ops::Deref;

use gpui::{ElementId, SharedString};

/// Identity of a component instance. State kept between frames is keyed by it,
/// and element ids for child nodes are derived from it with [`ComponentId::slot`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComponentId(String);

impl ComponentId {
    #[track_caller]
    pub fn auto(prefix: &str) -> Self {
        Self(stable_auto_id(prefix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn slot(&self, name: &str) -> Self {
        Self(format!("{}-{name}", self.0))
    }

    pub fn slot_index(&self, name: &str, index: impl fmt::Display) -> Self {
        Self(format!("{}-{name}-{index}", self.0))
    }
}

impl Deref for ComponentId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ComponentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ComponentId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<ComponentId> for ElementId {
    fn from(value: ComponentId) -> Self {
        ElementId::Name(SharedString::from(value.0))
    }
}

#[track_caller]
pub fn stable_auto_id(prefix: &str) -> String {
    let location = std::panic::Location::caller();
    let seed = format!(
        "{prefix}:{}:{}:{}",
        location.file(),
        location.line(),
        location.column()
    );
    format!("{prefix}-{:016x}", fnv1a64(seed.as_bytes()))
}

fn fnv1a64(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x00000100000001b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
