//! Tri-state field for partial updates of nullable columns.
//!
//! In a JSON update body a nullable field can be absent (keep), `null`
//! (clear) or a value (set). Plain `Option<T>` folds the first two together,
//! so nullable columns use [`Patch`] with `#[serde(default)]`.

use serde::{Deserialize, Deserializer};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Keep,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    /// `None` when the column must stay untouched, otherwise its new value.
    pub fn into_update(self) -> Option<Option<T>> {
        match self {
            Patch::Keep => None,
            Patch::Clear => Some(None),
            Patch::Set(v) => Some(Some(v)),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(v: Option<T>) -> Self {
        match v { Some(v) => Patch::Set(v), None => Patch::Clear }
    }
}

// Only reached when the key is present; absent keys fall back to `Default`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}
