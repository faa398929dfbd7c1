use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::optional::{Optional, Slot};

// Same wire shape as `Option<T>`.
impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Slot::Present(value) => serializer.serialize_some(value),
            Slot::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Optional::from)
    }
}
