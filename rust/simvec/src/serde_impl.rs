//! Serde support: a `SimpleVector<T>` is encoded as a plain sequence of its
//! live elements. Capacity is not part of the encoding; a decoded vector has
//! `len() == capacity()`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::SimpleVector;

impl<T: Serialize> Serialize for SimpleVector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SimpleVector<T> {
    fn deserialize<D>(deserializer: D) -> Result<SimpleVector<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<T>::deserialize(deserializer).map(SimpleVector::from_vec)
    }
}
