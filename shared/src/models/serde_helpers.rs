//! Serde helpers for tolerant decoding of persisted records

use serde::{Deserialize, Deserializer};

/// Deserialize a value that treats `null` as `T::default()`
///
/// Combine with `#[serde(default)]` so that missing fields behave the same.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}
