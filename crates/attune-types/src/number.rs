// ABOUTME: Serde helpers for integer dimension fields carried as plain JSON numbers
// ABOUTME: Whole-valued floats such as 250.0 decode; fractional or oversized values are rejected

use serde::de::Error;
use serde::{Deserialize, Deserializer};

fn to_whole<E: Error>(value: f64) -> Result<i32, E> {
    if value.fract() == 0.0 && (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value) {
        Ok(value as i32)
    } else {
        Err(E::custom(format!("expected a whole number, found {value}")))
    }
}

pub(crate) fn whole<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    to_whole(f64::deserialize(deserializer)?)
}

pub(crate) fn option_whole<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i32>, D::Error> {
    Option::<f64>::deserialize(deserializer)?
        .map(to_whole)
        .transpose()
}
