// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Serde helpers for report numbers.
//!
//! Values are rounded to two decimals on the way out. JSON has no encoding
//! for infinities, so non-finite values are written as strings.

use serde::Serializer;

fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

fn write<S>(value: f64, places: i32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value == f64::INFINITY {
        serializer.serialize_str("infinity")
    } else if value == f64::NEG_INFINITY {
        serializer.serialize_str("-infinity")
    } else {
        serializer.serialize_f64(round_to(value, places))
    }
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    write(*value, 2, serializer)
}

pub mod option {
    use serde::Serializer;

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(v) => super::write(*v, 2, serializer),
            None => serializer.serialize_none(),
        }
    }
}

pub(crate) fn round1(value: f64) -> f64 {
    round_to(value, 1)
}
