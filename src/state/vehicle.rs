//! Vehicle records and the inventory collection.
//!
//! DESIGN
//! ======
//! The collection is supplied by the host page (`window.carsData`). Records
//! are parsed one at a time so a single bad entry cannot blank the page:
//! missing numbers read as 0, empty strings as absent, and records without a
//! usable `id` are skipped. Hand-written data files write gaps as `null`,
//! prices as floats and trims as bare numbers, so field values are coerced
//! rather than rejected.

#[cfg(test)]
#[path = "vehicle_test.rs"]
mod vehicle_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SiteError;

/// Vehicle identifier as supplied by the data file: a number or a string.
///
/// Equality is strict, so `42` and `"42"` are different vehicles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VehicleId {
    Number(i64),
    Text(String),
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl VehicleId {
    /// Id from a JavaScript number. Only safe integers are ids; fractional
    /// and non-finite numbers have no JSON shape to round-trip through.
    #[must_use]
    pub fn from_js_number(value: f64) -> Option<Self> {
        const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE {
            #[allow(clippy::cast_possible_truncation)]
            return Some(Self::Number(value as i64));
        }
        None
    }
}

impl From<i64> for VehicleId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for VehicleId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Condition grading block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grades {
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub grade: Option<String>,
}

/// One vehicle listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(default, deserialize_with = "lenient::text")]
    pub model: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub trim: Option<String>,
    #[serde(default, deserialize_with = "lenient::year")]
    pub year: i32,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub km: u64,
    #[serde(default, deserialize_with = "lenient::whole")]
    pub price: u64,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub transmission: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub fuel: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient::grades")]
    pub grades: Option<Grades>,
}

impl Vehicle {
    /// Grade code when present and non-empty.
    #[must_use]
    pub fn grade(&self) -> Option<&str> {
        self.grades.as_ref().and_then(|g| non_empty(g.grade.as_deref()))
    }

    #[must_use]
    pub fn trim(&self) -> Option<&str> {
        non_empty(self.trim.as_deref())
    }

    #[must_use]
    pub fn transmission(&self) -> Option<&str> {
        non_empty(self.transmission.as_deref())
    }

    #[must_use]
    pub fn fuel(&self) -> Option<&str> {
        non_empty(self.fuel.as_deref())
    }

    #[must_use]
    pub fn origin(&self) -> Option<&str> {
        non_empty(self.origin.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

/// Field coercions for loosely typed vehicle data.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Grades;

    fn number(value: &Value) -> f64 {
        let n = match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        };
        if n.is_finite() { n } else { 0.0 }
    }

    /// Non-negative whole number, rounded; anything unusable reads as 0.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn whole<'de, D: Deserializer<'de>>(de: D) -> Result<u64, D::Error> {
        let n = number(&Value::deserialize(de)?);
        Ok(if n > 0.0 { n.round() as u64 } else { 0 })
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn year<'de, D: Deserializer<'de>>(de: D) -> Result<i32, D::Error> {
        Ok(number(&Value::deserialize(de)?).round() as i32)
    }

    /// Strings as-is, numbers and booleans as their text, anything else absent.
    pub fn opt_text<'de, D: Deserializer<'de>>(de: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(de)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        })
    }

    pub fn text<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
        Ok(opt_text(de)?.unwrap_or_default())
    }

    /// A grading block that is not an object is treated as missing.
    pub fn grades<'de, D: Deserializer<'de>>(de: D) -> Result<Option<Grades>, D::Error> {
        Ok(match Value::deserialize(de)? {
            value @ Value::Object(_) => serde_json::from_value(value).ok(),
            _ => None,
        })
    }
}

/// The ordered vehicle collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub vehicles: Vec<Vehicle>,
}

impl Inventory {
    /// Parse a JSON array of vehicle records, skipping unusable entries.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw).map_err(SiteError::InventoryParse)?;
        let vehicles = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Vehicle>(entry) {
                Ok(vehicle) => Some(vehicle),
                Err(e) => {
                    log::warn!("skipping vehicle record {index}: {e}");
                    None
                }
            })
            .collect();
        Ok(Self { vehicles })
    }

    /// Read the collection from `window[global]`; `None` when it is absent.
    #[cfg(feature = "csr")]
    pub fn from_window(global: &str) -> Option<Self> {
        let raw = match crate::util::dom::global_json(global) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("could not read {global}: {e}");
                return None;
            }
        };
        match Self::from_json(&raw) {
            Ok(inventory) => Some(inventory),
            Err(e) => {
                log::warn!("{global} ignored: {e}");
                None
            }
        }
    }
}
