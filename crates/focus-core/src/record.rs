//! Record and value model for generated FOCUS rows.

use crate::catalog::{DataType, FocusColumn};
use chrono::{DateTime, SecondsFormat, Utc};
use rust_decimal::Decimal;
use serde::de::{self, DeserializeSeed, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A single cell value in a FOCUS record.
///
/// Costs, prices and quantities are exact decimals; timestamps are UTC;
/// the catalog's JSON columns (`Tags`, `SkuPriceDetails`) are key-value maps.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusValue {
    Text(String),
    Decimal(Decimal),
    DateTime(DateTime<Utc>),
    KeyValue(BTreeMap<String, String>),
    Null,
}

impl FocusValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The catalog data type this value inhabits, `None` for nulls.
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Self::Text(_) => Some(DataType::Text),
            Self::Decimal(_) => Some(DataType::Decimal),
            Self::DateTime(_) => Some(DataType::DateTime),
            Self::KeyValue(_) => Some(DataType::KeyValue),
            Self::Null => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_key_value(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::KeyValue(map) => Some(map),
            _ => None,
        }
    }
}

impl From<Decimal> for FocusValue {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

impl From<DateTime<Utc>> for FocusValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(value)
    }
}

impl From<String> for FocusValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FocusValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl Serialize for FocusValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            // Decimals serialize as strings so no precision is lost in transit.
            Self::Decimal(d) => serializer.serialize_str(&d.to_string()),
            Self::DateTime(dt) => {
                serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            }
            Self::KeyValue(map) => map.serialize(serializer),
            Self::Null => serializer.serialize_none(),
        }
    }
}

/// One fully assembled FOCUS row: all 50 catalog columns in catalog order.
///
/// A record starts with every column null and is populated column by column
/// during generation; once the orchestrator hands it out it is never mutated
/// again (the validator only reads).
#[derive(Debug, Clone, PartialEq)]
pub struct FocusRecord {
    values: Vec<FocusValue>,
}

impl FocusRecord {
    /// Create an empty record with every column null.
    pub fn new() -> Self {
        Self {
            values: vec![FocusValue::Null; FocusColumn::COUNT],
        }
    }

    pub fn get(&self, column: FocusColumn) -> &FocusValue {
        &self.values[column.index()]
    }

    pub fn set(&mut self, column: FocusColumn, value: impl Into<FocusValue>) {
        self.values[column.index()] = value.into();
    }

    pub fn set_null(&mut self, column: FocusColumn) {
        self.values[column.index()] = FocusValue::Null;
    }

    pub fn is_null(&self, column: FocusColumn) -> bool {
        self.get(column).is_null()
    }

    pub fn text(&self, column: FocusColumn) -> Option<&str> {
        self.get(column).as_text()
    }

    pub fn decimal(&self, column: FocusColumn) -> Option<Decimal> {
        self.get(column).as_decimal()
    }

    pub fn datetime(&self, column: FocusColumn) -> Option<DateTime<Utc>> {
        self.get(column).as_datetime()
    }

    /// Iterate columns and values in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (FocusColumn, &FocusValue)> {
        FocusColumn::ALL.iter().map(|c| (*c, self.get(*c)))
    }
}

impl Default for FocusRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for FocusRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FocusColumn::COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column.name(), value)?;
        }
        map.end()
    }
}

/// Deserializes one cell using the catalog's declared data type for its
/// column, instead of guessing from the JSON shape (a 12-digit account id
/// must come back as text, not as a number).
struct CellSeed(DataType);

impl<'de> DeserializeSeed<'de> for CellSeed {
    type Value = FocusValue;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(CellVisitor(self.0))
    }
}

struct CellVisitor(DataType);

impl<'de> Visitor<'de> for CellVisitor {
    type Value = FocusValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            DataType::Text => f.write_str("a string or null"),
            DataType::Decimal => f.write_str("a decimal string, a number, or null"),
            DataType::DateTime => f.write_str("an RFC 3339 timestamp or null"),
            DataType::KeyValue => f.write_str("a string-to-string map or null"),
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FocusValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FocusValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        match self.0 {
            DataType::Text => Ok(FocusValue::Text(v.to_string())),
            DataType::Decimal => v
                .parse::<Decimal>()
                .map(FocusValue::Decimal)
                .map_err(|_| E::custom(format!("invalid decimal '{v}'"))),
            DataType::DateTime => DateTime::parse_from_rfc3339(v)
                .map(|dt| FocusValue::DateTime(dt.with_timezone(&Utc)))
                .map_err(|_| E::custom(format!("invalid timestamp '{v}'"))),
            DataType::KeyValue => Err(E::custom("expected a map, found a string")),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        match self.0 {
            DataType::Decimal => Decimal::try_from(v)
                .map(FocusValue::Decimal)
                .map_err(|_| E::custom(format!("unrepresentable decimal {v}"))),
            _ => Err(E::custom("unexpected number")),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        match self.0 {
            DataType::Decimal => Ok(FocusValue::Decimal(Decimal::from(v))),
            _ => Err(E::custom("unexpected number")),
        }
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        match self.0 {
            DataType::Decimal => Ok(FocusValue::Decimal(Decimal::from(v))),
            _ => Err(E::custom("unexpected number")),
        }
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        if self.0 != DataType::KeyValue {
            return Err(de::Error::custom("unexpected map"));
        }
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, String>()? {
            entries.insert(key, value);
        }
        Ok(FocusValue::KeyValue(entries))
    }
}

impl<'de> Deserialize<'de> for FocusRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = FocusRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of FOCUS column names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut record = FocusRecord::new();
                while let Some(name) = map.next_key::<String>()? {
                    let column = FocusColumn::from_name(&name)
                        .ok_or_else(|| de::Error::custom(format!("unknown column '{name}'")))?;
                    let value = map.next_value_seed(CellSeed(column.metadata().data_type))?;
                    record.set(column, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
