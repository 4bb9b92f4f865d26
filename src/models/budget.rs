//! Budget table model
//!
//! Maps a calendar-month period to its spending cap. At most one cap exists
//! per period; setting a period again overwrites the previous cap.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::money::Money;
use super::period::Period;

/// Per-period spending caps
///
/// Backed by a `BTreeMap` so the serialized object is always keyed in
/// ascending period order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BudgetTable {
    caps: BTreeMap<Period, Money>,
}

impl BudgetTable {
    /// Create an empty budget table
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cap for a period, overwriting any existing cap
    pub fn set(&mut self, period: Period, cap: Money) {
        self.caps.insert(period, cap);
    }

    /// Get the cap for a period, if one is set
    pub fn get(&self, period: Period) -> Option<Money> {
        self.caps.get(&period).copied()
    }

    /// Check whether no caps are set
    pub fn is_empty(&self) -> bool {
        self.caps.is_empty()
    }
}

// Caps obey the same positivity invariant as expense amounts, so a backing
// record carrying a non-positive cap fails to decode.

impl<'de> Deserialize<'de> for BudgetTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let caps = BTreeMap::<Period, Money>::deserialize(deserializer)?;
        if let Some((period, cap)) = caps.iter().find(|(_, cap)| !cap.is_positive()) {
            return Err(serde::de::Error::custom(format!(
                "budget cap for period \"{}\" must be positive, got {}",
                period, cap
            )));
        }
        Ok(Self { caps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut table = BudgetTable::new();
        let may = Period::new(5).unwrap();

        assert_eq!(table.get(may), None);

        table.set(may, Money::from_cents(10_000));
        assert_eq!(table.get(may), Some(Money::from_cents(10_000)));
    }

    #[test]
    fn test_set_overwrites() {
        let mut table = BudgetTable::new();
        let may = Period::new(5).unwrap();

        table.set(may, Money::from_cents(10_000));
        table.set(may, Money::from_cents(5_000));
        assert_eq!(table.get(may), Some(Money::from_cents(5_000)));
    }

    #[test]
    fn test_serializes_as_keyed_object() {
        let mut table = BudgetTable::new();
        table.set(Period::new(3).unwrap(), Money::from_cents(1000));

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json, serde_json::json!({ "03": 10 }));

        let back: BudgetTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, table);
    }

    #[test]
    fn test_serialized_keys_are_ascending() {
        let mut table = BudgetTable::new();
        table.set(Period::new(12).unwrap(), Money::from_cents(100));
        table.set(Period::new(1).unwrap(), Money::from_cents(200));
        table.set(Period::new(3).unwrap(), Money::from_cents(300));

        let json = serde_json::to_value(&table).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["01", "03", "12"]);
    }

    #[test]
    fn test_decode_rejects_non_positive_cap() {
        for cap in [-10, 0] {
            let json = serde_json::json!({ "03": cap });
            assert!(serde_json::from_value::<BudgetTable>(json).is_err());
        }
    }
}
