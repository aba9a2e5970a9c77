// Copyright 2025 Cowboy AI, LLC.

//! Serde support
//!
//! A cycler serializes as its `by_key` transposition, a map of property name
//! to value list, which is the shape styling consumers read. Deserializing
//! the same shape pairwise-composes one leaf per entry.
//!
//! A cycler with no keys does not round trip: it serializes as `{}`, and
//! deserializing `{}` fails with [`CyclerError::Arity`] because a cycler needs
//! at least one property.
//!
//! [`CyclerError::Arity`]: crate::CyclerError::Arity

use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::cycler::Cycler;
use crate::record::PropertyName;

impl<V: Clone + Serialize> Serialize for Cycler<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.by_key().serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Cycler<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns = IndexMap::<PropertyName, Vec<V>>::deserialize(deserializer)?;
        Cycler::from_keywords(columns).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_columns() {
        let c = Cycler::leaf("color", [json!("r"), json!("g")])
            .combine_product(&Cycler::leaf("lw", [json!(1), json!(2)]))
            .unwrap();
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(
            value,
            json!({ "color": ["r", "r", "g", "g"], "lw": [1, 2, 1, 2] })
        );
    }

    #[test]
    fn test_deserializes_into_pairwise_cycler() {
        let c: Cycler<String> =
            serde_json::from_str(r#"{"color": ["r", "g"], "linestyle": ["-", "--"]}"#).unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.by_key()["linestyle"], vec!["-", "--"]);
    }

    #[test]
    fn test_deserialize_rejects_uneven_columns() {
        let err = serde_json::from_str::<Cycler<i32>>(r#"{"a": [1, 2], "b": [3]}"#).unwrap_err();
        assert!(err.to_string().contains("equal length"));
    }

    #[test]
    fn test_deserialize_rejects_empty_map() {
        assert!(serde_json::from_str::<Cycler<i32>>("{}").is_err());
    }

    #[test]
    fn test_empty_cycler_does_not_round_trip() {
        let rendered = serde_json::to_string(&Cycler::<i32>::empty()).unwrap();
        assert_eq!(rendered, "{}");
        let err = serde_json::from_str::<Cycler<i32>>(&rendered).unwrap_err();
        assert!(err.to_string().contains("at least one property"));
    }
}
