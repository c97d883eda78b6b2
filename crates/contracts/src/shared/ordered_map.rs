//! Serde adapter for JSON objects whose key order is significant.
//!
//! The backend emits breakdown mappings (month labels in chronological
//! order, products in rank order) as plain JSON objects. `HashMap` would
//! lose that order, so such fields are declared as `Vec<(String, f64)>`
//! and (de)serialized through this module:
//!
//! ```ignore
//! #[serde(with = "crate::shared::ordered_map")]
//! pub revenue_by_month: Vec<(String, f64)>,
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserializer, Serializer};
use std::fmt;

pub fn serialize<S>(entries: &[(String, f64)], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, f64)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedMapVisitor;

    impl<'de> Visitor<'de> for OrderedMapVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of string keys to numbers")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, f64>()? {
                entries.push((key, value));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(OrderedMapVisitor)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        data: Vec<(String, f64)>,
    }

    #[test]
    fn test_deserialize_preserves_key_order() {
        let json = r#"{"data": {"2024-03": 10.0, "2024-01": 30.0, "2024-02": 20.0}}"#;
        let holder: Holder = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = holder.data.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["2024-03", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_serialize_round_trip_keeps_order() {
        let holder = Holder {
            data: vec![("b".to_string(), 2.0), ("a".to_string(), 1.0)],
        };
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"data":{"b":2.0,"a":1.0}}"#);
    }
}
