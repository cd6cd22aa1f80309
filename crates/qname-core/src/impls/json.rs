//! JSON adapter - serde_json と QualifiedName の橋渡し
//!
//! - `serde_json::Value` / `serde_json::Map` を `FieldLookup` として扱う
//! - `QualifiedName` の Serialize / Deserialize は構造化表現を経由する

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::domain::QualifiedName;
use crate::ports::FieldLookup;

impl FieldLookup for Value {
    fn text_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl FieldLookup for Map<String, Value> {
    fn text_field(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }
}

impl Serialize for QualifiedName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_structured().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QualifiedName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let node = Value::deserialize(deserializer)?;
        QualifiedName::from_structured(&node).map_err(D::Error::custom)
    }
}
