//! Stored record
//!
//! A record is the submitted payload plus an assigned id. Serialized, the id
//! comes first and the payload fields follow in submission order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sequential record identifier, 1-based
pub type RecordId = u64;

/// Immutable record held by a collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Record {
    /// Build a record from a payload. A payload `id` is dropped so the
    /// assigned id is the only one stored.
    pub fn new(id: RecordId, mut payload: Map<String, Value>) -> Self {
        payload.remove("id");
        Self { id, fields: payload }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Full JSON representation, `{id, ...fields}`
    pub fn to_value(&self) -> Value {
        let mut map = Map::with_capacity(self.fields.len() + 1);
        map.insert("id".to_string(), Value::from(self.id));
        for (key, value) in &self.fields {
            map.insert(key.clone(), value.clone());
        }
        Value::Object(map)
    }
}
