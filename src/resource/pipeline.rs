//! Create pipeline shared by every resource kind
//!
//! validate → assign id → append → return the stored record

use serde_json::{Map, Value};

use crate::store::{Record, Store};

use super::errors::CreateResult;
use super::types::ResourceKind;
use super::validator::validate;

/// Validate `payload` for `kind` and store it.
///
/// On a validation failure the store is not touched.
pub fn create(store: &Store, kind: ResourceKind, payload: Map<String, Value>) -> CreateResult<Record> {
    validate(kind.spec(), &payload)?;
    let record = store.collection(kind).append(payload)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::errors::CreateError;
    use crate::resource::types::USER_ID_MESSAGE;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let store = Store::new();
        let first = create(&store, ResourceKind::User, payload(json!({"name": "A", "email": "a@x"}))).unwrap();
        let second = create(&store, ResourceKind::User, payload(json!({"name": "B", "email": "b@x"}))).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.to_value(), json!({"id": 2, "name": "B", "email": "b@x"}));
    }

    #[test]
    fn test_rejected_payload_not_stored() {
        let store = Store::new();
        let err = create(&store, ResourceKind::Review, payload(json!({"content": "Very good"}))).unwrap_err();

        match err {
            CreateError::Validation(v) => assert_eq!(v.message(), USER_ID_MESSAGE),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.collection(ResourceKind::Review).is_empty().unwrap());
    }

    #[test]
    fn test_rejection_does_not_consume_id() {
        let store = Store::new();
        create(&store, ResourceKind::Book, payload(json!({"title": "Dune"}))).unwrap_err();
        let book = create(&store, ResourceKind::Book, payload(json!({"title": "Dune", "author": "Herbert"}))).unwrap();
        assert_eq!(book.id, 1);
    }
}
