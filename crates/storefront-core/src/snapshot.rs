//! # Cart Snapshot Format
//!
//! Serialization of the cart's items for the durable store.
//!
//! ## Wire Format
//! ```json
//! { "state": { "items": [ { "id": "...", ... } ] }, "version": 0 }
//! ```
//! This is the envelope the web storefront wrote into local storage. A bare
//! JSON array of products is also accepted on read.
//!
//! Rewriting a snapshot keeps every top-level product field, including the
//! ones [`Product`] does not model. Numeric prices come back as decimal
//! text and nested relations keep only their modeled fields.
//!
//! Every write is a full snapshot; there are no deltas.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::CART_SNAPSHOT_VERSION;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    items: &'a [Product],
}

#[derive(Deserialize)]
struct StoredState {
    #[serde(default)]
    items: Vec<Product>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Envelope {
        state: StoredState,
        #[serde(default)]
        version: u32,
    },
    Bare(Vec<Product>),
}

/// Serializes the items into a snapshot string.
pub fn encode(items: &[Product]) -> CoreResult<String> {
    let envelope = EnvelopeRef {
        state: StateRef { items },
        version: CART_SNAPSHOT_VERSION,
    };
    serde_json::to_string(&envelope).map_err(|e| CoreError::Serialization(e.to_string()))
}

/// Parses a snapshot string back into items, in stored order.
///
/// ## Errors
/// - [`CoreError::InvalidSnapshot`] for anything that is not a snapshot
/// - [`CoreError::UnsupportedSnapshotVersion`] for snapshots from a newer client
pub fn decode(raw: &str) -> CoreResult<Vec<Product>> {
    match serde_json::from_str::<StoredCart>(raw)? {
        StoredCart::Envelope { state, version } => {
            if version > CART_SNAPSHOT_VERSION {
                return Err(CoreError::UnsupportedSnapshotVersion {
                    found: version,
                    expected: CART_SNAPSHOT_VERSION,
                });
            }
            Ok(state.items)
        }
        StoredCart::Bare(items) => Ok(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Image};

    fn sample_items() -> Vec<Product> {
        let mut hoodie = Product::new("A", "Hoodie");
        hoodie.price = "49.00".to_string();
        hoodie.category = Some(Category {
            id: "cat-1".to_string(),
            name: "Tops".to_string(),
            billboard: None,
        });
        hoodie.images = vec![Image {
            id: "img-1".to_string(),
            url: "https://cdn.example.com/hoodie.png".to_string(),
        }];

        vec![hoodie, Product::new("B", "Beanie"), Product::new("C", "Socks")]
    }

    #[test]
    fn test_round_trip_preserves_order_and_contents() {
        let items = sample_items();
        let decoded = decode(&encode(&items).unwrap()).unwrap();
        assert_eq!(decoded, items);
    }

    #[test]
    fn test_round_trip_empty() {
        let raw = encode(&[]).unwrap();
        assert_eq!(raw, r#"{"state":{"items":[]},"version":0}"#);
        assert!(decode(&raw).unwrap().is_empty());
    }

    #[test]
    fn test_decode_bare_array() {
        let items = decode(r#"[{ "id": "A", "name": "Hoodie", "price": "10" }]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "A");
    }

    #[test]
    fn test_web_snapshot_survives_a_rewrite() {
        let raw = r#"{"state":{"items":[
            {"id":"A","name":"Hoodie","price":12.50,"storeId":"store-1","createdAt":"2024-03-01T10:00:00.000Z"},
            {"id":"B","name":"Gift card","price":null,"storeId":"store-1"}
        ]},"version":0}"#;

        let items = decode(raw).unwrap();
        assert_eq!(items[0].price, "12.5");
        assert_eq!(items[1].price, "");

        let rewritten: serde_json::Value = serde_json::from_str(&encode(&items).unwrap()).unwrap();
        let first = &rewritten["state"]["items"][0];
        assert_eq!(first["storeId"], serde_json::json!("store-1"));
        assert_eq!(first["createdAt"], serde_json::json!("2024-03-01T10:00:00.000Z"));
        assert_eq!(rewritten["state"]["items"][1]["storeId"], serde_json::json!("store-1"));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode("not json at all"),
            Err(CoreError::InvalidSnapshot(_))
        ));
        assert!(matches!(
            decode(r#"{"state": 42}"#),
            Err(CoreError::InvalidSnapshot(_))
        ));
        assert!(matches!(decode(""), Err(CoreError::InvalidSnapshot(_))));
    }

    #[test]
    fn test_decode_rejects_newer_version() {
        let err = decode(r#"{"state":{"items":[]},"version":7}"#).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnsupportedSnapshotVersion { found: 7, .. }
        ));
    }
}
