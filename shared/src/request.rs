//! Request types for the cantina API
//!
//! Missing fields deserialize to empty values so the server can answer with a
//! domain validation error instead of a bare JSON rejection.

use serde::{Deserialize, Deserializer};

/// One requested line: `{ "nome": "Pizza", "quantidade": 2 }`
///
/// Extra fields sent by the web client (its own `preco`) are ignored; the
/// catalog price is the only one used.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OrderItemRequest {
    #[serde(rename = "nome", default)]
    pub name: String,
    #[serde(rename = "quantidade", default)]
    pub quantity: i64,
}

impl OrderItemRequest {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// `POST /api/pedido` body
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubmitOrderRequest {
    #[serde(rename = "nome_cliente", default)]
    pub customer_name: String,
    #[serde(rename = "itens", default)]
    pub items: Vec<OrderItemRequest>,
}

/// `POST /cozinha/update_status` body
///
/// `status` stays a raw string: an unknown label must surface as an
/// "invalid status" error, not a deserialization failure. `pedido_id` may be
/// a number or a numeric string (form posts send `"3"`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(rename = "pedido_id", default, deserialize_with = "flexible_id")]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Order id given as a JSON number or a numeric string; null means absent
fn flexible_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct FlexibleId;

    impl<'de> Visitor<'de> for FlexibleId {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::custom(format!("id out of range: {value}")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            value
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid id: {value}")))
        }
    }

    struct OptionalId;

    impl<'de> Visitor<'de> for OptionalId {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an order id or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(FlexibleId).map(Some)
        }
    }

    deserializer.deserialize_option(OptionalId)
}
