//! Types for the legacy orders API.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// An order as returned by the legacy API.
///
/// Status values are kept as strings: the legacy API uses its own
/// vocabulary (`ACCEPTED`, `DECLINED`, `NEW`, ...).
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOrder {
    /// Order number.
    pub number: u64,
    /// Order number with the store's prefix and suffix.
    #[serde(default)]
    pub vendor_number: Option<String>,
    /// Creation date, e.g. `2014-07-31 15:46:51 +0400`.
    #[serde(default)]
    pub created: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Order total.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub total: Option<Decimal>,
    /// Order subtotal.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub subtotal: Option<Decimal>,
    /// Payment status.
    #[serde(default)]
    pub payment_status: Option<String>,
    /// Fulfillment status.
    #[serde(default)]
    pub fulfillment_status: Option<String>,
    /// Ordered items.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub items: Vec<LegacyOrderItem>,
}

/// A line item of a legacy order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyOrderItem {
    /// Product id.
    #[serde(default)]
    pub product_id: Option<u64>,
    /// Product SKU.
    #[serde(default)]
    pub sku: Option<String>,
    /// Product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Unit price.
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Quantity ordered.
    #[serde(default)]
    pub quantity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_order_deserialize() {
        let json = r#"{
            "number": 5,
            "vendorNumber": "EC-5",
            "created": "2014-07-31 15:46:51 +0400",
            "customerEmail": "buyer@example.com",
            "total": 12.5,
            "paymentStatus": "ACCEPTED",
            "fulfillmentStatus": "NEW",
            "items": null
        }"#;

        let order: LegacyOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.number, 5);
        assert_eq!(order.total, Some(Decimal::new(125, 1)));
        assert_eq!(order.payment_status.as_deref(), Some("ACCEPTED"));
        assert!(order.items.is_empty());
    }
}
