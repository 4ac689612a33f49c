//! Types for the v3 orders endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, TimestampSeconds, serde_as};
use time::OffsetDateTime;

use crate::types::{FulfillmentStatus, PaymentStatus};

/// An order.
///
/// Only the commonly used fields are modelled; unknown fields are ignored.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id (the order number as shown to the merchant).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Internal order number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<u64>,
    /// Order number with the store's prefix and suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_order_number: Option<String>,
    /// Customer email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Registered customer id, if the customer was logged in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<u64>,
    /// Order total.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<Decimal>,
    /// Order subtotal (items only).
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub subtotal: Option<Decimal>,
    /// Payment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    /// Fulfillment status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment_status: Option<FulfillmentStatus>,
    /// Payment method name as shown at checkout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    /// Customer comments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_comments: Option<String>,
    /// When the order was placed.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_timestamp: Option<OffsetDateTime>,
    /// When the order was last changed.
    #[serde_as(as = "Option<TimestampSeconds<i64>>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_timestamp: Option<OffsetDateTime>,
    /// Ordered items.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<OrderItem>,
    /// Billing address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_person: Option<PersonInfo>,
    /// Shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_person: Option<PersonInfo>,
}

/// A line item of an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Line item id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Product id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<u64>,
    /// Product SKU.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Product name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit price.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    /// Quantity ordered.
    #[serde(default)]
    pub quantity: u32,
}

/// Billing or shipping contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonInfo {
    /// Full name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Company name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// Street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// City.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// ISO 3166 two-letter country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// State or province code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_or_province_code: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Result of an update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Number of updated entities (1 on success).
    pub update_count: u32,
}

/// Result of a delete call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteStatus {
    /// Number of deleted entities (1 on success).
    pub delete_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_order_deserialize() {
        let json = r#"{
            "id": "XJ12H",
            "orderNumber": 12,
            "vendorOrderNumber": "XJ12H",
            "email": "buyer@example.com",
            "total": 35.5,
            "subtotal": 30,
            "paymentStatus": "PAID",
            "fulfillmentStatus": "AWAITING_PROCESSING",
            "createTimestamp": 1700000000,
            "items": [{ "productId": 77, "name": "Mug", "price": 15, "quantity": 2 }],
            "billingPerson": { "name": "Ada Lovelace", "countryCode": "GB" },
            "somethingNew": { "ignored": true }
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id.as_deref(), Some("XJ12H"));
        assert_eq!(order.total, Some(Decimal::new(355, 1)));
        assert_eq!(order.payment_status, Some(PaymentStatus::Paid));
        assert_eq!(order.create_timestamp, Some(datetime!(2023-11-14 22:13:20 UTC)));
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(
            order.billing_person.unwrap().country_code.as_deref(),
            Some("GB")
        );
    }

    #[test]
    fn test_order_null_items() {
        let order: Order = serde_json::from_str(r#"{"id": "A1", "items": null}"#).unwrap();
        assert!(order.items.is_empty());
    }

    #[test]
    fn test_partial_update_serializes_only_set_fields() {
        let update = Order {
            fulfillment_status: Some(FulfillmentStatus::Shipped),
            ..Order::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "fulfillmentStatus": "SHIPPED" }));
    }
}
