//! Common domain types for the Ecwid API.

use serde::{Deserialize, Serialize};

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Order placed, payment not received yet
    AwaitingPayment,
    /// Payment received
    Paid,
    /// Order cancelled
    Cancelled,
    /// Full refund issued
    Refunded,
    /// Part of the order refunded
    PartiallyRefunded,
    /// Checkout abandoned before payment
    Incomplete,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PaymentStatus::AwaitingPayment => "AWAITING_PAYMENT",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Cancelled => "CANCELLED",
            PaymentStatus::Refunded => "REFUNDED",
            PaymentStatus::PartiallyRefunded => "PARTIALLY_REFUNDED",
            PaymentStatus::Incomplete => "INCOMPLETE",
        };
        write!(f, "{}", s)
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FulfillmentStatus {
    /// New order, not processed yet
    AwaitingProcessing,
    /// Being prepared
    Processing,
    /// Handed to the carrier
    Shipped,
    /// Received by the customer
    Delivered,
    /// Will not be delivered
    WillNotDeliver,
    /// Sent back by the customer
    Returned,
    /// Waiting for the customer at the pickup point
    ReadyForPickup,
    /// On the courier's vehicle
    OutForDelivery,
}

impl std::fmt::Display for FulfillmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FulfillmentStatus::AwaitingProcessing => "AWAITING_PROCESSING",
            FulfillmentStatus::Processing => "PROCESSING",
            FulfillmentStatus::Shipped => "SHIPPED",
            FulfillmentStatus::Delivered => "DELIVERED",
            FulfillmentStatus::WillNotDeliver => "WILL_NOT_DELIVER",
            FulfillmentStatus::Returned => "RETURNED",
            FulfillmentStatus::ReadyForPickup => "READY_FOR_PICKUP",
            FulfillmentStatus::OutForDelivery => "OUT_FOR_DELIVERY",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_wire_format() {
        for status in [
            PaymentStatus::AwaitingPayment,
            PaymentStatus::PartiallyRefunded,
            PaymentStatus::Paid,
        ] {
            let wire = serde_json::to_string(&status).unwrap();
            assert_eq!(wire.trim_matches('"'), status.to_string());
        }

        let wire = serde_json::to_string(&FulfillmentStatus::WillNotDeliver).unwrap();
        assert_eq!(wire, "\"WILL_NOT_DELIVER\"");
    }
}
