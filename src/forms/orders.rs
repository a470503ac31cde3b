use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::order::{DeliveryType, PaymentMethod};

/// JSON payload accepted by the order creation endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOrderForm {
    /// Requested products and quantities; at least one line is required.
    #[validate(length(min = 1, message = "order must contain at least one item"), nested)]
    pub items: Vec<OrderItemForm>,
    pub delivery_type: DeliveryType,
    /// Required when `delivery_type` is `DELIVERY`; ignored otherwise.
    #[serde(default)]
    pub delivery_address_id: Option<i32>,
    /// First day of the rental period, `YYYY-MM-DD`.
    pub rental_start_date: NaiveDate,
    /// Last day of the rental period, `YYYY-MM-DD`; must be after the start.
    pub rental_end_date: NaiveDate,
    pub payment_method: PaymentMethod,
    /// Optional free-text note from the customer.
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub notes: Option<String>,
}

/// One requested line of an order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemForm {
    pub product_id: i32,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: i32,
}
