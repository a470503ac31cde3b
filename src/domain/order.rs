use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Possible lifecycle states for a rental order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been placed and the reservation holds stock.
    Confirmed,
    /// Items are being prepared for handover.
    Preparing,
    /// Items are with the customer for the rental period.
    Delivered,
    /// Items have come back; the reservation no longer holds stock.
    Returned,
    /// Order was cancelled; the reservation no longer holds stock.
    Cancelled,
}

impl OrderStatus {
    /// Statuses whose reservations count against available stock.
    pub const ACTIVE: [OrderStatus; 3] = [Self::Confirmed, Self::Preparing, Self::Delivered];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::Preparing => "PREPARING",
            Self::Delivered => "DELIVERED",
            Self::Returned => "RETURNED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "CONFIRMED" => Self::Confirmed,
            "PREPARING" => Self::Preparing,
            "DELIVERED" => Self::Delivered,
            "RETURNED" => Self::Returned,
            // unknown rows are treated as inert
            _ => Self::Cancelled,
        }
    }
}

/// How the customer receives the rented items.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryType {
    Delivery,
    SelfPickup,
}

impl DeliveryType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Delivery => "DELIVERY",
            Self::SelfPickup => "SELF_PICKUP",
        }
    }
}

impl From<&str> for DeliveryType {
    fn from(value: &str) -> Self {
        match value {
            "DELIVERY" => Self::Delivery,
            _ => Self::SelfPickup,
        }
    }
}

/// Online payment providers accepted at checkout.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Payme,
    Click,
    Uzum,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Payme => "PAYME",
            Self::Click => "CLICK",
            Self::Uzum => "UZUM",
        }
    }
}

impl From<&str> for PaymentMethod {
    fn from(value: &str) -> Self {
        match value {
            "CLICK" => Self::Click,
            "UZUM" => Self::Uzum,
            _ => Self::Payme,
        }
    }
}

/// Settlement state of the order; completion belongs to the payment
/// collaborator, not this service.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Failed => "FAILED",
        }
    }
}

impl From<&str> for PaymentStatus {
    fn from(value: &str) -> Self {
        match value {
            "PAID" => Self::Paid,
            "FAILED" => Self::Failed,
            _ => Self::Pending,
        }
    }
}

/// Domain representation of a placed rental order with its line items.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Human-readable `YYYYMMDDnnnn` reference, sequential per day.
    pub order_number: String,
    /// Owning user identifier.
    pub user_id: i32,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Snapshotted line items.
    pub items: Vec<OrderItem>,
    pub delivery_type: DeliveryType,
    /// Address used for courier delivery, when applicable.
    pub delivery_address_id: Option<i32>,
    /// Delivery fee in the smallest currency unit.
    pub delivery_fee: i64,
    /// Sum of line-item totals.
    pub subtotal: i64,
    /// `subtotal + delivery_fee`.
    pub total_amount: i64,
    /// Sum of line-item savings against the non-discounted price.
    pub total_savings: i64,
    /// First day of the rental period.
    pub rental_start_date: NaiveDate,
    /// Last day of the rental period.
    pub rental_end_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    /// Optional free-text note supplied by the customer.
    pub notes: Option<String>,
    /// Timestamp for when the order record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the order record.
    pub updated_at: NaiveDateTime,
}

/// A line item snapshotted at order time. Later catalog edits never touch
/// historical orders.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderItem {
    pub id: i32,
    /// Product the snapshot was taken from; cleared if the product is later
    /// removed from the catalog.
    pub product_id: Option<i32>,
    pub product_name: String,
    pub product_photo: Option<String>,
    pub quantity: i32,
    /// Daily price at order time, in the smallest currency unit.
    pub daily_price: i64,
    /// Price charged for this line.
    pub total_price: i64,
    /// Difference between the non-discounted reference price and
    /// `total_price`.
    pub savings: i64,
}

/// Payload required to insert a new order with its line items.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: i32,
    pub status: OrderStatus,
    pub items: Vec<NewOrderItem>,
    pub delivery_type: DeliveryType,
    pub delivery_address_id: Option<i32>,
    pub delivery_fee: i64,
    pub subtotal: i64,
    pub total_amount: i64,
    pub total_savings: i64,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub notes: Option<String>,
    /// Timestamp captured when the order payload was created.
    pub updated_at: NaiveDateTime,
}

/// Snapshot of one line item captured at order-placement time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub product_name: String,
    pub product_photo: Option<String>,
    pub quantity: i32,
    pub daily_price: i64,
    pub total_price: i64,
    pub savings: i64,
}

impl NewOrder {
    /// Build a new order payload for `user_id` over the given rental period.
    /// Orders start out `Confirmed` with payment `Pending`.
    pub fn new(
        user_id: i32,
        delivery_type: DeliveryType,
        payment_method: PaymentMethod,
        rental_start_date: NaiveDate,
        rental_end_date: NaiveDate,
    ) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            status: OrderStatus::Confirmed,
            items: Vec::new(),
            delivery_type,
            delivery_address_id: None,
            delivery_fee: 0,
            subtotal: 0,
            total_amount: 0,
            total_savings: 0,
            rental_start_date,
            rental_end_date,
            payment_method,
            payment_status: PaymentStatus::Pending,
            notes: None,
            updated_at: now,
        }
    }

    /// Attach the snapshotted line items and their aggregated totals.
    pub fn with_items(mut self, items: Vec<NewOrderItem>, subtotal: i64, total_savings: i64) -> Self {
        self.items = items;
        self.subtotal = subtotal;
        self.total_savings = total_savings;
        self.total_amount = subtotal + self.delivery_fee;
        self
    }

    /// Attach the delivery address and fee. Call before or after
    /// `with_items`; the total is kept consistent either way.
    pub fn with_delivery(mut self, delivery_address_id: Option<i32>, delivery_fee: i64) -> Self {
        self.delivery_address_id = delivery_address_id;
        self.delivery_fee = delivery_fee;
        self.total_amount = self.subtotal + delivery_fee;
        self
    }

    /// Attach a customer note to the order payload.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Timestamped lifecycle entry recorded for an order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OrderStatusEvent {
    pub id: i32,
    pub order_id: i32,
    pub status: OrderStatus,
    pub created_at: NaiveDateTime,
}

/// Query definition used to list a user's orders.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    /// Owning user identifier.
    pub user_id: i32,
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders belonging to `user_id`.
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            status: None,
            pagination: None,
        }
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
