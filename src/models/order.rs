use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::order::{
    NewOrder as DomainNewOrder, NewOrderItem as DomainNewOrderItem, Order as DomainOrder,
    OrderItem as DomainOrderItem, OrderStatusEvent as DomainOrderStatusEvent,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub user_id: i32,
    pub status: String,
    pub delivery_type: String,
    pub delivery_address_id: Option<i32>,
    pub delivery_fee: i64,
    pub subtotal: i64,
    pub total_amount: i64,
    pub total_savings: i64,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub payment_method: String,
    pub payment_status: String,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub product_name: String,
    pub product_photo: Option<String>,
    pub quantity: i32,
    pub daily_price: i64,
    pub total_price: i64,
    pub savings: i64,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_status_history)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderStatusEvent {
    pub id: i32,
    pub order_id: i32,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub order_number: &'a str,
    pub user_id: i32,
    pub status: &'a str,
    pub delivery_type: &'a str,
    pub delivery_address_id: Option<i32>,
    pub delivery_fee: i64,
    pub subtotal: i64,
    pub total_amount: i64,
    pub total_savings: i64,
    pub rental_start_date: NaiveDate,
    pub rental_end_date: NaiveDate,
    pub payment_method: &'a str,
    pub payment_status: &'a str,
    pub notes: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem<'a> {
    pub order_id: i32,
    pub product_id: Option<i32>,
    pub product_name: &'a str,
    pub product_photo: Option<&'a str>,
    pub quantity: i32,
    pub daily_price: i64,
    pub total_price: i64,
    pub savings: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_status_history)]
pub struct NewOrderStatusEvent<'a> {
    pub order_id: i32,
    pub status: &'a str,
}

impl Order {
    pub fn into_domain(self, items: Vec<OrderItem>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            order_number: self.order_number,
            user_id: self.user_id,
            status: self.status.as_str().into(),
            items: items.into_iter().map(OrderItem::into_domain).collect(),
            delivery_type: self.delivery_type.as_str().into(),
            delivery_address_id: self.delivery_address_id,
            delivery_fee: self.delivery_fee,
            subtotal: self.subtotal,
            total_amount: self.total_amount,
            total_savings: self.total_savings,
            rental_start_date: self.rental_start_date,
            rental_end_date: self.rental_end_date,
            payment_method: self.payment_method.as_str().into(),
            payment_status: self.payment_status.as_str().into(),
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl OrderItem {
    pub fn into_domain(self) -> DomainOrderItem {
        DomainOrderItem {
            id: self.id,
            product_id: self.product_id,
            product_name: self.product_name,
            product_photo: self.product_photo,
            quantity: self.quantity,
            daily_price: self.daily_price,
            total_price: self.total_price,
            savings: self.savings,
        }
    }
}

impl OrderStatusEvent {
    pub fn into_domain(self) -> DomainOrderStatusEvent {
        DomainOrderStatusEvent {
            id: self.id,
            order_id: self.order_id,
            status: self.status.as_str().into(),
            created_at: self.created_at,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for DomainOrder {
    fn from(value: (Order, Vec<OrderItem>)) -> Self {
        value.0.into_domain(value.1)
    }
}

impl<'a> NewOrder<'a> {
    pub fn from_domain(order_number: &'a str, value: &'a DomainNewOrder) -> Self {
        Self {
            order_number,
            user_id: value.user_id,
            status: value.status.as_str(),
            delivery_type: value.delivery_type.as_str(),
            delivery_address_id: value.delivery_address_id,
            delivery_fee: value.delivery_fee,
            subtotal: value.subtotal,
            total_amount: value.total_amount,
            total_savings: value.total_savings,
            rental_start_date: value.rental_start_date,
            rental_end_date: value.rental_end_date,
            payment_method: value.payment_method.as_str(),
            payment_status: value.payment_status.as_str(),
            notes: value.notes.as_deref(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> NewOrderItem<'a> {
    pub fn from_domain(order_id: i32, value: &'a DomainNewOrderItem) -> Self {
        Self {
            order_id,
            product_id: Some(value.product_id),
            product_name: value.product_name.as_str(),
            product_photo: value.product_photo.as_deref(),
            quantity: value.quantity,
            daily_price: value.daily_price,
            total_price: value.total_price,
            savings: value.savings,
        }
    }
}
