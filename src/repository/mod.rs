use chrono::NaiveDate;

use crate::db::{DbConnection, DbPool};
use crate::domain::address::{Address, NewAddress};
use crate::domain::delivery_zone::{DeliveryZone, NewDeliveryZone};
use crate::domain::order::{NewOrder, Order, OrderListQuery, OrderStatusEvent};
use crate::domain::product::{NewProduct, Product};
use crate::repository::errors::RepositoryResult;

pub mod address;
pub mod delivery_zone;
pub mod errors;
pub mod order;
pub mod product;

#[cfg(test)]
pub mod mock;

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over catalog products.
pub trait ProductReader {
    /// Load all *active* products among `ids`, each with its pricing tiers.
    /// Inactive and unknown ids are simply absent from the result.
    fn get_active_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
}

/// Write operations over catalog products (provisioning surface).
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
}

/// Read-only operations over a user's address book.
pub trait AddressReader {
    /// Fetch an address only when it is owned by `user_id`.
    fn get_address_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<Address>>;
}

/// Write operations over the address book (provisioning surface).
pub trait AddressWriter {
    fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
}

/// Read-only operations over delivery-zone configuration.
pub trait DeliveryZoneReader {
    /// Fetch the active zone whose name equals `name`, if any.
    fn get_active_zone_by_name(&self, name: &str) -> RepositoryResult<Option<DeliveryZone>>;
}

/// Write operations over delivery zones (provisioning surface).
pub trait DeliveryZoneWriter {
    fn create_delivery_zone(&self, new_zone: &NewDeliveryZone) -> RepositoryResult<DeliveryZone>;
}

/// Read-only operations over placed orders.
pub trait OrderReader {
    fn get_order_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    /// Units of `product_id` reserved by orders in an active status whose
    /// rental interval overlaps `[start, end]` under inclusive bounds.
    fn reserved_quantity(
        &self,
        product_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<i64>;
    fn order_status_history(&self, order_id: i32) -> RepositoryResult<Vec<OrderStatusEvent>>;
}

/// Write operations over placed orders.
pub trait OrderWriter {
    /// Atomically re-check availability, derive the next daily order number,
    /// and insert the order with its items and initial status-history row.
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
}
