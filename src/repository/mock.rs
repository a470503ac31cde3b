use chrono::NaiveDate;
use mockall::mock;

use super::{
    AddressReader, AddressWriter, DeliveryZoneReader, DeliveryZoneWriter, OrderReader,
    OrderWriter, ProductReader, ProductWriter,
};
use crate::domain::{
    address::{Address, NewAddress},
    delivery_zone::{DeliveryZone, NewDeliveryZone},
    order::{NewOrder, Order, OrderListQuery, OrderStatusEvent},
    product::{NewProduct, Product},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub ProductReader {}

    impl ProductReader for ProductReader {
        fn get_active_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>>;
    }
}

mock! {
    pub ProductWriter {}

    impl ProductWriter for ProductWriter {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    }
}

mock! {
    pub AddressReader {}

    impl AddressReader for AddressReader {
        fn get_address_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<Address>>;
    }
}

mock! {
    pub AddressWriter {}

    impl AddressWriter for AddressWriter {
        fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
    }
}

mock! {
    pub DeliveryZoneReader {}

    impl DeliveryZoneReader for DeliveryZoneReader {
        fn get_active_zone_by_name(&self, name: &str) -> RepositoryResult<Option<DeliveryZone>>;
    }
}

mock! {
    pub DeliveryZoneWriter {}

    impl DeliveryZoneWriter for DeliveryZoneWriter {
        fn create_delivery_zone(&self, new_zone: &NewDeliveryZone) -> RepositoryResult<DeliveryZone>;
    }
}

mock! {
    pub OrderReader {}

    impl OrderReader for OrderReader {
        fn get_order_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
        fn reserved_quantity(&self, product_id: i32, start: NaiveDate, end: NaiveDate) -> RepositoryResult<i64>;
        fn order_status_history(&self, order_id: i32) -> RepositoryResult<Vec<OrderStatusEvent>>;
    }
}

mock! {
    pub OrderWriter {}

    impl OrderWriter for OrderWriter {
        fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order>;
    }
}
