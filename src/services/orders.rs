use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::BASE_CITY;
use crate::auth::AuthenticatedUser;
use crate::domain::address::Address;
use crate::domain::order::{
    DeliveryType, NewOrder, NewOrderItem, Order, OrderListQuery, OrderStatus,
};
use crate::domain::product::Product;
use crate::forms::orders::CreateOrderForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{
    AddressReader, DeliveryZoneReader, OrderReader, OrderWriter, ProductReader,
};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the order list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
}

/// An order expanded with its resolved delivery address, as returned on the
/// wire.
#[derive(Debug, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub delivery_address: Option<Address>,
}

impl OrderView {
    pub fn new(order: Order, delivery_address: Option<Address>) -> Self {
        Self {
            order,
            delivery_address,
        }
    }
}

/// Price and savings computed for one order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePrice {
    pub total: i64,
    pub savings: i64,
}

/// Places an order for the authenticated user: validates the payload,
/// checks availability for the rental period, prices each line through the
/// tier rules, routes the delivery fee, and persists everything atomically.
pub fn place_order<R>(
    repo: &R,
    user: &AuthenticatedUser,
    form: CreateOrderForm,
) -> ServiceResult<OrderView>
where
    R: ProductReader + AddressReader + DeliveryZoneReader + OrderReader + OrderWriter + ?Sized,
{
    form.validate()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    let days = rental_days(form.rental_start_date, form.rental_end_date)?;

    let address = match form.delivery_type {
        DeliveryType::Delivery => {
            let address_id = form
                .delivery_address_id
                .ok_or(ServiceError::AddressRequired)?;
            let address = repo
                .get_address_by_id(address_id, user.id)?
                .ok_or(ServiceError::AddressRequired)?;
            Some(address)
        }
        DeliveryType::SelfPickup => None,
    };

    let mut requested_ids: Vec<i32> = form.items.iter().map(|item| item.product_id).collect();
    requested_ids.sort_unstable();
    requested_ids.dedup();

    let products = repo.get_active_products_by_ids(&requested_ids)?;
    // the whole order is rejected when any product is missing or inactive
    if products.len() != requested_ids.len() {
        return Err(ServiceError::ProductNotFound);
    }

    let products_by_id: HashMap<i32, &Product> = products
        .iter()
        .map(|product| (product.id, product))
        .collect();

    // quantities are summed per product so duplicate lines cannot slip
    // past the stock ceiling
    let mut requested_totals: HashMap<i32, i64> = HashMap::new();
    for requested in &form.items {
        *requested_totals.entry(requested.product_id).or_insert(0) +=
            i64::from(requested.quantity);
    }

    for &product_id in &requested_ids {
        let product = products_by_id
            .get(&product_id)
            .ok_or(ServiceError::ProductNotFound)?;
        let requested_total = requested_totals.get(&product_id).copied().unwrap_or(0);

        let reserved =
            repo.reserved_quantity(product.id, form.rental_start_date, form.rental_end_date)?;
        if i64::from(product.total_stock) - reserved < requested_total {
            return Err(ServiceError::InsufficientStock {
                product_id: product.id,
            });
        }
    }

    let mut items = Vec::with_capacity(form.items.len());
    let mut subtotal = 0i64;
    let mut total_savings = 0i64;

    for requested in &form.items {
        let product = products_by_id
            .get(&requested.product_id)
            .ok_or(ServiceError::ProductNotFound)?;

        let price = price_line(product, requested.quantity, days);
        subtotal += price.total;
        total_savings += price.savings;

        items.push(NewOrderItem {
            product_id: product.id,
            product_name: product.name.clone(),
            product_photo: product.photo.clone(),
            quantity: requested.quantity,
            daily_price: product.daily_price,
            total_price: price.total,
            savings: price.savings,
        });
    }

    let delivery_fee = delivery_fee_for(repo, address.as_ref())?;

    let mut new_order = NewOrder::new(
        user.id,
        form.delivery_type,
        form.payment_method,
        form.rental_start_date,
        form.rental_end_date,
    )
    .with_items(items, subtotal, total_savings)
    .with_delivery(address.as_ref().map(|address| address.id), delivery_fee);

    if let Some(notes) = form
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
    {
        new_order = new_order.with_notes(notes);
    }

    let order = repo.create_order(&new_order)?;

    Ok(OrderView::new(order, address))
}

/// Fetch one of the caller's orders, expanded with its delivery address.
pub fn get_order<R>(repo: &R, user: &AuthenticatedUser, order_id: i32) -> ServiceResult<OrderView>
where
    R: OrderReader + AddressReader + ?Sized,
{
    let order = repo
        .get_order_by_id(order_id, user.id)?
        .ok_or(ServiceError::NotFound)?;

    expand_address(repo, user, order)
}

/// List the caller's orders, newest first.
pub fn list_orders<R>(
    repo: &R,
    user: &AuthenticatedUser,
    query: OrdersQuery,
) -> ServiceResult<Paginated<OrderView>>
where
    R: OrderReader + AddressReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = OrderListQuery::new(user.id).paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(status) = query.status {
        list_query = list_query.status(status);
    }

    let (total, orders) = repo.list_orders(list_query)?;

    let mut views = Vec::with_capacity(orders.len());
    for order in orders {
        views.push(expand_address(repo, user, order)?);
    }

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    Ok(Paginated::new(views, page, total_pages))
}

fn expand_address<R>(
    repo: &R,
    user: &AuthenticatedUser,
    order: Order,
) -> ServiceResult<OrderView>
where
    R: AddressReader + ?Sized,
{
    let delivery_address = match order.delivery_address_id {
        Some(address_id) => repo.get_address_by_id(address_id, user.id)?,
        None => None,
    };

    Ok(OrderView::new(order, delivery_address))
}

/// Whole rental days between the two dates. The range must be strictly
/// increasing and at least one day long.
fn rental_days(start: NaiveDate, end: NaiveDate) -> ServiceResult<i64> {
    if start >= end {
        return Err(ServiceError::InvalidDateRange);
    }

    let days = (end - start).num_days();
    if days < 1 {
        return Err(ServiceError::MinimumRentalDuration);
    }

    Ok(days)
}

/// Price one order line. Tier lookup is exact-match only: a quantity tier
/// applies to one-day rentals whose quantity equals the tier's, a duration
/// tier applies to longer rentals whose day count equals the tier's, and
/// everything else falls back to the plain daily price.
pub fn price_line(product: &Product, quantity: i32, rental_days: i64) -> LinePrice {
    let quantity = i64::from(quantity);
    let full = product.daily_price * quantity * rental_days;

    let discounted = if rental_days == 1 {
        product
            .quantity_pricing
            .iter()
            .find(|tier| i64::from(tier.quantity) == quantity)
            .map(|tier| tier.total_price)
    } else {
        product
            .pricing_tiers
            .iter()
            .find(|tier| i64::from(tier.days) == rental_days)
            .map(|tier| tier.total_price * quantity)
    };

    match discounted {
        Some(total) => LinePrice {
            total,
            savings: full - total,
        },
        None => LinePrice {
            total: full,
            savings: 0,
        },
    }
}

/// Delivery fee for the resolved address: free for self-pickup and for the
/// base city, the configured zone price elsewhere, zero when no active zone
/// matches the city.
fn delivery_fee_for<R>(repo: &R, address: Option<&Address>) -> ServiceResult<i64>
where
    R: DeliveryZoneReader + ?Sized,
{
    let Some(address) = address else {
        return Ok(0);
    };

    if address.city.eq_ignore_ascii_case(BASE_CITY) {
        return Ok(0);
    }

    let zone = repo.get_active_zone_by_name(&address.city)?;
    Ok(zone.map(|zone| zone.price).unwrap_or(0))
}
