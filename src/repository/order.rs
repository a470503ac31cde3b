use std::collections::HashMap;

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::order::{
        NewOrder as DomainNewOrder, Order as DomainOrder, OrderListQuery, OrderStatus,
        OrderStatusEvent as DomainOrderStatusEvent,
    },
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem,
        NewOrderStatusEvent as DbNewOrderStatusEvent, Order as DbOrder, OrderItem as DbOrderItem,
        OrderStatusEvent as DbOrderStatusEvent,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, OrderReader, OrderWriter},
};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32, user_id: i32) -> RepositoryResult<Option<DomainOrder>> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;
        let order = orders::table
            .filter(orders::id.eq(id))
            .filter(orders::user_id.eq(user_id))
            .first::<DbOrder>(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let order_id = order.id;

        let items = order_items::table
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        Ok(Some(DomainOrder::from((order, items))))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        use crate::schema::{order_items, orders};

        let mut conn = self.conn()?;

        let OrderListQuery {
            user_id,
            status,
            pagination,
        } = query;

        let status_filter = status.map(OrderStatus::as_str);

        let mut count_query = orders::table
            .filter(orders::user_id.eq(user_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            count_query = count_query.filter(orders::status.eq(status_value));
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items_query = orders::table
            .filter(orders::user_id.eq(user_id))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(status_value) = status_filter {
            items_query = items_query.filter(orders::status.eq(status_value));
        }

        items_query = items_query.order(orders::created_at.desc());

        if let Some(pagination) = pagination {
            let offset = ((pagination.page.max(1) - 1) * pagination.per_page) as i64;
            let limit = pagination.per_page as i64;
            items_query = items_query.offset(offset).limit(limit);
        }

        let db_orders = items_query.load::<DbOrder>(&mut conn)?;
        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();

        let rows = order_items::table
            .filter(order_items::order_id.eq_any(&order_ids))
            .order(order_items::id.asc())
            .load::<DbOrderItem>(&mut conn)?;

        let mut items_by_order: HashMap<i32, Vec<DbOrderItem>> = HashMap::new();
        for item in rows {
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        let orders = db_orders
            .into_iter()
            .map(|order| {
                let order_id = order.id;
                let items = items_by_order.remove(&order_id).unwrap_or_default();
                DomainOrder::from((order, items))
            })
            .collect();

        Ok((total, orders))
    }

    fn reserved_quantity(
        &self,
        product_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepositoryResult<i64> {
        let mut conn = self.conn()?;
        reserved_quantity_on(&mut conn, product_id, start, end)
    }

    fn order_status_history(
        &self,
        order_id: i32,
    ) -> RepositoryResult<Vec<DomainOrderStatusEvent>> {
        use crate::schema::order_status_history;

        let mut conn = self.conn()?;
        let rows = order_status_history::table
            .filter(order_status_history::order_id.eq(order_id))
            .order(order_status_history::id.asc())
            .load::<DbOrderStatusEvent>(&mut conn)?;

        Ok(rows
            .into_iter()
            .map(DbOrderStatusEvent::into_domain)
            .collect())
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &DomainNewOrder) -> RepositoryResult<DomainOrder> {
        use crate::schema::{order_items, order_status_history, orders, products};

        let mut conn = self.conn()?;

        // An immediate transaction takes SQLite's write lock up front, so
        // the availability re-check, the order-number derivation, and the
        // inserts are serialized against competing placements.
        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            // duplicate lines count once, against their summed quantity
            let mut requested: HashMap<i32, i64> = HashMap::new();
            for item in &new_order.items {
                *requested.entry(item.product_id).or_insert(0) += i64::from(item.quantity);
            }

            for (&product_id, &quantity) in &requested {
                let total_stock = products::table
                    .filter(products::id.eq(product_id))
                    .select(products::total_stock)
                    .first::<i32>(conn)?;

                let reserved = reserved_quantity_on(
                    conn,
                    product_id,
                    new_order.rental_start_date,
                    new_order.rental_end_date,
                )?;

                if i64::from(total_stock) - reserved < quantity {
                    return Err(RepositoryError::StockConflict { product_id });
                }
            }

            let order_number = next_order_number(conn, chrono::Local::now().date_naive())?;

            let db_new = DbNewOrder::from_domain(&order_number, new_order);
            let created = diesel::insert_into(orders::table)
                .values(&db_new)
                .get_result::<DbOrder>(conn)?;

            let order_id = created.id;

            let payload: Vec<DbNewOrderItem> = new_order
                .items
                .iter()
                .map(|item| DbNewOrderItem::from_domain(order_id, item))
                .collect();

            diesel::insert_into(order_items::table)
                .values(&payload)
                .execute(conn)?;

            diesel::insert_into(order_status_history::table)
                .values(&DbNewOrderStatusEvent {
                    order_id,
                    status: new_order.status.as_str(),
                })
                .execute(conn)?;

            let items = order_items::table
                .filter(order_items::order_id.eq(order_id))
                .order(order_items::id.asc())
                .load::<DbOrderItem>(conn)?;

            Ok(DomainOrder::from((created, items)))
        })
    }
}

/// Units of `product_id` held by orders in an active status whose rental
/// interval overlaps `[start, end]`. Bounds are inclusive on both sides: an
/// order ending on the day another starts still blocks that day's stock.
fn reserved_quantity_on(
    conn: &mut SqliteConnection,
    product_id: i32,
    start: NaiveDate,
    end: NaiveDate,
) -> RepositoryResult<i64> {
    use crate::schema::{order_items, orders};

    let reserved: Option<i64> = order_items::table
        .inner_join(orders::table)
        .filter(order_items::product_id.eq(product_id))
        .filter(orders::status.eq_any(OrderStatus::ACTIVE.map(OrderStatus::as_str)))
        .filter(orders::rental_start_date.le(end))
        .filter(orders::rental_end_date.ge(start))
        .select(diesel::dsl::sum(order_items::quantity))
        .first(conn)?;

    Ok(reserved.unwrap_or(0))
}

diesel::define_sql_function! {
    /// SQLite's `LENGTH`.
    fn length(x: diesel::sql_types::Text) -> diesel::sql_types::Integer;
}

/// Derive the next `YYYYMMDDnnnn` order number for `today` by incrementing
/// the greatest sequence already issued under today's prefix. Candidates are
/// ranked by length before value so the sequence keeps counting past four
/// digits instead of wrapping back onto an issued number. Runs inside the
/// placement transaction; the UNIQUE column is the backstop.
fn next_order_number(conn: &mut SqliteConnection, today: NaiveDate) -> RepositoryResult<String> {
    use crate::schema::orders;

    let prefix = today.format("%Y%m%d").to_string();

    let last: Option<String> = orders::table
        .filter(orders::order_number.like(format!("{prefix}%")))
        .order((length(orders::order_number).desc(), orders::order_number.desc()))
        .select(orders::order_number)
        .first(conn)
        .optional()?;

    let sequence = last
        .and_then(|number| number[prefix.len()..].parse::<u32>().ok())
        .unwrap_or(0)
        + 1;

    Ok(format!("{prefix}{sequence:04}"))
}
