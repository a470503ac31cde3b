use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::product::{NewProduct as DomainNewProduct, Product as DomainProduct},
    models::product::{
        NewPricingTier as DbNewPricingTier, NewProduct as DbNewProduct,
        NewQuantityPricing as DbNewQuantityPricing, PricingTier as DbPricingTier,
        Product as DbProduct, QuantityPricing as DbQuantityPricing,
    },
    repository::errors::{RepositoryError, RepositoryResult},
    repository::{DieselRepository, ProductReader, ProductWriter},
};

impl ProductReader for DieselRepository {
    fn get_active_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<DomainProduct>> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let db_products = products::table
            .filter(products::id.eq_any(ids))
            .filter(products::is_active.eq(true))
            .order(products::id.asc())
            .load::<DbProduct>(&mut conn)?;

        let found: Vec<i32> = db_products.iter().map(|product| product.id).collect();
        let mut day_tiers = load_pricing_tiers(&mut conn, &found)?;
        let mut quantity_tiers = load_quantity_pricing(&mut conn, &found)?;

        Ok(db_products
            .into_iter()
            .map(|product| {
                let id = product.id;
                product.into_domain(
                    day_tiers.remove(&id).unwrap_or_default(),
                    quantity_tiers.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::{pricing_tiers, products, quantity_pricing};

        let mut conn = self.conn()?;

        conn.transaction::<DomainProduct, RepositoryError, _>(|conn| {
            let db_new = DbNewProduct::from(new_product);

            let created = diesel::insert_into(products::table)
                .values(&db_new)
                .get_result::<DbProduct>(conn)?;

            let product_id = created.id;

            if !new_product.pricing_tiers.is_empty() {
                let payload: Vec<DbNewPricingTier> = new_product
                    .pricing_tiers
                    .iter()
                    .map(|&(days, total_price)| DbNewPricingTier {
                        product_id,
                        days,
                        total_price,
                    })
                    .collect();

                diesel::insert_into(pricing_tiers::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            if !new_product.quantity_pricing.is_empty() {
                let payload: Vec<DbNewQuantityPricing> = new_product
                    .quantity_pricing
                    .iter()
                    .map(|&(quantity, total_price)| DbNewQuantityPricing {
                        product_id,
                        quantity,
                        total_price,
                    })
                    .collect();

                diesel::insert_into(quantity_pricing::table)
                    .values(&payload)
                    .execute(conn)?;
            }

            let mut day_tiers = load_pricing_tiers(conn, &[product_id])?;
            let mut quantity_tiers = load_quantity_pricing(conn, &[product_id])?;

            Ok(created.into_domain(
                day_tiers.remove(&product_id).unwrap_or_default(),
                quantity_tiers.remove(&product_id).unwrap_or_default(),
            ))
        })
    }
}

fn load_pricing_tiers(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbPricingTier>>> {
    use crate::schema::pricing_tiers;

    let mut by_product: HashMap<i32, Vec<DbPricingTier>> = HashMap::new();

    if product_ids.is_empty() {
        return Ok(by_product);
    }

    let rows = pricing_tiers::table
        .filter(pricing_tiers::product_id.eq_any(product_ids))
        .order(pricing_tiers::days.asc())
        .load::<DbPricingTier>(conn)?;

    for row in rows {
        by_product.entry(row.product_id).or_default().push(row);
    }

    Ok(by_product)
}

fn load_quantity_pricing(
    conn: &mut SqliteConnection,
    product_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<DbQuantityPricing>>> {
    use crate::schema::quantity_pricing;

    let mut by_product: HashMap<i32, Vec<DbQuantityPricing>> = HashMap::new();

    if product_ids.is_empty() {
        return Ok(by_product);
    }

    let rows = quantity_pricing::table
        .filter(quantity_pricing::product_id.eq_any(product_ids))
        .order(quantity_pricing::quantity.asc())
        .load::<DbQuantityPricing>(conn)?;

    for row in rows {
        by_product.entry(row.product_id).or_default().push(row);
    }

    Ok(by_product)
}
