use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    PricingTier as DomainPricingTier, Product as DomainProduct,
    QuantityPricing as DomainQuantityPricing,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub photo: Option<String>,
    pub daily_price: i64,
    pub total_stock: i32,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::pricing_tiers)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct PricingTier {
    pub id: i32,
    pub product_id: i32,
    pub days: i32,
    pub total_price: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::quantity_pricing)]
#[diesel(belongs_to(Product, foreign_key = product_id))]
pub struct QuantityPricing {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: i64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub photo: Option<&'a str>,
    pub daily_price: i64,
    pub total_stock: i32,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pricing_tiers)]
pub struct NewPricingTier {
    pub product_id: i32,
    pub days: i32,
    pub total_price: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::quantity_pricing)]
pub struct NewQuantityPricing {
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: i64,
}

impl Product {
    pub fn into_domain(
        self,
        pricing_tiers: Vec<PricingTier>,
        quantity_pricing: Vec<QuantityPricing>,
    ) -> DomainProduct {
        DomainProduct {
            id: self.id,
            name: self.name,
            photo: self.photo,
            daily_price: self.daily_price,
            total_stock: self.total_stock,
            is_active: self.is_active,
            pricing_tiers: pricing_tiers
                .into_iter()
                .map(PricingTier::into_domain)
                .collect(),
            quantity_pricing: quantity_pricing
                .into_iter()
                .map(QuantityPricing::into_domain)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl PricingTier {
    pub fn into_domain(self) -> DomainPricingTier {
        DomainPricingTier {
            id: self.id,
            product_id: self.product_id,
            days: self.days,
            total_price: self.total_price,
        }
    }
}

impl QuantityPricing {
    pub fn into_domain(self) -> DomainQuantityPricing {
        DomainQuantityPricing {
            id: self.id,
            product_id: self.product_id,
            quantity: self.quantity,
            total_price: self.total_price,
        }
    }
}

impl<'a> From<&'a crate::domain::product::NewProduct> for NewProduct<'a> {
    fn from(value: &'a crate::domain::product::NewProduct) -> Self {
        Self {
            name: value.name.as_str(),
            photo: value.photo.as_deref(),
            daily_price: value.daily_price,
            total_stock: value.total_stock,
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
