use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain representation of a rentable product together with its discount
/// tiers.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable name shown on the storefront.
    pub name: String,
    /// Optional photo URL.
    pub photo: Option<String>,
    /// Price for renting one unit for one day, in the smallest currency unit.
    pub daily_price: i64,
    /// Absolute ceiling on simultaneously reserved units for any overlapping
    /// date range.
    pub total_stock: i32,
    /// Inactive products cannot be ordered.
    pub is_active: bool,
    /// Flat totals for renting one unit for exactly `days` days.
    pub pricing_tiers: Vec<PricingTier>,
    /// Flat totals for renting exactly `quantity` units for one day.
    pub quantity_pricing: Vec<QuantityPricing>,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

/// Flat total price for renting ONE unit for exactly `days` days. Applied
/// only on an exact duration match when the rental is longer than one day.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PricingTier {
    pub id: i32,
    pub product_id: i32,
    pub days: i32,
    pub total_price: i64,
}

/// Flat total price for renting exactly `quantity` units for one day.
/// Applied only on an exact quantity match for one-day rentals.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuantityPricing {
    pub id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub total_price: i64,
}

/// Payload required to insert a new product into the catalog.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub photo: Option<String>,
    pub daily_price: i64,
    pub total_stock: i32,
    pub is_active: bool,
    /// `(days, total_price)` pairs inserted alongside the product.
    pub pricing_tiers: Vec<(i32, i64)>,
    /// `(quantity, total_price)` pairs inserted alongside the product.
    pub quantity_pricing: Vec<(i32, i64)>,
    /// Timestamp captured when the product payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload with the supplied details and current
    /// timestamp.
    pub fn new(name: impl Into<String>, daily_price: i64, total_stock: i32) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            photo: None,
            daily_price,
            total_stock,
            is_active: true,
            pricing_tiers: Vec::new(),
            quantity_pricing: Vec::new(),
            updated_at: now,
        }
    }

    /// Attach a photo URL to the product payload.
    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = Some(photo.into());
        self
    }

    /// Add a duration tier: a flat total for one unit rented `days` days.
    pub fn with_pricing_tier(mut self, days: i32, total_price: i64) -> Self {
        self.pricing_tiers.push((days, total_price));
        self
    }

    /// Add a quantity tier: a flat total for `quantity` units rented one day.
    pub fn with_quantity_pricing(mut self, quantity: i32, total_price: i64) -> Self {
        self.quantity_pricing.push((quantity, total_price));
        self
    }

    /// Mark the product as inactive so it cannot be ordered.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
