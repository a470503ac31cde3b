use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A city outside the base city where courier delivery is offered for a
/// configured fee.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DeliveryZone {
    /// Unique identifier of the zone.
    pub id: i32,
    /// City name matched against the delivery address city.
    pub name: String,
    /// Delivery fee in the smallest currency unit.
    pub price: i64,
    /// Inactive zones are ignored when routing fees.
    pub is_active: bool,
    /// Timestamp for when the zone record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the zone record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new delivery zone.
#[derive(Debug, Clone)]
pub struct NewDeliveryZone {
    pub name: String,
    pub price: i64,
    pub is_active: bool,
    /// Timestamp captured when the zone payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewDeliveryZone {
    /// Build a new zone payload with the supplied details and current
    /// timestamp.
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            name: name.into(),
            price,
            is_active: true,
            updated_at: now,
        }
    }

    /// Mark the zone as inactive so it is ignored during fee routing.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }
}
