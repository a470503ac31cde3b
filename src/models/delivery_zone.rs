use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::delivery_zone::{
    DeliveryZone as DomainDeliveryZone, NewDeliveryZone as DomainNewDeliveryZone,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::delivery_zones)]
pub struct DeliveryZone {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::delivery_zones)]
pub struct NewDeliveryZone<'a> {
    pub name: &'a str,
    pub price: i64,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

impl From<DeliveryZone> for DomainDeliveryZone {
    fn from(value: DeliveryZone) -> Self {
        Self {
            id: value.id,
            name: value.name,
            price: value.price,
            is_active: value.is_active,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDeliveryZone> for NewDeliveryZone<'a> {
    fn from(value: &'a DomainNewDeliveryZone) -> Self {
        Self {
            name: value.name.as_str(),
            price: value.price,
            is_active: value.is_active,
            updated_at: value.updated_at,
        }
    }
}
