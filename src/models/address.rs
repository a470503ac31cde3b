use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::address::{Address as DomainAddress, NewAddress as DomainNewAddress};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct Address {
    pub id: i32,
    pub user_id: i32,
    pub label: Option<String>,
    pub city: String,
    pub street: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct NewAddress<'a> {
    pub user_id: i32,
    pub label: Option<&'a str>,
    pub city: &'a str,
    pub street: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Address> for DomainAddress {
    fn from(value: Address) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            label: value.label,
            city: value.city,
            street: value.street,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewAddress> for NewAddress<'a> {
    fn from(value: &'a DomainNewAddress) -> Self {
        Self {
            user_id: value.user_id,
            label: value.label.as_deref(),
            city: value.city.as_str(),
            street: value.street.as_str(),
            updated_at: value.updated_at,
        }
    }
}
