use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A delivery address from the caller's address book.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Address {
    /// Unique identifier of the address.
    pub id: i32,
    /// Owning user identifier.
    pub user_id: i32,
    /// Optional label such as "Home" or "Office".
    pub label: Option<String>,
    /// City name; determines whether a delivery fee applies.
    pub city: String,
    /// Street and house details.
    pub street: String,
    /// Timestamp for when the address record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the address record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new address for a user.
#[derive(Debug, Clone)]
pub struct NewAddress {
    pub user_id: i32,
    pub label: Option<String>,
    pub city: String,
    pub street: String,
    /// Timestamp captured when the address payload was created.
    pub updated_at: NaiveDateTime,
}

impl NewAddress {
    /// Build a new address payload with the supplied details and current
    /// timestamp.
    pub fn new(user_id: i32, city: impl Into<String>, street: impl Into<String>) -> Self {
        let now = chrono::Local::now().naive_utc();
        Self {
            user_id,
            label: None,
            city: city.into(),
            street: street.into(),
            updated_at: now,
        }
    }

    /// Attach a label to the address payload.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
