pub mod address;
pub mod delivery_zone;
pub mod order;
pub mod product;
