use chrono::NaiveDate;

use ijara_orders::auth::AuthenticatedUser;
use ijara_orders::domain::address::NewAddress;
use ijara_orders::domain::delivery_zone::NewDeliveryZone;
use ijara_orders::domain::order::{DeliveryType, PaymentMethod};
use ijara_orders::domain::product::NewProduct;
use ijara_orders::forms::orders::{CreateOrderForm, OrderItemForm};
use ijara_orders::repository::{
    AddressWriter, DeliveryZoneWriter, DieselRepository, ProductWriter,
};
use ijara_orders::services::ServiceError;
use ijara_orders::services::orders::place_order;

mod common;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn order_form(
    items: Vec<(i32, i32)>,
    delivery_type: DeliveryType,
    delivery_address_id: Option<i32>,
) -> CreateOrderForm {
    CreateOrderForm {
        items: items
            .into_iter()
            .map(|(product_id, quantity)| OrderItemForm {
                product_id,
                quantity,
            })
            .collect(),
        delivery_type,
        delivery_address_id,
        rental_start_date: date(2025, 6, 1),
        rental_end_date: date(2025, 6, 8),
        payment_method: PaymentMethod::Click,
        notes: Some("Deliver before noon".to_string()),
    }
}

#[test]
fn place_order_prices_tiers_and_routes_the_delivery_fee() {
    let test_db = common::TestDb::new("service_place_order_end_to_end.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = AuthenticatedUser { id: 1 };

    let product = repo
        .create_product(
            &NewProduct::new("Banquet chair", 10_000, 50).with_pricing_tier(7, 60_000),
        )
        .expect("create product");

    let address = repo
        .create_address(&NewAddress::new(1, "Samarkand", "Registan 1"))
        .expect("create address");

    repo.create_delivery_zone(&NewDeliveryZone::new("Samarkand", 45_000))
        .expect("create zone");

    let form = order_form(
        vec![(product.id, 2)],
        DeliveryType::Delivery,
        Some(address.id),
    );

    let view = place_order(&repo, &user, form).expect("order should be placed");

    // the 7-day tier applies per unit: 60_000 * 2 against 10_000 * 2 * 7
    assert_eq!(view.order.subtotal, 120_000);
    assert_eq!(view.order.total_savings, 20_000);
    assert_eq!(view.order.delivery_fee, 45_000);
    assert_eq!(view.order.total_amount, 165_000);
    assert_eq!(view.order.notes.as_deref(), Some("Deliver before noon"));
    assert_eq!(
        view.delivery_address.as_ref().map(|a| a.city.as_str()),
        Some("Samarkand")
    );

    let prefix = chrono::Local::now().date_naive().format("%Y%m%d").to_string();
    assert_eq!(view.order.order_number, format!("{prefix}0001"));
}

#[test]
fn place_order_rejects_overbooking_across_requests() {
    let test_db = common::TestDb::new("service_place_order_overbooking.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = AuthenticatedUser { id: 1 };

    let product = repo
        .create_product(&NewProduct::new("Marquee", 10_000, 3))
        .expect("create product");

    let form = order_form(vec![(product.id, 2)], DeliveryType::SelfPickup, None);
    place_order(&repo, &user, form).expect("first order fits");

    let form = order_form(vec![(product.id, 2)], DeliveryType::SelfPickup, None);
    let err = place_order(&repo, &user, form).expect_err("second order must not fit");

    assert!(matches!(
        err,
        ServiceError::InsufficientStock { product_id } if product_id == product.id
    ));
}

#[test]
fn place_order_rejects_addresses_of_other_users() {
    let test_db = common::TestDb::new("service_place_order_foreign_address.db");
    let repo = DieselRepository::new(test_db.pool());
    let user = AuthenticatedUser { id: 1 };

    let product = repo
        .create_product(&NewProduct::new("Dance floor", 10_000, 5))
        .expect("create product");

    let foreign_address = repo
        .create_address(&NewAddress::new(2, "Tashkent", "Navoi 10"))
        .expect("create address");

    let form = order_form(
        vec![(product.id, 1)],
        DeliveryType::Delivery,
        Some(foreign_address.id),
    );

    let err = place_order(&repo, &user, form).expect_err("foreign address must be rejected");
    assert!(matches!(err, ServiceError::AddressRequired));
}
