use actix_web::{HttpResponse, Responder, get, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::orders::CreateOrderForm;
use crate::repository::DieselRepository;
use crate::routes::{error_response, success_body};
use crate::services::orders::{self as order_service, OrdersQuery};

#[post("/v1/orders")]
/// Place a new rental order for the authenticated user.
///
/// Responds `201` with the expanded order, or a 4xx with a machine-readable
/// reason for validation and business-rule failures.
pub async fn create_order(
    form: web::Json<CreateOrderForm>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::place_order(repo.get_ref(), &user, form.into_inner()) {
        Ok(view) => HttpResponse::Created().json(success_body("Order created", view)),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/orders/{order_id}")]
/// Return one of the authenticated user's orders.
pub async fn show_order(
    path: web::Path<i32>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::get_order(repo.get_ref(), &user, path.into_inner()) {
        Ok(view) => HttpResponse::Ok().json(success_body("OK", view)),
        Err(err) => error_response(&err),
    }
}

#[get("/v1/orders")]
/// Return a paginated list of the authenticated user's orders, newest first.
pub async fn list_orders(
    params: web::Query<OrdersQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match order_service::list_orders(repo.get_ref(), &user, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(success_body("OK", page)),
        Err(err) => error_response(&err),
    }
}
