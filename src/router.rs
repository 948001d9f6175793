use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(info(
    title = "orderboard",
    description = "Food-delivery backend: accounts, restaurants, orders, payments, live order feeds"
))]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::restaurant::create_restaurant))
        .routes(routes!(controller::restaurant::my_restaurants))
        .routes(routes!(controller::restaurant::create_dish))
        .routes(routes!(
            controller::order::create_order,
            controller::order::get_orders
        ))
        .routes(routes!(controller::order::get_order))
        .routes(routes!(controller::order::edit_order))
        .routes(routes!(controller::order::take_order))
        .routes(routes!(
            controller::payment::create_payment,
            controller::payment::get_payments
        ))
        .split_for_parts();

    api_router
        // WebSocket feeds are outside the OpenAPI document.
        .route(
            "/api/restaurants/{restaurant_id}/orders/feed",
            get(controller::feed::restaurant_orders_feed),
        )
        .route(
            "/api/orders/feed/cooked",
            get(controller::feed::cooked_orders_feed),
        )
        .route(
            "/api/orders/{order_id}/feed",
            get(controller::feed::order_updates_feed),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
