use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::authorization::{Policy, Principal};
use crate::domain::order::{Order, OrderLineItem};
use crate::domain::product::Product;
use crate::errors::AppError;

use super::auth::require;
use super::AppState;

// ── Response DTOs ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product_id: i32,
    /// Decimal price as a string to avoid floating-point issues, e.g. "14.0000"
    pub unit_price: String,
    pub quantity: i16,
    pub discount: String,
}

impl From<OrderLineItem> for OrderLineResponse {
    fn from(l: OrderLineItem) -> Self {
        OrderLineResponse {
            product_id: l.product_id,
            unit_price: l.unit_price.to_string(),
            quantity: l.quantity,
            discount: l.discount.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: i32,
    pub customer_id: String,
    pub order_date: String,
    pub lines: Vec<OrderLineResponse>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            order_id: o.order_id,
            customer_id: o.customer_id,
            order_date: o.order_date.to_rfc3339(),
            lines: o.lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub product_id: i32,
    pub product_name: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        ProductResponse {
            product_id: p.product_id,
            product_name: p.product_name,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "All orders with their lines", body = [OrderResponse]),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    state: web::Data<AppState>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let service = state.catalog.clone();
    let orders = web::block(move || service.list_orders())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<OrderResponse> = orders.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /orders/{id}
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = i32, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let order_id = path.into_inner();
    let service = state.catalog.clone();
    let order = web::block(move || service.get_order(order_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match order {
        Some(order) => Ok(HttpResponse::Ok().json(OrderResponse::from(order))),
        None => Err(AppError::NotFound),
    }
}

/// GET /products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = [ProductResponse]),
    ),
    tag = "products"
)]
pub async fn list_products(
    state: web::Data<AppState>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let service = state.catalog.clone();
    let products = web::block(move || service.list_products())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    let body: Vec<ProductResponse> = products.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /products/{id}
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found"),
    ),
    tag = "products"
)]
pub async fn get_product(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let product_id = path.into_inner();
    let service = state.catalog.clone();
    let product = web::block(move || service.get_product(product_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match product {
        Some(product) => Ok(HttpResponse::Ok().json(ProductResponse::from(product))),
        None => Err(AppError::NotFound),
    }
}
