use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::CustomerDetails;
use crate::domain::authorization::{Policy, Principal};
use crate::domain::customer::Customer;
use crate::domain::order::OrderSummary;
use crate::domain::pagination::CustomerPage;
use crate::errors::AppError;

use super::auth::require;
use super::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub customer_id: String,
    pub company_name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(c: Customer) -> Self {
        CustomerResponse {
            customer_id: c.customer_id,
            company_name: c.company_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub customer_id: String,
    pub company_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCustomersParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPageResponse {
    pub customers: Vec<CustomerResponse>,
    pub page_number: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl From<CustomerPage> for CustomerPageResponse {
    fn from(page: CustomerPage) -> Self {
        let total_pages = page.total_pages();
        let has_previous_page = page.has_previous_page();
        let has_next_page = page.has_next_page();
        let page = page.map(CustomerResponse::from);
        CustomerPageResponse {
            customers: page.items,
            page_number: page.page_number,
            page_size: page.page_size,
            total_count: page.total_count,
            total_pages,
            has_previous_page,
            has_next_page,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryResponse {
    pub order_id: i32,
    pub order_date: String,
    /// Unrounded decimal total, e.g. "239.575"
    pub total_amount: String,
}

impl From<OrderSummary> for OrderSummaryResponse {
    fn from(o: OrderSummary) -> Self {
        OrderSummaryResponse {
            order_id: o.order_id,
            order_date: o.order_date.to_rfc3339(),
            total_amount: o.total_amount.normalized().to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetailsResponse {
    pub customer: CustomerResponse,
    pub orders: Vec<OrderSummaryResponse>,
}

impl From<CustomerDetails> for CustomerDetailsResponse {
    fn from(d: CustomerDetails) -> Self {
        CustomerDetailsResponse {
            customer: d.customer.into(),
            orders: d.orders.into_iter().map(Into::into).collect(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /customers
///
/// Returns one page of customers ordered by id. Out-of-range `page` or
/// `pageSize` values are rejected with 400 rather than clamped.
#[utoipa::path(
    get,
    path = "/customers",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, default 1)"),
        ("pageSize" = Option<i64>, Query, description = "Customers per page (default from config)"),
    ),
    responses(
        (status = 200, description = "One page of customers", body = CustomerPageResponse),
        (status = 400, description = "Invalid pagination"),
        (status = 401, description = "No authenticated user"),
        (status = 403, description = "Policy ViewCustomers not satisfied"),
    ),
    tag = "customers"
)]
pub async fn list_customers(
    state: web::Data<AppState>,
    principal: Principal,
    query: web::Query<ListCustomersParams>,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let params = query.into_inner();
    let page_number = params.page.unwrap_or(1);
    let page_size = params.page_size.unwrap_or(state.default_page_size);

    let service = state.customers.clone();
    let page = web::block(move || service.list_customers(page_number, page_size))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(CustomerPageResponse::from(page)))
}

/// POST /customers
#[utoipa::path(
    post,
    path = "/customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerResponse),
        (status = 400, description = "Missing or oversized field"),
        (status = 409, description = "Customer id already exists"),
    ),
    tag = "customers"
)]
pub async fn create_customer(
    state: web::Data<AppState>,
    principal: Principal,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let body = body.into_inner();
    let service = state.customers.clone();
    let customer = web::block(move || service.create_customer(&body.customer_id, &body.company_name))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Created().json(CustomerResponse::from(customer)))
}

/// GET /customers/{id}
///
/// Returns the customer together with a summary of each of its orders.
#[utoipa::path(
    get,
    path = "/customers/{id}",
    params(
        ("id" = String, Path, description = "Customer id, e.g. ALFKI"),
    ),
    responses(
        (status = 200, description = "Customer found", body = CustomerDetailsResponse),
        (status = 400, description = "Blank customer id"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "customers"
)]
pub async fn get_customer(
    state: web::Data<AppState>,
    principal: Principal,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::ViewCustomers)?;

    let customer_id = path.into_inner().trim().to_string();
    if customer_id.is_empty() {
        return Err(AppError::BadRequest("customer id is required".to_string()));
    }

    let service = state.customers.clone();
    let details = web::block(move || service.get_customer_details(&customer_id))
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    match details {
        Some(details) => Ok(HttpResponse::Ok().json(CustomerDetailsResponse::from(details))),
        None => Err(AppError::NotFound),
    }
}
