use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::authorization::{Policy, Principal};
use crate::errors::AppError;

use super::auth::require;
use super::AppState;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub customer_count: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelReimbursementResponse {
    pub user: String,
}

/// GET /dashboard
///
/// Admin-only overview.
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Overview counters", body = DashboardResponse),
        (status = 403, description = "Caller is not an Admin"),
    ),
    tag = "dashboard"
)]
pub async fn dashboard(
    state: web::Data<AppState>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::Dashboard)?;

    let service = state.customers.clone();
    let customer_count = web::block(move || service.count_customers())
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(DashboardResponse { customer_count }))
}

/// GET /fuel-reimbursement
///
/// Only reachable by callers holding the company-car claim.
#[utoipa::path(
    get,
    path = "/fuel-reimbursement",
    responses(
        (status = 200, description = "Caller may file fuel reimbursements", body = FuelReimbursementResponse),
        (status = 403, description = "Caller lacks the company-car claim"),
    ),
    tag = "dashboard"
)]
pub async fn fuel_reimbursement(
    state: web::Data<AppState>,
    principal: Principal,
) -> Result<HttpResponse, AppError> {
    require(&state, &principal, Policy::CompanyCar)?;

    Ok(HttpResponse::Ok().json(FuelReimbursementResponse {
        user: principal.user,
    }))
}
