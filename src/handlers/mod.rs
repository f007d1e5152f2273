pub mod auth;
pub mod catalog;
pub mod customers;
pub mod dashboard;
pub mod health;

use std::sync::Arc;

use actix_web::web;

use crate::application::{CatalogService, CustomerService};
use crate::db::DbPool;
use crate::domain::authorization::{default_authorizer, Authorizer};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::errors::AppError;
use crate::infrastructure::{DieselCustomerRepository, DieselOrderRepository, DieselProductRepository};

/// Shared per-application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub customers: CustomerService,
    pub catalog: CatalogService,
    pub authorizer: Arc<dyn Authorizer>,
    pub default_page_size: i64,
}

impl AppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        authorizer: Arc<dyn Authorizer>,
        default_page_size: i64,
        max_page_size: i64,
    ) -> Self {
        Self {
            customers: CustomerService::new(customers, orders.clone(), max_page_size),
            catalog: CatalogService::new(orders, products),
            authorizer,
            default_page_size,
        }
    }

    /// State backed by the Diesel repositories and the default policy table.
    pub fn with_postgres(pool: DbPool, default_page_size: i64, max_page_size: i64) -> Self {
        Self::new(
            Arc::new(DieselCustomerRepository::new(pool.clone())),
            Arc::new(DieselOrderRepository::new(pool.clone())),
            Arc::new(DieselProductRepository::new(pool)),
            Arc::new(default_authorizer()),
            default_page_size,
            max_page_size,
        )
    }
}

/// Register every route. Shared by the server and the handler tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Malformed query strings and bodies get the same JSON error body as
    // every other 400.
    cfg.app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/health", web::get().to(health::health))
    .service(
        web::scope("/customers")
            .route("", web::get().to(customers::list_customers))
            .route("", web::post().to(customers::create_customer))
            .route("/{id}", web::get().to(customers::get_customer)),
    )
    .service(
        web::scope("/orders")
            .route("", web::get().to(catalog::list_orders))
            .route("/{id}", web::get().to(catalog::get_order)),
    )
    .service(
        web::scope("/products")
            .route("", web::get().to(catalog::list_products))
            .route("/{id}", web::get().to(catalog::get_product)),
    )
    .route("/dashboard", web::get().to(dashboard::dashboard))
    .route(
        "/fuel-reimbursement",
        web::get().to(dashboard::fuel_reimbursement),
    );
}
