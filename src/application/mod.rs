pub mod catalog_service;
pub mod customer_service;

pub use catalog_service::CatalogService;
pub use customer_service::{CustomerDetails, CustomerService};
