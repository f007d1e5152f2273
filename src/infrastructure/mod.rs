pub mod customer_repo;
mod error_mapping;
pub mod memory;
pub mod models;
pub mod order_repo;
pub mod product_repo;
#[cfg(test)]
mod test_support;

pub use customer_repo::DieselCustomerRepository;
pub use order_repo::DieselOrderRepository;
pub use product_repo::DieselProductRepository;
