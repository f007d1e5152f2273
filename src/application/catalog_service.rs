use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::Order;
use crate::domain::ports::{OrderRepository, ProductRepository};
use crate::domain::product::Product;

/// Read-only access to raw orders and products.
#[derive(Clone)]
pub struct CatalogService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(orders: Arc<dyn OrderRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { orders, products }
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.orders.all()
    }

    pub fn get_order(&self, order_id: i32) -> Result<Option<Order>, DomainError> {
        self.orders.find_by_id(order_id)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.products.all()
    }

    pub fn get_product(&self, product_id: i32) -> Result<Option<Product>, DomainError> {
        self.products.find_by_id(product_id)
    }
}
