use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{Order, OrderSummary};
use super::pagination::PageRequest;
use super::product::Product;

pub trait CustomerRepository: Send + Sync + 'static {
    fn count(&self) -> Result<i64, DomainError>;
    /// Customers of one page, ordered by `customer_id`.
    fn page(&self, request: PageRequest) -> Result<Vec<Customer>, DomainError>;
    /// One page together with the whole-table count. Stores that can read
    /// both from one snapshot should override this.
    fn page_with_count(&self, request: PageRequest) -> Result<(Vec<Customer>, i64), DomainError> {
        let items = self.page(request)?;
        let total = self.count()?;
        Ok((items, total))
    }
    fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, DomainError>;
    fn add(&self, customer: NewCustomer) -> Result<(), DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    /// Every order of the customer with its total computed from the full set
    /// of line items, ordered by order date then id.
    fn summaries_for_customer(&self, customer_id: &str) -> Result<Vec<OrderSummary>, DomainError>;
    fn all(&self) -> Result<Vec<Order>, DomainError>;
    fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn all(&self) -> Result<Vec<Product>, DomainError>;
    fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, DomainError>;
}
