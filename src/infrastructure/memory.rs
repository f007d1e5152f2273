//! In-memory repositories.
//!
//! Backed by `BTreeMap`s behind an `RwLock`, so iteration order is the key
//! order the Diesel repositories sort by. Used by the handler tests and for
//! running the service without a database.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderSummary};
use crate::domain::pagination::PageRequest;
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::Product;

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>, DomainError> {
    lock.read()
        .map_err(|_| DomainError::Internal("in-memory store lock poisoned".to_string()))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>, DomainError> {
    lock.write()
        .map_err(|_| DomainError::Internal("in-memory store lock poisoned".to_string()))
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<BTreeMap<String, Customer>>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customers(customers: impl IntoIterator<Item = Customer>) -> Self {
        let map = customers
            .into_iter()
            .map(|c| (c.customer_id.clone(), c))
            .collect();
        Self {
            customers: Arc::new(RwLock::new(map)),
        }
    }
}

impl CustomerRepository for InMemoryCustomerRepository {
    fn count(&self) -> Result<i64, DomainError> {
        let len = read(&self.customers)?.len();
        i64::try_from(len).map_err(|e| DomainError::Internal(e.to_string()))
    }

    fn page(&self, request: PageRequest) -> Result<Vec<Customer>, DomainError> {
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        Ok(read(&self.customers)?
            .values()
            .skip(skip)
            .take(take)
            .cloned()
            .collect())
    }

    fn page_with_count(&self, request: PageRequest) -> Result<(Vec<Customer>, i64), DomainError> {
        let customers = read(&self.customers)?;
        let skip = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(request.page_size()).unwrap_or(usize::MAX);
        let items = customers.values().skip(skip).take(take).cloned().collect();
        let total =
            i64::try_from(customers.len()).map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok((items, total))
    }

    fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, DomainError> {
        Ok(read(&self.customers)?.get(customer_id).cloned())
    }

    fn add(&self, customer: NewCustomer) -> Result<(), DomainError> {
        let mut customers = write(&self.customers)?;
        if customers.contains_key(customer.customer_id()) {
            return Err(DomainError::DuplicateKey(format!(
                "customer '{}' already exists",
                customer.customer_id()
            )));
        }
        let customer = Customer::from(customer);
        customers.insert(customer.customer_id.clone(), customer);
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<BTreeMap<i32, Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let map = orders.into_iter().map(|o| (o.order_id, o)).collect();
        Self {
            orders: Arc::new(RwLock::new(map)),
        }
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn summaries_for_customer(&self, customer_id: &str) -> Result<Vec<OrderSummary>, DomainError> {
        let mut orders: Vec<Order> = read(&self.orders)?
            .values()
            .filter(|o| o.customer_id == customer_id)
            .cloned()
            .collect();
        orders.sort_by_key(|o| (o.order_date, o.order_id));
        Ok(orders.into_iter().map(OrderSummary::from).collect())
    }

    fn all(&self) -> Result<Vec<Order>, DomainError> {
        Ok(read(&self.orders)?.values().cloned().collect())
    }

    fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DomainError> {
        Ok(read(&self.orders)?.get(&order_id).cloned())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i32, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let map = products.into_iter().map(|p| (p.product_id, p)).collect();
        Self {
            products: Arc::new(RwLock::new(map)),
        }
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn all(&self) -> Result<Vec<Product>, DomainError> {
        Ok(read(&self.products)?.values().cloned().collect())
    }

    fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, DomainError> {
        Ok(read(&self.products)?.get(&product_id).cloned())
    }
}
