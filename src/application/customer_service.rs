use std::sync::Arc;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::order::OrderSummary;
use crate::domain::pagination::{CustomerPage, Page, PageRequest};
use crate::domain::ports::{CustomerRepository, OrderRepository};

#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub customer: Customer,
    pub orders: Vec<OrderSummary>,
}

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
    orders: Arc<dyn OrderRepository>,
    max_page_size: i64,
}

impl CustomerService {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
        max_page_size: i64,
    ) -> Self {
        Self {
            customers,
            orders,
            max_page_size,
        }
    }

    /// Validates the request before any store call, then combines the page
    /// slice with the whole-table count.
    pub fn list_customers(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<CustomerPage, DomainError> {
        let request = PageRequest::new(page_number, page_size, self.max_page_size)?;
        let (items, total_count) = self.customers.page_with_count(request)?;
        Ok(Page::new(items, request, total_count))
    }

    pub fn count_customers(&self) -> Result<i64, DomainError> {
        self.customers.count()
    }

    pub fn get_customer_details(
        &self,
        customer_id: &str,
    ) -> Result<Option<CustomerDetails>, DomainError> {
        let Some(customer) = self.customers.find_by_id(customer_id)? else {
            return Ok(None);
        };
        let orders = self.orders.summaries_for_customer(&customer.customer_id)?;
        Ok(Some(CustomerDetails { customer, orders }))
    }

    pub fn create_customer(
        &self,
        customer_id: &str,
        company_name: &str,
    ) -> Result<Customer, DomainError> {
        let customer = NewCustomer::new(customer_id, company_name)?;
        self.customers.add(customer.clone())?;
        Ok(customer.into())
    }
}
