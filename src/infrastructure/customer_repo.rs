use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::pagination::PageRequest;
use crate::domain::ports::CustomerRepository;
use crate::schema::customers;

use super::models::{CustomerRow, NewCustomerRow};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn count(&self) -> Result<i64, DomainError> {
        let mut conn = self.pool.get()?;
        let total: i64 = customers::table.count().get_result(&mut conn)?;
        Ok(total)
    }

    fn page(&self, request: PageRequest) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;
        log::debug!(
            "loading customers page {} (size {})",
            request.page_number(),
            request.page_size()
        );

        let rows = customers::table
            .select(CustomerRow::as_select())
            .order(customers::customer_id.asc())
            .limit(request.page_size())
            .offset(request.offset())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn page_with_count(&self, request: PageRequest) -> Result<(Vec<Customer>, i64), DomainError> {
        let mut conn = self.pool.get()?;

        // Slice and count share a snapshot so the navigation flags agree with
        // the rows returned.
        let (rows, total) = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let rows = customers::table
                    .select(CustomerRow::as_select())
                    .order(customers::customer_id.asc())
                    .limit(request.page_size())
                    .offset(request.offset())
                    .load(conn)?;
                let total: i64 = customers::table.count().get_result(conn)?;
                Ok((rows, total))
            })?;

        Ok((rows.into_iter().map(Customer::from).collect(), total))
    }

    fn find_by_id(&self, customer_id: &str) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customers::table
            .filter(customers::customer_id.eq(customer_id))
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn add(&self, customer: NewCustomer) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::insert_into(customers::table)
            .values(NewCustomerRow::from(&customer))
            .execute(&mut conn)
            .map_err(|e| match DomainError::from(e) {
                DomainError::DuplicateKey(_) => DomainError::DuplicateKey(format!(
                    "customer '{}' already exists",
                    customer.customer_id()
                )),
                other => other,
            })?;

        log::info!("created customer {}", customer.customer_id());
        Ok(())
    }
}
