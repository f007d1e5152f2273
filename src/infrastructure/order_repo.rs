use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderSummary};
use crate::domain::ports::OrderRepository;
use crate::schema::orders;

use super::models::{OrderDetailRow, OrderRow};

/// Attach each order's full set of line items with one extra query.
fn with_lines(conn: &mut PgConnection, rows: Vec<OrderRow>) -> QueryResult<Vec<Order>> {
    let lines = OrderDetailRow::belonging_to(&rows)
        .select(OrderDetailRow::as_select())
        .load(conn)?;
    let grouped = lines.grouped_by(&rows);
    Ok(rows
        .into_iter()
        .zip(grouped)
        .map(|(order, lines)| order.into_order(lines))
        .collect())
}

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn summaries_for_customer(&self, customer_id: &str) -> Result<Vec<OrderSummary>, DomainError> {
        let mut conn = self.pool.get()?;
        log::debug!("loading order summaries for customer {customer_id}");

        // Orders and their lines come from one snapshot so every total is
        // computed over a complete line set.
        let orders = conn
            .build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let rows = orders::table
                    .filter(orders::customer_id.eq(customer_id))
                    .order((orders::order_date.asc(), orders::order_id.asc()))
                    .select(OrderRow::as_select())
                    .load(conn)?;
                Ok(with_lines(conn, rows)?)
            })?;

        Ok(orders.into_iter().map(OrderSummary::from).collect())
    }

    fn all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let rows = orders::table
                    .order(orders::order_id.asc())
                    .select(OrderRow::as_select())
                    .load(conn)?;
                Ok(with_lines(conn, rows)?)
            })
    }

    fn find_by_id(&self, order_id: i32) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = orders::table
            .filter(orders::order_id.eq(order_id))
            .select(OrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        let lines = OrderDetailRow::belonging_to(&order)
            .select(OrderDetailRow::as_select())
            .load(&mut conn)?;

        Ok(Some(order.into_order(lines)))
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::{BigDecimal, Zero};
    use chrono::{TimeZone, Utc};
    use diesel::prelude::*;

    use super::DieselOrderRepository;
    use crate::domain::ports::OrderRepository;
    use crate::infrastructure::test_support::setup_db;
    use crate::schema::{customers, order_details, orders, products};

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn seed(pool: &crate::db::DbPool) {
        let mut conn = pool.get().expect("Failed to get connection");
        diesel::insert_into(customers::table)
            .values(&vec![
                (
                    customers::customer_id.eq("VINET"),
                    customers::company_name.eq("Vins et alcools Chevalier"),
                ),
                (
                    customers::customer_id.eq("TOMSP"),
                    customers::company_name.eq("Toms Spezialitäten"),
                ),
            ])
            .execute(&mut conn)
            .expect("seed customers");
        diesel::insert_into(products::table)
            .values(&vec![
                (products::product_id.eq(11), products::product_name.eq("Queso Cabrales")),
                (products::product_id.eq(42), products::product_name.eq("Singaporean Hokkien Fried Mee")),
            ])
            .execute(&mut conn)
            .expect("seed products");
        diesel::insert_into(orders::table)
            .values(&vec![
                (
                    orders::order_id.eq(10248),
                    orders::customer_id.eq("VINET"),
                    orders::order_date.eq(Utc.with_ymd_and_hms(1996, 7, 4, 0, 0, 0).unwrap()),
                ),
                (
                    orders::order_id.eq(10249),
                    orders::customer_id.eq("TOMSP"),
                    orders::order_date.eq(Utc.with_ymd_and_hms(1996, 7, 5, 0, 0, 0).unwrap()),
                ),
                (
                    orders::order_id.eq(10274),
                    orders::customer_id.eq("VINET"),
                    orders::order_date.eq(Utc.with_ymd_and_hms(1996, 8, 6, 0, 0, 0).unwrap()),
                ),
            ])
            .execute(&mut conn)
            .expect("seed orders");
        diesel::insert_into(order_details::table)
            .values(&vec![
                (
                    order_details::order_id.eq(10248),
                    order_details::product_id.eq(11),
                    order_details::unit_price.eq(dec("14.0000")),
                    order_details::quantity.eq(12i16),
                    order_details::discount.eq(dec("0.15")),
                ),
                (
                    order_details::order_id.eq(10248),
                    order_details::product_id.eq(42),
                    order_details::unit_price.eq(dec("9.8000")),
                    order_details::quantity.eq(10i16),
                    order_details::discount.eq(dec("0")),
                ),
            ])
            .execute(&mut conn)
            .expect("seed order details");
    }

    #[tokio::test]
    async fn summaries_aggregate_line_items_per_order() {
        let (_container, pool) = setup_db().await;
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);

        let summaries = repo
            .summaries_for_customer("VINET")
            .expect("summaries failed");

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].order_id, 10248);
        assert_eq!(summaries[0].total_amount, dec("240.8"));
        assert_eq!(summaries[1].order_id, 10274);
        assert_eq!(summaries[1].total_amount, BigDecimal::zero());
    }

    #[tokio::test]
    async fn find_by_id_loads_lines_and_misses_cleanly() {
        let (_container, pool) = setup_db().await;
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);

        let order = repo
            .find_by_id(10248)
            .expect("find failed")
            .expect("order should exist");
        assert_eq!(order.customer_id, "VINET");
        assert_eq!(order.lines.len(), 2);

        assert!(repo.find_by_id(1).expect("find failed").is_none());
    }

    #[tokio::test]
    async fn all_returns_every_order_with_lines() {
        let (_container, pool) = setup_db().await;
        seed(&pool);
        let repo = DieselOrderRepository::new(pool);

        let all = repo.all().expect("all failed");
        let ids: Vec<i32> = all.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, [10248, 10249, 10274]);
        assert_eq!(all[0].lines.len(), 2);
        assert!(all[1].lines.is_empty());
    }
}
