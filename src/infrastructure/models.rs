use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::order::{Order, OrderLineItem};
use crate::domain::product::Product;
use crate::schema::{customers, order_details, orders, products};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customers)]
#[diesel(primary_key(customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub customer_id: String,
    pub company_name: String,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            customer_id: row.customer_id,
            company_name: row.company_name,
        }
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = customers)]
pub struct NewCustomerRow<'a> {
    pub customer_id: &'a str,
    pub company_name: &'a str,
}

impl<'a> From<&'a NewCustomer> for NewCustomerRow<'a> {
    fn from(c: &'a NewCustomer) -> Self {
        NewCustomerRow {
            customer_id: c.customer_id(),
            company_name: c.company_name(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = orders)]
#[diesel(primary_key(order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub order_id: i32,
    pub customer_id: String,
    pub order_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = order_details)]
#[diesel(primary_key(order_id, product_id))]
#[diesel(belongs_to(OrderRow, foreign_key = order_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderDetailRow {
    pub order_id: i32,
    pub product_id: i32,
    pub unit_price: BigDecimal,
    pub quantity: i16,
    pub discount: BigDecimal,
}

impl From<OrderDetailRow> for OrderLineItem {
    fn from(row: OrderDetailRow) -> Self {
        OrderLineItem {
            order_id: row.order_id,
            product_id: row.product_id,
            unit_price: row.unit_price,
            quantity: row.quantity,
            discount: row.discount,
        }
    }
}

impl OrderRow {
    pub fn into_order(self, lines: Vec<OrderDetailRow>) -> Order {
        Order {
            order_id: self.order_id,
            customer_id: self.customer_id,
            order_date: self.order_date,
            lines: lines.into_iter().map(OrderLineItem::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(primary_key(product_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub product_id: i32,
    pub product_name: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.product_id,
            product_name: row.product_name,
        }
    }
}
