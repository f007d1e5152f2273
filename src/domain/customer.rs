use super::errors::DomainError;

pub const CUSTOMER_ID_MAX_LEN: usize = 5;
pub const COMPANY_NAME_MAX_LEN: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub customer_id: String,
    pub company_name: String,
}

/// A customer that passed field validation and may be inserted.
///
/// Construction trims surrounding whitespace and enforces the column limits
/// of the `customers` table, so the store only ever sees well-formed rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    customer_id: String,
    company_name: String,
}

impl NewCustomer {
    pub fn new(customer_id: &str, company_name: &str) -> Result<Self, DomainError> {
        let customer_id = required("customer_id", customer_id, CUSTOMER_ID_MAX_LEN)?;
        let company_name = required("company_name", company_name, COMPANY_NAME_MAX_LEN)?;
        Ok(Self {
            customer_id,
            company_name,
        })
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }
}

impl From<NewCustomer> for Customer {
    fn from(c: NewCustomer) -> Self {
        Customer {
            customer_id: c.customer_id,
            company_name: c.company_name,
        }
    }
}

fn required(field: &str, value: &str, max_len: usize) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(value.to_string())
}
