#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
}
