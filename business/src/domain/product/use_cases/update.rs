use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::category::Category;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct UpdateProductParams {
    /// Must be `Some`; updating a product that was never persisted is a
    /// data-validation error.
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
