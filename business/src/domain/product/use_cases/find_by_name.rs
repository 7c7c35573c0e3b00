use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FindProductsByNameParams {
    pub name: String,
}

#[async_trait]
pub trait FindProductsByNameUseCase: Send + Sync {
    async fn execute(&self, params: FindProductsByNameParams)
    -> Result<Vec<Product>, ProductError>;
}
