use async_trait::async_trait;

use crate::domain::product::category::Category;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FindProductsByCategoryParams {
    pub category: Category,
}

#[async_trait]
pub trait FindProductsByCategoryUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FindProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError>;
}
