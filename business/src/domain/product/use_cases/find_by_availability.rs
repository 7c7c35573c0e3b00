use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FindProductsByAvailabilityParams {
    pub available: bool,
}

#[async_trait]
pub trait FindProductsByAvailabilityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FindProductsByAvailabilityParams,
    ) -> Result<Vec<Product>, ProductError>;
}
