use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FindProductsByPriceParams {
    /// Raw text, as it arrives from a query string. The use case coerces it
    /// to the stored decimal representation before comparing.
    pub price: String,
}

#[async_trait]
pub trait FindProductsByPriceUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FindProductsByPriceParams,
    ) -> Result<Vec<Product>, ProductError>;
}
