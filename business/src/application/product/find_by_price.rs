use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{DataValidationError, ProductError};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_by_price::{
    FindProductsByPriceParams, FindProductsByPriceUseCase,
};

pub struct FindProductsByPriceUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindProductsByPriceUseCase for FindProductsByPriceUseCaseImpl {
    async fn execute(
        &self,
        params: FindProductsByPriceParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Finding products by price: {}", params.price));

        // Query-string values arrive quoted often enough to tolerate it here.
        let raw = params.price.trim().trim_matches('"').trim();
        let price = raw.parse::<BigDecimal>().map_err(|_| {
            DataValidationError::new(format!("invalid price `{}`", params.price))
        })?;

        let products = self.repository.find_by_price(&price).await?;
        Ok(products)
    }
}
