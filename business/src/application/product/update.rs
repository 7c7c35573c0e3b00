use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::{DataValidationError, ProductError};
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        let id = params.id.ok_or_else(|| {
            DataValidationError::new("update called with an empty id field; create the product first")
        })?;

        self.logger.info(&format!("Updating product: {id}"));

        if params.name.trim().is_empty() {
            return Err(DataValidationError::new("field `name` must not be empty").into());
        }

        // Updates never insert; the record has to be there already.
        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound);
        }

        let updated = Product::from_repository(
            id,
            params.name,
            params.description,
            params.price,
            params.available,
            params.category,
        );
        self.repository.update(&updated).await?;

        self.logger.info(&format!("Product updated: {id}"));
        Ok(updated)
    }
}
