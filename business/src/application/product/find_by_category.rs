use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_by_category::{
    FindProductsByCategoryParams, FindProductsByCategoryUseCase,
};

pub struct FindProductsByCategoryUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindProductsByCategoryUseCase for FindProductsByCategoryUseCaseImpl {
    async fn execute(
        &self,
        params: FindProductsByCategoryParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Finding products by category: {}", params.category));
        let products = self.repository.find_by_category(params.category).await?;
        Ok(products)
    }
}
