use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_by_name::{
    FindProductsByNameParams, FindProductsByNameUseCase,
};

pub struct FindProductsByNameUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindProductsByNameUseCase for FindProductsByNameUseCaseImpl {
    async fn execute(
        &self,
        params: FindProductsByNameParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger
            .info(&format!("Finding products by name: {}", params.name));
        let products = self.repository.find_by_name(&params.name).await?;
        Ok(products)
    }
}
