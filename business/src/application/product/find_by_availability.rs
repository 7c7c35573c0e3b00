use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_by_availability::{
    FindProductsByAvailabilityParams, FindProductsByAvailabilityUseCase,
};

pub struct FindProductsByAvailabilityUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindProductsByAvailabilityUseCase for FindProductsByAvailabilityUseCaseImpl {
    async fn execute(
        &self,
        params: FindProductsByAvailabilityParams,
    ) -> Result<Vec<Product>, ProductError> {
        self.logger.info(&format!(
            "Finding products by availability: {}",
            params.available
        ));
        let products = self.repository.find_by_availability(params.available).await?;
        Ok(products)
    }
}
