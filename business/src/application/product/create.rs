use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let mut product = Product::new(NewProductProps {
            name: params.name,
            description: params.description,
            price: params.price,
            available: params.available,
            category: params.category,
        })?;

        let id = self.repository.insert(&product).await?;
        product.id = Some(id);

        self.logger.info(&format!("Product created with id: {id}"));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::category::Category;
    use bigdecimal::BigDecimal;
    use mockall::mock;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<i32, RepositoryError>;
            async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
            async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
            async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_assign_store_generated_id() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|_| Ok(7));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Fedora".to_string(),
                description: "A red hat".to_string(),
                price: "12.50".parse().unwrap(),
                available: true,
                category: Category::Cloths,
            })
            .await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.id, Some(7));
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.category, Category::Cloths);
    }

    #[tokio::test]
    async fn should_reject_product_when_name_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "".to_string(),
                description: "A red hat".to_string(),
                price: "12.50".parse().unwrap(),
                available: true,
                category: Category::Cloths,
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::InvalidData(_)));
    }

    #[tokio::test]
    async fn should_propagate_constraint_violations() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(CreateProductParams {
                name: "Fedora".to_string(),
                description: String::new(),
                price: "12.50".parse().unwrap(),
                available: true,
                category: Category::Cloths,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::Duplicated)
        ));
    }
}
