use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;

use super::category::Category;
use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    /// Inserts a new record and returns the store-assigned identifier.
    async fn insert(&self, product: &Product) -> Result<i32, RepositoryError>;
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
}
