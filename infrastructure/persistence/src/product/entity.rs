use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::category::Category;
use business::domain::product::model::Product;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: String,
}

impl ProductEntity {
    /// Rows are trusted: a label the enum no longer knows (e.g. after a
    /// category was retired) falls back to `Unknown` instead of failing the
    /// whole read.
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.available,
            self.category
                .parse::<Category>()
                .unwrap_or(Category::Unknown),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: &str) -> ProductEntity {
        ProductEntity {
            id: 1,
            name: "Fedora".to_string(),
            description: "A red hat".to_string(),
            price: "12.50".parse().unwrap(),
            available: true,
            category: category.to_string(),
        }
    }

    #[test]
    fn maps_row_fields_into_the_domain_model() {
        let product = entity("CLOTHS").into_domain();
        assert_eq!(product.id, Some(1));
        assert_eq!(product.name, "Fedora");
        assert_eq!(product.price, "12.50".parse::<BigDecimal>().unwrap());
        assert_eq!(product.category, Category::Cloths);
    }

    #[test]
    fn retired_category_labels_fall_back_to_unknown() {
        let product = entity("GADGETS").into_domain();
        assert_eq!(product.category, Category::Unknown);
    }
}
