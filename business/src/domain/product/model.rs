use bigdecimal::BigDecimal;
use serde_json::{Map, Value, json};

use super::category::Category;
use super::errors::DataValidationError;

/// A catalog product. `id` stays `None` until the record is persisted; the
/// store assigns it on insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, DataValidationError> {
        if props.name.trim().is_empty() {
            return Err(DataValidationError::new("field `name` must not be empty"));
        }

        Ok(Self {
            id: None,
            name: props.name,
            description: props.description,
            price: props.price,
            available: props.available,
            category: props.category,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i32,
        name: String,
        description: String,
        price: BigDecimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            available,
            category,
        }
    }

    /// Renders the transport mapping: category as its label, price as a
    /// decimal string so no precision is lost in transit.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": self.price.to_string(),
            "available": self.available,
            "category": self.category.to_string(),
        })
    }

    /// Populates the in-memory fields from a transport mapping. The `id` key
    /// is ignored; identifiers only ever come from the store. Every malformed
    /// input (wrong shape, missing key, bad type, unknown category) is
    /// normalized into a [`DataValidationError`]. Fields are left untouched
    /// when validation fails.
    pub fn deserialize(&mut self, data: &Value) -> Result<(), DataValidationError> {
        let fields = data
            .as_object()
            .ok_or_else(|| DataValidationError::new("payload must be a mapping of product fields"))?;

        let name = string_field(fields, "name")?;
        if name.trim().is_empty() {
            return Err(DataValidationError::new("field `name` must not be empty"));
        }
        let description = string_field(fields, "description")?;
        let price = price_field(fields)?;
        let available = required(fields, "available")?
            .as_bool()
            .ok_or_else(|| DataValidationError::new("field `available` must be a boolean"))?;
        let label = string_field(fields, "category")?;
        let category = label
            .parse::<Category>()
            .map_err(|_| DataValidationError::new(format!("unknown category `{label}`")))?;

        self.name = name;
        self.description = description;
        self.price = price;
        self.available = available;
        self.category = category;
        Ok(())
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

fn required<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, DataValidationError> {
    fields
        .get(key)
        .ok_or_else(|| DataValidationError::new(format!("missing required field `{key}`")))
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Result<String, DataValidationError> {
    required(fields, key)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| DataValidationError::new(format!("field `{key}` must be a string")))
}

fn price_field(fields: &Map<String, Value>) -> Result<BigDecimal, DataValidationError> {
    let raw = match required(fields, "price")? {
        Value::String(text) => text.trim().to_owned(),
        Value::Number(number) => number.to_string(),
        _ => {
            return Err(DataValidationError::new(
                "field `price` must be a string or a number",
            ));
        }
    };

    raw.parse::<BigDecimal>()
        .map_err(|_| DataValidationError::new(format!("field `price` is not a valid decimal: `{raw}`")))
}
