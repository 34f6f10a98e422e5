use serde::{Deserialize, Serialize};

/// Producto del inventario (precio en COP)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub code: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub stock: i64,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

/// Cuerpo de `POST /products`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: Option<i64>,
    pub code: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

impl NewProduct {
    pub fn new(code: &str, name: &str, description: &str, price: f64, stock: i64) -> Self {
        Self {
            id: None,
            code: code.trim().to_string(),
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price,
            stock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_tolerates_missing_optional_fields() {
        let product: Product = serde_json::from_value(json!({
            "id": 3,
            "code": "P-003",
            "price": 12500.5,
            "stock": 0
        }))
        .unwrap();
        assert_eq!(product.display_name(), "");
        assert!(product.description.is_none());
    }
}
