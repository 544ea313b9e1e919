use serde::{Deserialize, Serialize};

use super::product::Product;

/// Icono por defecto cuando la categoría no trae foto ni icono
pub const DEFAULT_CATEGORY_ICON: &str = "https://img.icons8.com/ios-glyphs/50/4a1f1a/meal.png";

/// Categoría de la carta con sus productos ya resueltos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Foto en data URI. Solo vive en el cliente, nunca se envía al gateway
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Icono remoto (`icono`) del contrato legacy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: None,
            icon: None,
            products: Vec::new(),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// URL a mostrar en la cabecera: foto local > icono remoto > icono por defecto
    pub fn display_image(&self) -> &str {
        self.image
            .as_deref()
            .or(self.icon.as_deref())
            .unwrap_or(DEFAULT_CATEGORY_ICON)
    }

    pub fn has_local_image(&self) -> bool {
        self.image.is_some()
    }
}
