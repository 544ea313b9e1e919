use std::collections::HashMap;

use crate::models::Category;

/// Fotos locales por id de categoría. Es lo único que sobrevive a una
/// recarga; vive solo en memoria y se pierde al cerrar la app.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageCache {
    images: HashMap<i64, String>,
}

impl ImageCache {
    pub fn get(&self, category_id: i64) -> Option<&str> {
        self.images.get(&category_id).map(String::as_str)
    }

    pub fn set(&mut self, category_id: i64, data_uri: impl Into<String>) {
        self.images.insert(category_id, data_uri.into());
    }

    pub fn remove(&mut self, category_id: i64) -> Option<String> {
        self.images.remove(&category_id)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// La caché manda: cada categoría queda con su foto cacheada o sin foto
    pub fn apply_to(&self, categories: &mut [Category]) {
        for category in categories.iter_mut() {
            category.image = self.images.get(&category.id).cloned();
        }
    }
}
