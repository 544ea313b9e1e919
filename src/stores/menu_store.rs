// ============================================================================
// MENU STORE - ESTADO DE LA CARTA + REDUCER
// ============================================================================
// Cada carga lleva un número de generación. El reducer solo aplica el
// resultado cuya generación supera la última ya resuelta: una carga lenta
// y antigua nunca pisa a una más nueva.
// ============================================================================

use std::rc::Rc;
use yew::Reducible;

use crate::models::Category;
use super::image_cache::ImageCache;

/// Contador monotónico de cargas
#[derive(Clone, Debug, Default)]
pub struct LoadGeneration {
    last_issued: u64,
}

impl LoadGeneration {
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct MenuStore {
    pub categories: Vec<Category>,
    pub images: ImageCache,
    pub loading: bool,
    pub error: Option<String>,
    /// Generación más alta pedida
    pub requested_generation: u64,
    /// Generación más alta resuelta (con éxito o con error)
    pub settled_generation: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    LoadStarted { generation: u64 },
    Loaded { generation: u64, categories: Vec<Category> },
    LoadFailed { generation: u64, message: String },
    SetImage { category_id: i64, data_uri: String },
    RemoveImage { category_id: i64 },
    RenameCategory { category_id: i64, name: String },
}

impl MenuStore {
    fn is_stale(&self, generation: u64) -> bool {
        generation <= self.settled_generation
    }

    fn settle(&mut self, generation: u64) {
        self.settled_generation = generation;
        self.loading = self.requested_generation > generation;
    }

    pub fn category(&self, category_id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    fn category_mut(&mut self, category_id: i64) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }
}

impl Reducible for MenuStore {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MenuAction::LoadStarted { generation } => {
                let mut next = (*self).clone();
                next.requested_generation = next.requested_generation.max(generation);
                next.loading = true;
                Rc::new(next)
            }
            MenuAction::Loaded { generation, mut categories } => {
                if self.is_stale(generation) {
                    log::warn!("⏭️ Carga {} descartada (ya aplicada {})", generation, self.settled_generation);
                    return self;
                }
                let mut next = (*self).clone();
                // Fotos puestas mientras la carga estaba en vuelo
                next.images.apply_to(&mut categories);
                next.categories = categories;
                next.error = None;
                next.settle(generation);
                Rc::new(next)
            }
            MenuAction::LoadFailed { generation, message } => {
                if self.is_stale(generation) {
                    return self;
                }
                let mut next = (*self).clone();
                next.error = Some(message);
                next.settle(generation);
                Rc::new(next)
            }
            MenuAction::SetImage { category_id, data_uri } => {
                let mut next = (*self).clone();
                if let Some(category) = next.category_mut(category_id) {
                    category.image = Some(data_uri.clone());
                }
                next.images.set(category_id, data_uri);
                Rc::new(next)
            }
            MenuAction::RemoveImage { category_id } => {
                let mut next = (*self).clone();
                next.images.remove(category_id);
                if let Some(category) = next.category_mut(category_id) {
                    category.image = None;
                }
                Rc::new(next)
            }
            MenuAction::RenameCategory { category_id, name } => {
                let mut next = (*self).clone();
                if let Some(category) = next.category_mut(category_id) {
                    category.name = name.trim().to_string();
                }
                Rc::new(next)
            }
        }
    }
}
