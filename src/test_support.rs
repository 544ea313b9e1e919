//! Dobles de prueba: gateway en memoria que registra las llamadas y un
//! `Prompt` con respuestas programadas.

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

use crate::models::{Category, Product};
use crate::services::{GatewayError, MenuGateway};
use crate::utils::Prompt;

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    ListCategories,
    ListProducts(i64),
    CreateCategory(String),
    RenameCategory(i64, String),
    DeleteCategory(i64),
    CreateProduct(i64, String, f64),
    UpdateProduct(i64, String, f64),
    DeleteProduct(i64),
}

#[derive(Default)]
pub struct FakeGateway {
    categories: Vec<Category>,
    products: HashMap<i64, Vec<Product>>,
    failing_products: HashSet<i64>,
    fail_categories: bool,
    fail_mutations: bool,
    calls: RefCell<Vec<GatewayCall>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    pub fn with_products(mut self, category_id: i64, products: Vec<Product>) -> Self {
        self.products.insert(category_id, products);
        self
    }

    pub fn failing_products_for(mut self, category_id: i64) -> Self {
        self.failing_products.insert(category_id);
        self
    }

    pub fn failing_categories(mut self) -> Self {
        self.fail_categories = true;
        self
    }

    pub fn failing_mutations(mut self) -> Self {
        self.fail_mutations = true;
        self
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    /// Llamadas que modifican datos (todo menos los listados)
    pub fn mutations(&self) -> Vec<GatewayCall> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, GatewayCall::ListCategories | GatewayCall::ListProducts(_)))
            .collect()
    }

    fn record(&self, call: GatewayCall) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self, call: GatewayCall) -> Result<(), GatewayError> {
        self.record(call);
        if self.fail_mutations {
            return Err(GatewayError::Http {
                status: 500,
                message: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl MenuGateway for FakeGateway {
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        self.record(GatewayCall::ListCategories);
        if self.fail_categories {
            return Err(GatewayError::Network("connection refused".to_string()));
        }
        Ok(self.categories.clone())
    }

    async fn list_products(&self, category_id: i64) -> Result<Vec<Product>, GatewayError> {
        self.record(GatewayCall::ListProducts(category_id));
        if self.failing_products.contains(&category_id) {
            return Err(GatewayError::Network("connection reset".to_string()));
        }
        Ok(self.products.get(&category_id).cloned().unwrap_or_default())
    }

    async fn create_category(&self, name: &str) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::CreateCategory(name.to_string()))
    }

    async fn rename_category(&self, category_id: i64, name: &str) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::RenameCategory(category_id, name.to_string()))
    }

    async fn delete_category(&self, category_id: i64) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::DeleteCategory(category_id))
    }

    async fn create_product(&self, category_id: i64, name: &str, price: f64) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::CreateProduct(category_id, name.to_string(), price))
    }

    async fn update_product(&self, product_id: i64, name: &str, price: f64) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::UpdateProduct(product_id, name.to_string(), price))
    }

    async fn delete_product(&self, product_id: i64) -> Result<(), GatewayError> {
        self.mutation(GatewayCall::DeleteProduct(product_id))
    }
}

/// `Prompt` que contesta siempre lo mismo a las confirmaciones
pub struct ScriptedPrompt {
    answer: bool,
    alerts: RefCell<Vec<(String, String)>>,
    confirmations: Cell<usize>,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self {
            answer: true,
            alerts: RefCell::new(Vec::new()),
            confirmations: Cell::new(0),
        }
    }

    pub fn declining() -> Self {
        Self {
            answer: false,
            ..Self::accepting()
        }
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.alerts.borrow().clone()
    }

    pub fn confirmations(&self) -> usize {
        self.confirmations.get()
    }
}

impl Prompt for ScriptedPrompt {
    fn alert(&self, title: &str, message: &str) {
        self.alerts
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }

    fn confirm(&self, _title: &str, _message: &str) -> bool {
        self.confirmations.set(self.confirmations.get() + 1);
        self.answer
    }
}
