// ============================================================================
// MENU VIEWMODEL - CARGA + MUTACIONES DE LA CARTA
// ============================================================================
// Lógica de negocio de la carta - SIN yewdux
// Devuelve valores, los hooks actualizan el estado.
// Cada fallo se registra en el log y termina en UNA alerta localizada.
// ============================================================================

use crate::config::AppConfig;
use crate::models::{parse_price, Category};
use crate::services::{load_menu, ApiClient, GatewayError, MenuGateway};
use crate::stores::{ImageCache, MenuAction};
use crate::utils::{t, BrowserPrompt, Prompt};

/// Qué debe hacer el hook tras una mutación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// Cambio aplicado: recargar la carta completa
    Reload,
    /// Validación local fallida: no se hizo ninguna petición
    Skipped,
    /// El usuario canceló la confirmación
    Cancelled,
}

/// Cambio de foto pedido al editar una categoría
#[derive(Debug, Clone, PartialEq)]
pub enum ImageChange {
    Keep,
    Set(String),
    Remove,
}

/// Acciones optimistas (síncronas) de una edición de categoría: la foto
/// va solo a la caché local, el nombre se refleja antes de llamar al gateway.
pub fn local_category_update(current: &Category, name: &str, image: &ImageChange) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    match image {
        ImageChange::Keep => {}
        ImageChange::Set(data_uri) if data_uri.is_empty() => {
            actions.push(MenuAction::RemoveImage { category_id: current.id })
        }
        ImageChange::Set(data_uri) => actions.push(MenuAction::SetImage {
            category_id: current.id,
            data_uri: data_uri.clone(),
        }),
        ImageChange::Remove => actions.push(MenuAction::RemoveImage { category_id: current.id }),
    }
    let trimmed = name.trim();
    if !trimmed.is_empty() && trimmed != current.name {
        actions.push(MenuAction::RenameCategory {
            category_id: current.id,
            name: trimmed.to_string(),
        });
    }
    actions
}

/// ViewModel de la carta - SOLO lógica de negocio
pub struct MenuViewModel<G = ApiClient, P = BrowserPrompt> {
    gateway: G,
    prompt: P,
    language: String,
}

impl MenuViewModel {
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ApiClient::from_config(config), BrowserPrompt, config.language.clone())
    }
}

impl<G: MenuGateway, P: Prompt> MenuViewModel<G, P> {
    pub fn new(gateway: G, prompt: P, language: impl Into<String>) -> Self {
        Self {
            gateway,
            prompt,
            language: language.into(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    fn text(&self, key: &str) -> String {
        t(key, &self.language)
    }

    fn report(&self, message_key: &str, error: &GatewayError) {
        log::error!("❌ {}: {}", message_key, error);
        self.prompt.alert(&self.text("error"), &self.text(message_key));
    }

    fn mutation_result(&self, result: Result<(), GatewayError>, message_key: &str) -> Result<MutationOutcome, GatewayError> {
        match result {
            Ok(()) => Ok(MutationOutcome::Reload),
            Err(e) => {
                self.report(message_key, &e);
                Err(e)
            }
        }
    }

    /// Carga completa. Si falla se alerta y el llamador conserva lo anterior.
    pub async fn reload(&self, images: &ImageCache) -> Result<Vec<Category>, GatewayError> {
        log::info!("🔄 Recargando carta...");
        load_menu(&self.gateway, images).await.map_err(|e| {
            self.report("error_cargar_menu", &e);
            e
        })
    }

    pub async fn create_category(&self, name: &str) -> Result<MutationOutcome, GatewayError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(MutationOutcome::Skipped);
        }
        let result = self.gateway.create_category(name).await;
        self.mutation_result(result, "error_crear_categoria")
    }

    /// Parte remota de la edición: solo renombra si el nombre cambió.
    /// La foto nunca se envía al gateway.
    pub async fn update_category(
        &self,
        current: &Category,
        name: &str,
        image: &ImageChange,
    ) -> Result<MutationOutcome, GatewayError> {
        let trimmed = name.trim();
        let renamed = !trimmed.is_empty() && trimmed != current.name;

        if renamed {
            let result = self.gateway.rename_category(current.id, trimmed).await;
            return self.mutation_result(result, "error_actualizar_categoria");
        }
        if *image != ImageChange::Keep {
            return Ok(MutationOutcome::Reload);
        }
        Ok(MutationOutcome::Skipped)
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<MutationOutcome, GatewayError> {
        if !self
            .prompt
            .confirm(&self.text("confirmar"), &self.text("confirmar_eliminar_categoria"))
        {
            log::info!("↩️ Eliminación de categoría {} cancelada", category_id);
            return Ok(MutationOutcome::Cancelled);
        }
        let result = self.gateway.delete_category(category_id).await;
        self.mutation_result(result, "error_eliminar_categoria")
    }

    /// Borrar la foto es local, pero también pide confirmación
    pub fn confirm_image_removal(&self, category_id: i64) -> Option<MenuAction> {
        self.prompt
            .confirm(&self.text("confirmar"), &self.text("confirmar_eliminar_imagen"))
            .then_some(MenuAction::RemoveImage { category_id })
    }

    /// Valida nombre y precio del formulario. `None` = no se debe llamar al gateway.
    fn validate_product(&self, name: &str, price_text: &str) -> Option<(String, f64)> {
        let name = name.trim();
        if name.is_empty() || price_text.trim().is_empty() {
            return None;
        }
        match parse_price(price_text) {
            Some(price) => Some((name.to_string(), price)),
            None => {
                log::warn!("⚠️ Precio inválido: {:?}", price_text);
                self.prompt.alert(&self.text("error"), &self.text("precio_invalido"));
                None
            }
        }
    }

    pub async fn create_product(
        &self,
        category_id: i64,
        name: &str,
        price_text: &str,
    ) -> Result<MutationOutcome, GatewayError> {
        let Some((name, price)) = self.validate_product(name, price_text) else {
            return Ok(MutationOutcome::Skipped);
        };
        let result = self.gateway.create_product(category_id, &name, price).await;
        self.mutation_result(result, "error_crear_producto")
    }

    pub async fn update_product(
        &self,
        product_id: i64,
        name: &str,
        price_text: &str,
    ) -> Result<MutationOutcome, GatewayError> {
        let Some((name, price)) = self.validate_product(name, price_text) else {
            return Ok(MutationOutcome::Skipped);
        };
        let result = self.gateway.update_product(product_id, &name, price).await;
        self.mutation_result(result, "error_actualizar_producto")
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<MutationOutcome, GatewayError> {
        let result = self.gateway.delete_product(product_id).await;
        self.mutation_result(result, "error_eliminar_producto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::test_support::{FakeGateway, GatewayCall, ScriptedPrompt};
    use futures::executor::block_on;
    use rstest::rstest;

    fn vm(gateway: FakeGateway, prompt: ScriptedPrompt) -> MenuViewModel<FakeGateway, ScriptedPrompt> {
        MenuViewModel::new(gateway, prompt, "ES")
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn blank_category_name_sends_nothing(#[case] name: &str) {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.create_category(name)).unwrap();

        assert_eq!(outcome, MutationOutcome::Skipped);
        assert!(vm.gateway().calls().is_empty());
    }

    #[test]
    fn category_name_is_trimmed() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.create_category("  Bebidas ")).unwrap();

        assert_eq!(outcome, MutationOutcome::Reload);
        assert_eq!(vm.gateway().calls(), vec![GatewayCall::CreateCategory("Bebidas".to_string())]);
    }

    #[rstest]
    #[case("", "1.50")]
    #[case("Café", "")]
    #[case("  ", "2")]
    #[case("Café", "   ")]
    fn incomplete_product_sends_nothing(#[case] name: &str, #[case] price: &str) {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.create_product(1, name, price)).unwrap();

        assert_eq!(outcome, MutationOutcome::Skipped);
        assert!(vm.gateway().calls().is_empty());
        assert!(vm.prompt().alerts().is_empty());
    }

    #[test]
    fn non_numeric_price_alerts_without_request() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.create_product(1, "Café", "uno")).unwrap();

        assert_eq!(outcome, MutationOutcome::Skipped);
        assert!(vm.gateway().calls().is_empty());
        assert_eq!(
            vm.prompt().alerts(),
            vec![("Error".to_string(), "El precio debe ser un número".to_string())]
        );
    }

    #[test]
    fn product_creation_parses_price() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.create_product(3, " Café ", "1,50")).unwrap();

        assert_eq!(outcome, MutationOutcome::Reload);
        assert_eq!(
            vm.gateway().calls(),
            vec![GatewayCall::CreateProduct(3, "Café".to_string(), 1.5)]
        );
    }

    #[test]
    fn declined_category_delete_sends_nothing() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::declining());

        let outcome = block_on(vm.delete_category(1)).unwrap();

        assert_eq!(outcome, MutationOutcome::Cancelled);
        assert_eq!(vm.prompt().confirmations(), 1);
        assert!(vm.gateway().calls().is_empty());
    }

    #[test]
    fn confirmed_category_delete_reloads() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());

        let outcome = block_on(vm.delete_category(4)).unwrap();

        assert_eq!(outcome, MutationOutcome::Reload);
        assert_eq!(vm.gateway().calls(), vec![GatewayCall::DeleteCategory(4)]);
    }

    #[test]
    fn image_removal_needs_confirmation() {
        let declined = vm(FakeGateway::new(), ScriptedPrompt::declining());
        assert_eq!(declined.confirm_image_removal(1), None);

        let accepted = vm(FakeGateway::new(), ScriptedPrompt::accepting());
        assert_eq!(
            accepted.confirm_image_removal(1),
            Some(MenuAction::RemoveImage { category_id: 1 })
        );
        assert!(accepted.gateway().calls().is_empty());
    }

    #[test]
    fn product_delete_has_no_confirmation() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::declining());

        let outcome = block_on(vm.delete_product(10)).unwrap();

        assert_eq!(outcome, MutationOutcome::Reload);
        assert_eq!(vm.prompt().confirmations(), 0);
        assert_eq!(vm.gateway().calls(), vec![GatewayCall::DeleteProduct(10)]);
    }

    #[test]
    fn image_only_update_never_reaches_gateway() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());
        let current = Category::new(1, "Bebidas");
        let image = ImageChange::Set("data:image/jpeg;base64,X".to_string());

        let actions = local_category_update(&current, "Bebidas", &image);
        let outcome = block_on(vm.update_category(&current, "Bebidas", &image)).unwrap();

        assert_eq!(
            actions,
            vec![MenuAction::SetImage {
                category_id: 1,
                data_uri: "data:image/jpeg;base64,X".to_string()
            }]
        );
        assert_eq!(outcome, MutationOutcome::Reload);
        assert!(vm.gateway().calls().is_empty());
    }

    #[test]
    fn rename_calls_gateway_once() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());
        let current = Category::new(1, "Bebidas");

        let actions =
            local_category_update(&current, " Refrescos ", &ImageChange::Keep);
        let outcome = block_on(vm.update_category(&current, " Refrescos ", &ImageChange::Keep)).unwrap();

        assert_eq!(
            actions,
            vec![MenuAction::RenameCategory {
                category_id: 1,
                name: "Refrescos".to_string()
            }]
        );
        assert_eq!(outcome, MutationOutcome::Reload);
        assert_eq!(
            vm.gateway().calls(),
            vec![GatewayCall::RenameCategory(1, "Refrescos".to_string())]
        );
    }

    #[test]
    fn unchanged_edit_is_a_no_op() {
        let vm = vm(FakeGateway::new(), ScriptedPrompt::accepting());
        let current = Category::new(1, "Bebidas");

        let outcome = block_on(vm.update_category(&current, "Bebidas", &ImageChange::Keep)).unwrap();

        assert_eq!(outcome, MutationOutcome::Skipped);
        assert!(vm.gateway().calls().is_empty());
    }

    #[test]
    fn empty_image_string_removes_photo() {
        let current = Category::new(2, "Postres");
        let actions = local_category_update(
            &current,
            "Postres",
            &ImageChange::Set(String::new()),
        );
        assert_eq!(actions, vec![MenuAction::RemoveImage { category_id: 2 }]);
    }

    #[test]
    fn failed_mutation_alerts_once() {
        let vm = vm(FakeGateway::new().failing_mutations(), ScriptedPrompt::accepting());

        let result = block_on(vm.update_product(10, "Café", "1.80"));

        assert!(matches!(result, Err(GatewayError::Http { status: 500, .. })));
        assert_eq!(
            vm.prompt().alerts(),
            vec![("Error".to_string(), "No se pudo actualizar el producto".to_string())]
        );
    }

    #[test]
    fn failed_reload_alerts_and_returns_error() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(1, "Bebidas"))
            .failing_products_for(1);
        let vm = vm(gateway, ScriptedPrompt::accepting());

        let result = block_on(vm.reload(&ImageCache::default()));

        assert!(result.is_err());
        assert_eq!(
            vm.prompt().alerts(),
            vec![("Error".to_string(), "No se pudo cargar el menú".to_string())]
        );
    }

    #[test]
    fn reload_returns_merged_menu() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(1, "Bebidas"))
            .with_products(1, vec![Product::new(10, "Café", 1.5)]);
        let vm = vm(gateway, ScriptedPrompt::accepting());
        let mut images = ImageCache::default();
        images.set(1, "X");

        let menu = block_on(vm.reload(&images)).unwrap();

        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].products, vec![Product::new(10, "Café", 1.5)]);
        assert_eq!(menu[0].image.as_deref(), Some("X"));
        assert!(vm.gateway().mutations().is_empty());
    }
}
