// ============================================================================
// MENU LOADER - CATEGORÍAS → PRODUCTOS (EN PARALELO) → VIEW MODEL
// ============================================================================
// Todo o nada: si falla cualquier petición la carga entera falla y el
// llamador conserva el view model anterior.
// ============================================================================

use futures::future::try_join_all;

use crate::models::Category;
use crate::stores::ImageCache;
use super::error::GatewayError;
use super::gateway::MenuGateway;

/// Carga la carta completa y mezcla las fotos locales
pub async fn load_menu<G>(gateway: &G, images: &ImageCache) -> Result<Vec<Category>, GatewayError>
where
    G: MenuGateway + ?Sized,
{
    let categories = gateway.list_categories().await?;
    if categories.is_empty() {
        log::info!("📂 Sin categorías: carta vacía");
        return Ok(Vec::new());
    }

    let product_lists =
        try_join_all(categories.iter().map(|category| gateway.list_products(category.id))).await?;

    // Emparejado por posición: `try_join_all` respeta el orden de entrada
    let mut menu: Vec<Category> = categories
        .into_iter()
        .zip(product_lists)
        .map(|(category, products)| category.with_products(products))
        .collect();
    if !images.is_empty() {
        log::debug!("🖼️ Aplicando fotos locales");
    }
    images.apply_to(&mut menu);

    let total_products: usize = menu.iter().map(|c| c.products.len()).sum();
    log::info!("✅ Carta cargada: {} categorías, {} productos", menu.len(), total_products);
    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::test_support::{FakeGateway, GatewayCall};
    use futures::executor::block_on;

    #[test]
    fn single_category_scenario() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(1, "Bebidas"))
            .with_products(1, vec![Product::new(10, "Café", 1.5)]);

        let menu = block_on(load_menu(&gateway, &ImageCache::default())).unwrap();

        assert_eq!(
            menu,
            vec![Category::new(1, "Bebidas").with_products(vec![Product::new(10, "Café", 1.5)])]
        );
    }

    #[test]
    fn product_counts_follow_position() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(5, "Tostadas"))
            .with_category(Category::new(2, "Zumos"))
            .with_category(Category::new(9, "Postres"))
            .with_products(5, vec![Product::new(1, "Tomate", 2.0), Product::new(2, "Mixta", 2.5)])
            .with_products(9, vec![Product::new(3, "Flan", 3.0)]);

        let menu = block_on(load_menu(&gateway, &ImageCache::default())).unwrap();

        let counts: Vec<(i64, usize)> = menu.iter().map(|c| (c.id, c.products.len())).collect();
        assert_eq!(counts, vec![(5, 2), (2, 0), (9, 1)]);
    }

    #[test]
    fn empty_categories_skip_product_requests() {
        let gateway = FakeGateway::new();

        let menu = block_on(load_menu(&gateway, &ImageCache::default())).unwrap();

        assert!(menu.is_empty());
        assert_eq!(gateway.calls(), vec![GatewayCall::ListCategories]);
    }

    #[test]
    fn one_failing_category_fails_everything() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(1, "Bebidas"))
            .with_category(Category::new(2, "Postres"))
            .with_products(1, vec![Product::new(10, "Café", 1.5)])
            .failing_products_for(2);

        let result = block_on(load_menu(&gateway, &ImageCache::default()));

        assert!(matches!(result, Err(GatewayError::Network(_))));
    }

    #[test]
    fn category_failure_is_reported() {
        let gateway = FakeGateway::new().failing_categories();

        let result = block_on(load_menu(&gateway, &ImageCache::default()));

        assert!(result.is_err());
        assert_eq!(gateway.calls(), vec![GatewayCall::ListCategories]);
    }

    #[test]
    fn cached_images_are_merged_by_id() {
        let gateway = FakeGateway::new()
            .with_category(Category::new(1, "Bebidas"))
            .with_category(Category::new(2, "Postres"));
        let mut images = ImageCache::default();
        images.set(2, "data:image/jpeg;base64,X");

        let menu = block_on(load_menu(&gateway, &images)).unwrap();

        assert_eq!(menu[0].image, None);
        assert_eq!(menu[1].image.as_deref(), Some("data:image/jpeg;base64,X"));
    }
}
