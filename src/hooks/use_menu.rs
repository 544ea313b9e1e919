// ============================================================================
// USE MENU HOOK - Estado de la carta + mutaciones
// ============================================================================
// Hook nativo de Yew (use_reducer). Delega la lógica al MenuViewModel y
// despacha acciones al MenuStore. Toda mutación con éxito termina en una
// recarga completa, fenceada por generación.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::services::GatewayError;
use crate::stores::{LoadGeneration, MenuAction, MenuStore};
use crate::viewmodels::{local_category_update, ImageChange, MenuViewModel, MutationOutcome};

/// Handle del hook
#[derive(Clone)]
pub struct UseMenuHandle {
    pub state: UseReducerHandle<MenuStore>,
    pub reload: Callback<()>,
    pub create_category: Callback<String>,
    /// (id, nombre, cambio de foto)
    pub update_category: Callback<(i64, String, ImageChange)>,
    pub delete_category: Callback<i64>,
    pub remove_image: Callback<i64>,
    /// (categoria_id, nombre, precio tal cual se escribió)
    pub create_product: Callback<(i64, String, String)>,
    /// (producto_id, nombre, precio)
    pub update_product: Callback<(i64, String, String)>,
    pub delete_product: Callback<i64>,
}

fn after_mutation(result: Result<MutationOutcome, GatewayError>, reload: &Callback<()>) {
    match result {
        Ok(MutationOutcome::Reload) => reload.emit(()),
        Ok(outcome) => log::info!("⏭️ Mutación sin cambios: {:?}", outcome),
        // El viewmodel ya alertó; se conserva la carta anterior
        Err(_) => {}
    }
}

#[hook]
pub fn use_menu(config: Rc<AppConfig>) -> UseMenuHandle {
    let state = use_reducer(MenuStore::default);
    let generations = use_mut_ref(LoadGeneration::default);

    // Recarga completa
    let reload = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |_| {
            let generation = generations.borrow_mut().issue();
            state.dispatch(MenuAction::LoadStarted { generation });

            let state = state.clone();
            let images = state.images.clone();
            let vm = MenuViewModel::from_config(&config);
            wasm_bindgen_futures::spawn_local(async move {
                match vm.reload(&images).await {
                    Ok(categories) => {
                        log::info!("📦 Carga {}: {} categorías", generation, categories.len());
                        state.dispatch(MenuAction::Loaded { generation, categories });
                    }
                    Err(e) => state.dispatch(MenuAction::LoadFailed {
                        generation,
                        message: e.to_string(),
                    }),
                }
            });
        })
    };

    // Primera carga al montar
    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    let create_category = {
        let config = config.clone();
        let reload = reload.clone();
        Callback::from(move |name: String| {
            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                after_mutation(vm.create_category(&name).await, &reload);
            });
        })
    };

    let update_category = {
        let state = state.clone();
        let config = config.clone();
        let reload = reload.clone();
        Callback::from(move |(category_id, name, image): (i64, String, ImageChange)| {
            let Some(current) = state.category(category_id).cloned() else {
                log::warn!("⚠️ Categoría {} no encontrada", category_id);
                return;
            };
            // Optimista: foto y nombre se ven al instante
            for action in local_category_update(&current, &name, &image) {
                state.dispatch(action);
            }

            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = vm.update_category(&current, &name, &image).await;
                if result.is_err() {
                    // Deshacer el nombre optimista con lo que diga el servidor
                    reload.emit(());
                    return;
                }
                after_mutation(result, &reload);
            });
        })
    };

    let delete_category = {
        let config = config.clone();
        let reload = reload.clone();
        Callback::from(move |category_id: i64| {
            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                after_mutation(vm.delete_category(category_id).await, &reload);
            });
        })
    };

    let remove_image = {
        let state = state.clone();
        let config = config.clone();
        Callback::from(move |category_id: i64| {
            let vm = MenuViewModel::from_config(&config);
            if let Some(action) = vm.confirm_image_removal(category_id) {
                log::info!("🗑️ Foto de la categoría {} eliminada", category_id);
                state.dispatch(action);
            }
        })
    };

    let create_product = {
        let config = config.clone();
        let reload = reload.clone();
        Callback::from(move |(category_id, name, price): (i64, String, String)| {
            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                after_mutation(vm.create_product(category_id, &name, &price).await, &reload);
            });
        })
    };

    let update_product = {
        let config = config.clone();
        let reload = reload.clone();
        Callback::from(move |(product_id, name, price): (i64, String, String)| {
            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                after_mutation(vm.update_product(product_id, &name, &price).await, &reload);
            });
        })
    };

    let delete_product = {
        let reload = reload.clone();
        Callback::from(move |product_id: i64| {
            let vm = MenuViewModel::from_config(&config);
            let reload = reload.clone();
            wasm_bindgen_futures::spawn_local(async move {
                after_mutation(vm.delete_product(product_id).await, &reload);
            });
        })
    };

    UseMenuHandle {
        state,
        reload,
        create_category,
        update_category,
        delete_category,
        remove_image,
        create_product,
        update_product,
        delete_product,
    }
}
