use std::rc::Rc;
use chrono::Datelike;
use yew::prelude::*;
use web_sys::HtmlInputElement;

use super::{MapContainer, MenuSection};
use crate::config::{AppConfig, CONFIG};
use crate::hooks::use_menu;
use crate::utils::{t, BACKGROUND_URL};

/// Pantalla única: cabecera, alta de categorías, carta y mapa
#[function_component(MenuScreen)]
pub fn menu_screen() -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_else(|| Rc::new(CONFIG.clone()));
    let lang = config.language.clone();
    let menu = use_menu(config.clone());
    let new_category = use_state(String::new);

    let year = chrono::Local::now().year();

    let on_new_category_input = {
        let new_category = new_category.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                new_category.set(input.value());
            }
        })
    };

    let on_add_category = {
        let new_category = new_category.clone();
        let cb = menu.create_category.clone();
        Callback::from(move |_: MouseEvent| {
            cb.emit((*new_category).clone());
            new_category.set(String::new());
        })
    };

    let store = &*menu.state;

    let body = if store.loading && store.categories.is_empty() {
        html! { <p class="menu-status">{t("cargando", &lang)}</p> }
    } else if store.categories.is_empty() {
        html! { <p class="menu-status">{t("carta_vacia", &lang)}</p> }
    } else {
        html! {
            <>{ for store.categories.iter().map(|category| html! {
                <MenuSection
                    key={category.id.to_string()}
                    category={category.clone()}
                    language={lang.clone()}
                    on_update_category={menu.update_category.clone()}
                    on_delete_category={menu.delete_category.clone()}
                    on_remove_image={menu.remove_image.clone()}
                    on_create_product={menu.create_product.clone()}
                    on_update_product={menu.update_product.clone()}
                    on_delete_product={menu.delete_product.clone()}
                />
            }) }</>
        }
    };

    let debug = if config.show_json_debug {
        let json = serde_json::to_string_pretty(&store.categories).unwrap_or_default();
        html! {
            <div class="json-debug">
                <h3>{t("menu_json", &lang)}</h3>
                <pre>{json}</pre>
            </div>
        }
    } else {
        html! {}
    };

    let background = format!("background-image: url('{}')", BACKGROUND_URL);

    html! {
        <div class="menu-screen" style={background}>
            <div class="menu">
                <header>
                    <h1>{t("titulo", &lang)}</h1>
                    <p class="established">{format!("Est. {}", year)}</p>
                </header>
                <hr />
                <div class="new-category">
                    <input
                        class="category-input"
                        type="text"
                        placeholder={t("nombre_nueva_categoria", &lang)}
                        value={(*new_category).clone()}
                        oninput={on_new_category_input}
                    />
                    <button class="btn-add" onclick={on_add_category}>{t("nueva_categoria", &lang)}</button>
                </div>
                <main>{body}</main>
                <hr class="bottom-line" />
                <MapContainer map_config={config.map_config.clone()} language={lang.clone()} />
                {debug}
            </div>
        </div>
    }
}
