use std::rc::Rc;
use yew::prelude::*;
use web_sys::HtmlInputElement;

use super::{ImagePicker, MenuItem};
use crate::config::{AppConfig, CONFIG};
use crate::hooks::use_image_capture;
use crate::models::Category;
use crate::services::CaptureSource;
use crate::utils::t;
use crate::viewmodels::ImageChange;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuSectionProps {
    pub category: Category,
    #[prop_or_default]
    pub language: String,
    pub on_update_category: Callback<(i64, String, ImageChange)>,
    pub on_delete_category: Callback<i64>,
    pub on_remove_image: Callback<i64>,
    pub on_create_product: Callback<(i64, String, String)>,
    pub on_update_product: Callback<(i64, String, String)>,
    pub on_delete_product: Callback<i64>,
}

fn text_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

/// Sección de una categoría: cabecera editable, foto y productos
#[function_component(MenuSection)]
pub fn menu_section(props: &MenuSectionProps) -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_else(|| Rc::new(CONFIG.clone()));
    let category = &props.category;
    let lang = &props.language;

    let editing = use_state(|| false);
    let draft_name = use_state(|| category.name.clone());
    let picker_open = use_state(|| false);
    let new_product_name = use_state(String::new);
    let new_product_price = use_state(String::new);

    // La foto se aplica al instante (optimista), sin tocar el nombre
    let on_captured = {
        let cb = props.on_update_category.clone();
        let id = category.id;
        let name = category.name.clone();
        Callback::from(move |data_uri: String| {
            cb.emit((id, name.clone(), ImageChange::Set(data_uri)));
        })
    };
    let capture = use_image_capture(config, on_captured);

    let start_edit = {
        let editing = editing.clone();
        let draft_name = draft_name.clone();
        let name = category.name.clone();
        Callback::from(move |_: MouseEvent| {
            draft_name.set(name.clone());
            editing.set(true);
        })
    };

    let on_save = {
        let editing = editing.clone();
        let draft_name = draft_name.clone();
        let cb = props.on_update_category.clone();
        let id = category.id;
        Callback::from(move |_: MouseEvent| {
            cb.emit((id, (*draft_name).clone(), ImageChange::Keep));
            editing.set(false);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_delete = {
        let cb = props.on_delete_category.clone();
        let id = category.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    let open_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_: MouseEvent| picker_open.set(true))
    };

    let close_picker = {
        let picker_open = picker_open.clone();
        Callback::from(move |_| picker_open.set(false))
    };

    let on_pick = {
        let start = capture.start.clone();
        Callback::from(move |source: CaptureSource| start.emit(source))
    };

    let on_remove_image = {
        let cb = props.on_remove_image.clone();
        let id = category.id;
        Callback::from(move |_: MouseEvent| cb.emit(id))
    };

    let on_add_product = {
        let cb = props.on_create_product.clone();
        let name = new_product_name.clone();
        let price = new_product_price.clone();
        let id = category.id;
        Callback::from(move |_: MouseEvent| {
            if name.trim().is_empty() || price.trim().is_empty() {
                return;
            }
            cb.emit((id, (*name).clone(), (*price).clone()));
            name.set(String::new());
            price.set(String::new());
        })
    };

    let header = if *editing {
        html! {
            <div class="category-header editing">
                <input class="category-input" type="text" value={(*draft_name).clone()}
                    oninput={text_input(&draft_name)} />
                <button class="btn-save" onclick={on_save}>{t("guardar", lang)}</button>
                <button class="btn-cancel" onclick={on_cancel}>{t("cancelar", lang)}</button>
                <button class="btn-delete" onclick={on_delete}>{t("eliminar", lang)}</button>
            </div>
        }
    } else {
        html! {
            <div class="category-header" onclick={start_edit}>
                <h2>{&category.name}</h2>
            </div>
        }
    };

    let busy = capture.state.is_busy();
    let image_section = if category.has_local_image() {
        html! {
            <div class="category-image">
                <img src={category.display_image().to_string()} alt={category.name.clone()} />
                <div class="image-actions">
                    <button class="btn-image" disabled={busy} onclick={open_picker}>{t("cambiar_imagen", lang)}</button>
                    <button class="btn-image" onclick={on_remove_image}>{t("eliminar_imagen", lang)}</button>
                </div>
            </div>
        }
    } else {
        html! {
            <div class="category-image empty">
                <img class="category-icon" src={category.display_image().to_string()} alt="" />
                <button class="btn-image" disabled={busy} onclick={open_picker}>{t("anadir_imagen", lang)}</button>
            </div>
        }
    };

    html! {
        <section class="category-section" data-id={category.id.to_string()}>
            {header}
            {image_section}
            <ImagePicker
                active={*picker_open}
                on_pick={on_pick}
                on_close={close_picker}
                language={lang.clone()}
            />
            {
                for category.products.iter().map(|product| html! {
                    <MenuItem
                        key={product.id.to_string()}
                        product={product.clone()}
                        language={lang.clone()}
                        on_update={props.on_update_product.clone()}
                        on_delete={props.on_delete_product.clone()}
                    />
                })
            }
            <div class="new-product">
                <input class="item-input" type="text" placeholder={t("nombre_producto", lang)}
                    value={(*new_product_name).clone()} oninput={text_input(&new_product_name)} />
                <input class="item-input price-input" type="text" inputmode="decimal" placeholder={t("precio", lang)}
                    value={(*new_product_price).clone()} oninput={text_input(&new_product_price)} />
                <button class="btn-add" onclick={on_add_product}>{t("nuevo", lang)}</button>
            </div>
        </section>
    }
}
