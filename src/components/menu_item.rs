use yew::prelude::*;
use web_sys::HtmlInputElement;
use crate::models::Product;
use crate::utils::t;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuItemProps {
    pub product: Product,
    #[prop_or_default]
    pub language: String,
    /// (producto_id, nombre, precio)
    pub on_update: Callback<(i64, String, String)>,
    pub on_delete: Callback<i64>,
}

/// Fila de producto. Cada fila tiene su propio modo edición.
#[function_component(MenuItem)]
pub fn menu_item(props: &MenuItemProps) -> Html {
    let p = &props.product;
    let lang = &props.language;

    let editing = use_state(|| false);
    let name = use_state(|| p.name.clone());
    let price = use_state(|| p.price.to_string());

    let start_edit = {
        let editing = editing.clone();
        let name = name.clone();
        let price = price.clone();
        let product = p.clone();
        Callback::from(move |_: MouseEvent| {
            // Siempre se parte de los valores actuales del servidor
            name.set(product.name.clone());
            price.set(product.price.to_string());
            editing.set(true);
        })
    };

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };

    let on_price_input = {
        let price = price.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                price.set(input.value());
            }
        })
    };

    let on_save = {
        let editing = editing.clone();
        let name = name.clone();
        let price = price.clone();
        let cb = props.on_update.clone();
        let id = p.id;
        Callback::from(move |_: MouseEvent| {
            cb.emit((id, (*name).clone(), (*price).clone()));
            editing.set(false);
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(false))
    };

    let on_delete = {
        let cb = props.on_delete.clone();
        let id = p.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(id);
        })
    };

    if *editing {
        return html! {
            <article class="item editing">
                <input class="item-input" type="text" value={(*name).clone()} oninput={on_name_input}
                    placeholder={t("nombre_producto", lang)} />
                <input class="item-input price-input" type="text" inputmode="decimal"
                    value={(*price).clone()} oninput={on_price_input} placeholder={t("precio", lang)} />
                <div class="item-actions">
                    <button class="btn-save" onclick={on_save}>{t("guardar", lang)}</button>
                    <button class="btn-cancel" onclick={on_cancel}>{t("cancelar", lang)}</button>
                </div>
            </article>
        };
    }

    html! {
        <article class="item" onclick={start_edit}>
            <p class="flavor">{&p.name}</p>
            <p class="price">{p.price_label()}</p>
            <button class="btn-delete-item" title={t("eliminar", lang)} onclick={on_delete}>{"✕"}</button>
        </article>
    }
}
