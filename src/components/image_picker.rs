use yew::prelude::*;
use crate::services::CaptureSource;
use crate::utils::t;

#[derive(Properties, PartialEq, Clone)]
pub struct ImagePickerProps {
    pub active: bool,
    pub on_pick: Callback<CaptureSource>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub language: String,
}

/// Modal "Tomar foto / Elegir de galería"
#[function_component(ImagePicker)]
pub fn image_picker(props: &ImagePickerProps) -> Html {
    if !props.active {
        return html! {};
    }
    let lang = &props.language;

    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let pick = |source: CaptureSource| {
        let on_pick = props.on_pick.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_e: MouseEvent| {
            on_close.emit(());
            on_pick.emit(source);
        })
    };

    html! {
        <div class="modal-overlay" onclick={close_click.clone()}>
            <div class="picker-content" onclick={stop}>
                <h3>{t("selecciona_opcion", lang)}</h3>
                <button class="btn-picker" onclick={pick(CaptureSource::Camera)}>{t("tomar_foto", lang)}</button>
                <button class="btn-picker" onclick={pick(CaptureSource::Gallery)}>{t("elegir_galeria", lang)}</button>
                <button class="btn-cancel" onclick={close_click}>{t("cancelar", lang)}</button>
            </div>
        </div>
    }
}
