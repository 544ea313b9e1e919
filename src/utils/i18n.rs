// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Cabecera
            translations.insert("titulo", "CAMPER CAFÉ");
            translations.insert("nombre_nueva_categoria", "New category name");
            translations.insert("nueva_categoria", "New Category");
            translations.insert("cargando", "Loading menu...");
            translations.insert("carta_vacia", "The menu is empty");
            translations.insert("menu_json", "MENU:");

            // Secciones y filas
            translations.insert("guardar", "Save");
            translations.insert("cancelar", "Cancel");
            translations.insert("eliminar", "Delete");
            translations.insert("nombre_producto", "Product name");
            translations.insert("precio", "Price");
            translations.insert("nuevo", "New");

            // Imágenes
            translations.insert("anadir_imagen", "📷 Add Image");
            translations.insert("cambiar_imagen", "🔄 Change");
            translations.insert("eliminar_imagen", "🗑️ Delete");
            translations.insert("selecciona_opcion", "Choose an option");
            translations.insert("tomar_foto", "📷 Take Photo");
            translations.insert("elegir_galeria", "🖼️ Choose from Gallery");
            translations.insert("permiso_denegado", "Permission denied");
            translations.insert("permiso_camara", "You need to grant permission to use the camera.");
            translations.insert("exito", "Success");
            translations.insert("imagen_anadida", "Image added successfully");
            translations.insert("error_imagen", "Could not select the image.");

            // Confirmaciones
            translations.insert("confirmar", "Confirm");
            translations.insert("confirmar_eliminar_categoria", "Delete this category?");
            translations.insert("confirmar_eliminar_imagen", "Delete this category's image?");

            // Errores
            translations.insert("error", "Error");
            translations.insert("error_cargar_menu", "Could not load the menu");
            translations.insert("error_crear_categoria", "Could not create the category");
            translations.insert("error_actualizar_categoria", "Could not update the category");
            translations.insert("error_eliminar_categoria", "Could not delete the category");
            translations.insert("error_crear_producto", "Could not create the product");
            translations.insert("error_actualizar_producto", "Could not update the product");
            translations.insert("error_eliminar_producto", "Could not delete the product");
            translations.insert("precio_invalido", "The price must be a number");

            // Mapa
            translations.insert("estamos_aqui", "Find Us Here");
            translations.insert("nuestra_ubicacion", "Our location");
        }
        _ => {
            // ES por defecto
            translations.insert("titulo", "CAMPER CAFÉ");
            translations.insert("nombre_nueva_categoria", "Nombre nueva categoría");
            translations.insert("nueva_categoria", "Nueva Categoría");
            translations.insert("cargando", "Cargando carta...");
            translations.insert("carta_vacia", "La carta está vacía");
            translations.insert("menu_json", "MENÚ:");

            translations.insert("guardar", "Guardar");
            translations.insert("cancelar", "Cancelar");
            translations.insert("eliminar", "Eliminar");
            translations.insert("nombre_producto", "Nombre producto");
            translations.insert("precio", "Precio");
            translations.insert("nuevo", "Nuevo");

            translations.insert("anadir_imagen", "📷 Añadir Imagen");
            translations.insert("cambiar_imagen", "🔄 Cambiar");
            translations.insert("eliminar_imagen", "🗑️ Eliminar");
            translations.insert("selecciona_opcion", "Selecciona una opción");
            translations.insert("tomar_foto", "📷 Tomar Foto");
            translations.insert("elegir_galeria", "🖼️ Elegir de Galería");
            translations.insert("permiso_denegado", "Permiso denegado");
            translations.insert("permiso_camara", "Necesitas dar permiso para usar la cámara.");
            translations.insert("exito", "Éxito");
            translations.insert("imagen_anadida", "Imagen añadida correctamente");
            translations.insert("error_imagen", "No se pudo seleccionar la imagen.");

            translations.insert("confirmar", "Confirmar");
            translations.insert("confirmar_eliminar_categoria", "¿Eliminar esta categoría?");
            translations.insert("confirmar_eliminar_imagen", "¿Eliminar la imagen de esta categoría?");

            translations.insert("error", "Error");
            translations.insert("error_cargar_menu", "No se pudo cargar el menú");
            translations.insert("error_crear_categoria", "No se pudo crear la categoría");
            translations.insert("error_actualizar_categoria", "No se pudo actualizar la categoría");
            translations.insert("error_eliminar_categoria", "No se pudo eliminar la categoría");
            translations.insert("error_crear_producto", "No se pudo crear el producto");
            translations.insert("error_actualizar_producto", "No se pudo actualizar el producto");
            translations.insert("error_eliminar_producto", "No se pudo eliminar el producto");
            translations.insert("precio_invalido", "El precio debe ser un número");

            translations.insert("estamos_aqui", "Estamos Aquí");
            translations.insert("nuestra_ubicacion", "Nuestra ubicación");
        }
    }

    translations
}

/// Función de traducción
///
/// # Arguments
/// * `key` - Clave de traducción
/// * `lang` - Idioma ("ES" o "EN")
///
/// # Returns
/// String traducida o la clave si no se encuentra traducción
pub fn t(key: &str, lang: &str) -> String {
    let translations = get_translations(lang);

    if let Some(translation) = translations.get(key) {
        return translation.to_string();
    }

    // Fallback: devolver la clave si no hay traducción
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spanish_is_default() {
        assert_eq!(t("error_cargar_menu", "FR"), "No se pudo cargar el menú");
        assert_eq!(t("error_cargar_menu", "es"), "No se pudo cargar el menú");
    }

    #[test]
    fn english_dictionary() {
        assert_eq!(t("guardar", "en"), "Save");
    }

    #[test]
    fn unknown_key_falls_back() {
        assert_eq!(t("no_existe", "ES"), "no_existe");
    }

    #[test]
    fn dictionaries_have_same_keys() {
        let mut es: Vec<_> = get_translations("ES").into_keys().collect();
        let mut en: Vec<_> = get_translations("EN").into_keys().collect();
        es.sort_unstable();
        en.sort_unstable();
        assert_eq!(es, en);
    }
}
