/// Fondo de granos de café detrás de la carta
pub const BACKGROUND_URL: &str = "https://cdn.freecodecamp.org/curriculum/css-cafe/beans.jpg";

/// Id del contenedor donde index.html monta el mapa
pub const MAP_CONTAINER_ID: &str = "cafe-map";

/// Espera antes de inicializar el mapa (DOM listo)
pub const MAP_INIT_DELAY_MS: u32 = 100;

/// Margen tras recuperar el foco antes de dar el selector de ficheros por cancelado
pub const PICKER_FOCUS_GRACE_MS: u32 = 1500;
