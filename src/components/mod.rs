pub mod app;
pub mod image_picker;
pub mod map;
pub mod menu_item;
pub mod menu_screen;
pub mod menu_section;

pub use app::App;
pub use image_picker::ImagePicker;
pub use map::MapContainer;
pub use menu_item::MenuItem;
pub use menu_screen::MenuScreen;
pub use menu_section::MenuSection;
