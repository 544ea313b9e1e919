pub mod use_image_capture;
pub mod use_menu;

pub use use_image_capture::use_image_capture;
pub use use_menu::use_menu;
