pub mod image_cache;
pub mod menu_store;

pub use image_cache::ImageCache;
pub use menu_store::{LoadGeneration, MenuAction, MenuStore};
