pub mod category;
pub mod product;
pub mod wire;

pub use category::Category;
pub use product::{parse_price, Product};
pub use wire::{parse_categories, parse_products, ParseError};
