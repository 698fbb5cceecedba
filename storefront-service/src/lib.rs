pub mod api;
pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

pub use basket::BasketService;
pub use catalog::CatalogReader;
pub use checkout::CheckoutService;
pub use error::{ShopError, ShopResult};
