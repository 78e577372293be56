pub mod favorites_json;

pub use favorites_json::FavoritesJson;
