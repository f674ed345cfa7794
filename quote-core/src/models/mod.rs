mod asset_record;
mod catalog_item;
mod quote_item;
mod quote_record;
mod theme;
mod user_profile;

pub use asset_record::AssetRecord;
pub use catalog_item::{CatalogItem, ItemKind};
pub use quote_item::QuoteItem;
pub use quote_record::QuoteRecord;
pub use theme::Theme;
pub use user_profile::UserProfile;
