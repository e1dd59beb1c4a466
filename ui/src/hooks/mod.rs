pub mod use_brand_kit;
pub mod use_push_route;

pub use use_brand_kit::{BrandKitHandle, use_brand_kit};
pub use use_push_route::use_push_route;
