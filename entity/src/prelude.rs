pub use super::points::Entity as Points;
pub use super::setting::Entity as Setting;
