pub mod api;
pub mod character;
