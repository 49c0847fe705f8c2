pub mod api;
pub mod timer;
pub mod validation;
