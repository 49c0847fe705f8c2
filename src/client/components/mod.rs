pub mod character_card;
pub mod character_form;
pub mod confirm_modal;
pub mod navbar;
pub mod page;
pub mod toast;

pub use character_card::CharacterCard;
pub use character_form::CharacterFormCard;
pub use confirm_modal::ConfirmDeleteModal;
pub use navbar::Navbar;
pub use page::Page;
pub use toast::ToastNotification;
