use std::sync::Arc;

use crate::server::data::store::CharacterStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CharacterStore>,
}
