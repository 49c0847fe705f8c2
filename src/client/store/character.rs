use crate::model::character::CharacterDto;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    /// Sequence number, unique within one [`CharacterState`]
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
}

/// Local view state of the roster page.
///
/// The character list is reconciled from each API response instead of being fetched again, so a
/// failed request never touches it.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterState {
    pub characters: Vec<CharacterDto>,
    pub loading: bool,
    pub error: Option<String>,
    /// Character currently loaded into the form for editing
    pub editing: Option<CharacterDto>,
    /// Character awaiting delete confirmation
    pub pending_delete: Option<CharacterDto>,
    pub toast: Option<Toast>,
    toast_seq: u64,
}

impl Default for CharacterState {
    fn default() -> Self {
        Self {
            characters: Vec::new(),
            loading: true,
            error: None,
            editing: None,
            pending_delete: None,
            toast: None,
            toast_seq: 0,
        }
    }
}

impl CharacterState {
    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn finish_loading(&mut self, characters: Vec<CharacterDto>) {
        self.characters = characters;
        self.loading = false;
        self.error = None;
    }

    pub fn fail_loading(&mut self) {
        self.loading = false;
        self.error = Some("Failed to load characters".to_string());
        self.notify_error("Failed to load characters");
    }

    pub fn apply_created(&mut self, character: CharacterDto) {
        self.characters.push(character);
        self.notify_success("Character added!");
    }

    /// Replaces the character that was submitted for update with the server's response
    pub fn apply_updated(&mut self, id: i64, character: CharacterDto) {
        if let Some(existing) = self.characters.iter_mut().find(|c| c.id == id) {
            *existing = character;
        }
        self.editing = None;
        self.notify_success("Character updated!");
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.characters.retain(|c| c.id != id);
        self.pending_delete = None;
        if self.editing.as_ref().is_some_and(|c| c.id == id) {
            self.editing = None;
        }
        self.notify_success("Character deleted!");
    }

    pub fn begin_edit(&mut self, character: CharacterDto) {
        self.editing = Some(character);
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn request_delete(&mut self, character: CharacterDto) {
        self.pending_delete = Some(character);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn notify_success(&mut self, message: &str) {
        self.notify(message, ToastKind::Success);
    }

    pub fn notify_error(&mut self, message: &str) {
        self.notify(message, ToastKind::Error);
    }

    fn notify(&mut self, message: &str, kind: ToastKind) {
        self.toast_seq += 1;
        self.toast = Some(Toast {
            id: self.toast_seq,
            message: message.to_string(),
            kind,
        });
    }

    pub fn dismiss_toast(&mut self) {
        self.toast = None;
    }

    /// Closes the toast with the given id once its display time has passed.
    ///
    /// Does nothing if that toast has already been dismissed or replaced.
    pub fn expire_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }

    /// Header label such as "1 character in total" or "3 characters in total"
    pub fn count_label(&self) -> String {
        let count = self.characters.len();

        format!(
            "{} character{} in total",
            count,
            if count == 1 { "" } else { "s" }
        )
    }
}
