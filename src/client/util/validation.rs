use crate::model::character::{CharacterDto, NewCharacterDto};

/// Universes offered by the character form. The API itself accepts any value.
pub const UNIVERSES: [&str; 5] = ["Marvel", "DC", "Earth", "Dark Horse", "Other"];

pub const MIN_NAME_LENGTH: usize = 2;

/// Raw values of the character form inputs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterForm {
    pub name: String,
    pub real_name: String,
    pub universe: String,
}

impl CharacterForm {
    pub fn from_character(character: &CharacterDto) -> Self {
        Self {
            name: character.name.clone().unwrap_or_default(),
            real_name: character.real_name.clone().unwrap_or_default(),
            universe: character.universe.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FormField {
    Name,
    RealName,
    Universe,
}

/// Field level validation messages, `None` when the field is valid
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<&'static str>,
    pub real_name: Option<&'static str>,
    pub universe: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.real_name.is_none() && self.universe.is_none()
    }

    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::RealName => self.real_name = None,
            FormField::Universe => self.universe = None,
        }
    }
}

/// Validates the form before anything is sent to the API.
///
/// The name must have at least [`MIN_NAME_LENGTH`] characters once trimmed; real name and
/// universe must not be blank. On success the values are returned as entered.
pub fn validate_character(form: &CharacterForm) -> Result<NewCharacterDto, FormErrors> {
    let mut errors = FormErrors::default();

    let name = form.name.trim();
    if name.is_empty() {
        errors.name = Some("Character name is required");
    } else if name.chars().count() < MIN_NAME_LENGTH {
        errors.name = Some("Name must be at least 2 characters long");
    }

    if form.real_name.trim().is_empty() {
        errors.real_name = Some("Real name is required");
    }

    if form.universe.trim().is_empty() {
        errors.universe = Some("Universe is required");
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewCharacterDto {
        name: Some(form.name.clone()),
        real_name: Some(form.real_name.clone()),
        universe: Some(form.universe.clone()),
    })
}
