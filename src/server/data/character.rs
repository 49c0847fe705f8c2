use crate::{
    model::character::{CharacterDto, NewCharacterDto},
    server::{data::store::CharacterStore, error::store::StoreError},
};

pub struct CharacterRepository<'a> {
    store: &'a CharacterStore,
}

impl<'a> CharacterRepository<'a> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(store: &'a CharacterStore) -> Self {
        Self { store }
    }

    /// Returns every character in insertion order
    pub async fn get_all(&self) -> Result<Vec<CharacterDto>, StoreError> {
        self.store
            .transact(|file| Ok(file.load()?.characters))
            .await
    }

    /// Appends a new character with the next free id and returns it
    pub async fn create(&self, character: NewCharacterDto) -> Result<CharacterDto, StoreError> {
        self.store
            .transact(move |file| {
                let mut document = file.load()?;

                let character = CharacterDto::from_new(document.next_id()?, character);
                document.characters.push(character.clone());

                file.save(&document)?;

                Ok(character)
            })
            .await
    }

    /// Finds a character by id
    pub async fn get_by_id(&self, id: i64) -> Result<Option<CharacterDto>, StoreError> {
        self.store
            .transact(move |file| {
                Ok(file
                    .load()?
                    .characters
                    .into_iter()
                    .find(|c| c.id == id))
            })
            .await
    }

    /// Replaces the user supplied fields of a character, keeping its id and position
    ///
    /// Returns `None` without writing to the store if no character has the given id.
    pub async fn update(
        &self,
        id: i64,
        character: NewCharacterDto,
    ) -> Result<Option<CharacterDto>, StoreError> {
        self.store
            .transact(move |file| {
                let mut document = file.load()?;

                let Some(index) = document.position(id) else {
                    return Ok(None);
                };

                let character = CharacterDto::from_new(id, character);
                document.characters[index] = character.clone();

                file.save(&document)?;

                Ok(Some(character))
            })
            .await
    }

    /// Removes a character and returns it
    ///
    /// Returns `None` without writing to the store if no character has the given id.
    pub async fn delete(&self, id: i64) -> Result<Option<CharacterDto>, StoreError> {
        self.store
            .transact(move |file| {
                let mut document = file.load()?;

                let Some(index) = document.position(id) else {
                    return Ok(None);
                };

                let character = document.characters.remove(index);

                file.save(&document)?;

                Ok(Some(character))
            })
            .await
    }
}
