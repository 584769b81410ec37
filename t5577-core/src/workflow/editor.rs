//! Editor actions
//!
//! `Editor` holds the only `TagConfiguration` of a session together with
//! the catalogs it indexes, and exposes one method per user action. The
//! collaborators each action needs (storage, dialogs, tag programmer) are
//! passed in by the caller.
//!
//! Loaded-flag suppression: after a load, the first call of each
//! `select_*` method keeps the value that came from the file, clears that
//! field's flag and returns the kept value. The requested value is applied
//! from the second call on.

use t5577_format::FormatError;
use t5577_hal::{FilePicker, FileStorage, Path, StorageError, TagName, TagWriter, TextInput};

use super::events::Event;
use super::machine::State;
use crate::config::{ConfigError, LoadedField, StorageConfig, TagConfiguration};
use crate::persistence::{self, LoadReport, MAX_FILE_SIZE};
use crate::profile::{ProfileError, ProfileTables};

/// Errors that abort an editor action
///
/// An action that returns an error has not changed the configuration or
/// the workflow state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditorError {
    /// Selection index outside its catalog
    Profile(ProfileError),
    /// Block count or block index out of range
    Config(ConfigError),
    /// File could not be opened, read or written
    Storage(StorageError),
    /// Document does not fit the serializer buffer
    Format(FormatError),
    /// Loaded file is not UTF-8 text
    InvalidUtf8,
    /// Tag name does not fit in a storage path
    PathTooLong,
    /// Tag name is empty
    EmptyName,
}

impl From<ProfileError> for EditorError {
    fn from(e: ProfileError) -> Self {
        EditorError::Profile(e)
    }
}

impl From<ConfigError> for EditorError {
    fn from(e: ConfigError) -> Self {
        EditorError::Config(e)
    }
}

impl From<StorageError> for EditorError {
    fn from(e: StorageError) -> Self {
        EditorError::Storage(e)
    }
}

impl From<FormatError> for EditorError {
    fn from(e: FormatError) -> Self {
        EditorError::Format(e)
    }
}

/// Result of a load action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoadOutcome {
    /// User closed the file picker
    Cancelled,
    /// Document committed to the configuration
    Loaded { path: Path, report: LoadReport },
}

/// Result of a save action
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SaveOutcome {
    /// User closed the name dialog
    Cancelled,
    /// Document written to `path`
    Saved { path: Path },
}

/// Editing session
pub struct Editor {
    tables: ProfileTables,
    storage: StorageConfig,
    config: TagConfiguration,
    tag_name: TagName,
    state: State,
}

impl Editor {
    /// Start a session with the default storage settings
    pub fn new(tables: ProfileTables) -> Self {
        Self::with_storage(tables, StorageConfig::default())
    }

    /// Start a session with custom storage settings
    pub fn with_storage(tables: ProfileTables, storage: StorageConfig) -> Self {
        let mut tag_name = TagName::new();
        if tag_name.push_str(storage.default_tag_name).is_err() {
            warn!("default tag name too long, starting with an empty name");
        }

        Self {
            config: TagConfiguration::new(&tables),
            tables,
            storage,
            tag_name,
            state: State::Idle,
        }
    }

    pub fn config(&self) -> &TagConfiguration {
        &self.config
    }

    pub fn tables(&self) -> &ProfileTables {
        &self.tables
    }

    pub fn storage_config(&self) -> &StorageConfig {
        &self.storage
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Name offered by the next save
    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    /// Text shown by the modulation control
    pub fn modulation_label(&self) -> &'static str {
        self.config.modulation().name
    }

    /// Divider shown by the clock control
    pub fn clock_label(&self) -> u8 {
        self.config.clock().divider
    }

    /// Redraw tick: recompute block 0 and return it
    pub fn refresh(&mut self) -> u32 {
        self.config.refresh()
    }

    /// Select a modulation profile
    ///
    /// Returns the index the control should display.
    pub fn select_modulation(&mut self, index: usize) -> Result<usize, EditorError> {
        if self.consume_loaded(LoadedField::Modulation) {
            return Ok(self.config.modulation_index());
        }
        self.config.set_modulation(&self.tables, index)?;
        debug!("modulation -> {}", self.config.modulation().name);
        self.dispatch(Event::SelectionEdited);
        Ok(index)
    }

    /// Select an RF clock profile
    ///
    /// Returns the index the control should display.
    pub fn select_clock(&mut self, index: usize) -> Result<usize, EditorError> {
        if self.consume_loaded(LoadedField::Clock) {
            return Ok(self.config.clock_index());
        }
        self.config.set_clock(&self.tables, index)?;
        debug!("clock -> RF/{}", self.config.clock().divider);
        self.dispatch(Event::SelectionEdited);
        Ok(index)
    }

    /// Select the number of blocks
    ///
    /// Shrinking zeroes every block past the new count. Returns the count
    /// the control should display.
    pub fn select_block_count(&mut self, count: u8) -> Result<u8, EditorError> {
        if self.consume_loaded(LoadedField::BlockCount) {
            return Ok(self.config.block_count());
        }
        let previous = self.config.block_count();
        self.config.set_block_count(count)?;
        if count < previous {
            debug!("zeroed blocks {}..{}", count, previous);
        }
        self.dispatch(Event::SelectionEdited);
        Ok(count)
    }

    /// Choose the block `edit_block` writes
    pub fn select_edit_block(&mut self, index: u8) -> Result<(), EditorError> {
        self.config.set_edit_block(index)?;
        self.dispatch(Event::BlockEdited);
        Ok(())
    }

    /// Overwrite the chosen block
    pub fn edit_block(&mut self, value: u32) {
        self.config.edit_selected_block(value);
        trace!("block {} = {=u32:#x}", self.config.edit_block(), value);
        self.dispatch(Event::BlockEdited);
    }

    /// Leave the current edit screen
    pub fn back(&mut self) {
        self.dispatch(Event::Back);
    }

    /// Let the user pick a tag file and load it
    ///
    /// The configuration is replaced only after the whole file was read.
    pub fn load<P: FilePicker, S: FileStorage>(
        &mut self,
        picker: &mut P,
        storage: &mut S,
    ) -> Result<LoadOutcome, EditorError> {
        self.ensure_folders(storage)?;

        let Some(path) = picker.pick_file(self.storage.folder, self.storage.extension) else {
            debug!("load cancelled");
            return Ok(LoadOutcome::Cancelled);
        };

        let mut buffer = [0u8; MAX_FILE_SIZE];
        let len = storage
            .read(&path, &mut buffer)
            .inspect_err(|e| warn!("failed to read {}: {}", path.as_str(), e))?;
        let text = core::str::from_utf8(&buffer[..len]).map_err(|_| EditorError::InvalidUtf8)?;

        let report = persistence::load(&self.tables, text, &mut self.config);
        info!("loaded {}", path.as_str());
        self.dispatch(Event::LoadCompleted);
        Ok(LoadOutcome::Loaded { path, report })
    }

    /// Ask for a tag name and save the configuration under it
    ///
    /// The dialog is pre-filled with the last saved name. Nothing is
    /// written if the dialog is cancelled or the document cannot be built.
    pub fn save<T: TextInput, S: FileStorage>(
        &mut self,
        input: &mut T,
        storage: &mut S,
    ) -> Result<SaveOutcome, EditorError> {
        let Some(name) = input.request_text(self.storage.name_prompt, &self.tag_name) else {
            debug!("save cancelled");
            return Ok(SaveOutcome::Cancelled);
        };
        if name.is_empty() {
            return Err(EditorError::EmptyName);
        }
        let path = self
            .storage
            .file_path(&name)
            .ok_or(EditorError::PathTooLong)?;

        self.config.refresh();
        let document = persistence::serialize(&self.config)?;

        self.ensure_folders(storage)?;
        storage
            .write(&path, document.as_bytes())
            .inspect_err(|e| warn!("failed to write {}: {}", path.as_str(), e))?;

        info!(
            "saved {} block(s) to {}",
            self.config.block_count(),
            path.as_str()
        );
        self.tag_name = name;
        self.dispatch(Event::SaveCompleted);
        self.dispatch(Event::Settle);
        Ok(SaveOutcome::Saved { path })
    }

    /// Hand the active blocks to the tag programmer
    pub fn write<W: TagWriter>(&mut self, writer: &mut W) {
        let control_word = self.config.refresh();
        info!(
            "writing {} block(s), control word {=u32:#x}",
            self.config.block_count(),
            control_word
        );
        writer.write(self.config.active_blocks());
    }

    /// Consume a loaded flag, returning whether it was set
    fn consume_loaded(&mut self, field: LoadedField) -> bool {
        if !self.config.loaded_mut().take(field) {
            return false;
        }
        debug!("kept loaded {}", field);
        if !self.config.loaded().any() {
            self.dispatch(Event::LoadedFlagsConsumed);
        }
        true
    }

    fn ensure_folders<S: FileStorage>(&self, storage: &mut S) -> Result<(), StorageError> {
        storage.ensure_dir(self.storage.apps_data_folder)?;
        storage.ensure_dir(self.storage.folder)
    }

    fn dispatch(&mut self, event: Event) {
        let next = self.state.transition(event);
        if next != self.state {
            trace!("{} -> {}", self.state, next);
        }
        self.state = next;
    }
}
