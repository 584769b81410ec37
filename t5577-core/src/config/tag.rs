//! Tag configuration model
//!
//! `TagConfiguration` is the single source of truth for an editing
//! session: the current selections and the raw contents of every block.
//!
//! Invariants held by every mutating method:
//! - block 0 is the control word derived from the selections; it is
//!   recomputed whenever a selection changes and cannot be edited directly
//! - the block count stays in `MIN_BLOCK_COUNT..=MAX_BLOCK_COUNT`, and
//!   blocks at or past it are zeroed whenever it changes
//! - the edit block stays in `FIRST_EDITABLE_BLOCK..=LAST_EDITABLE_BLOCK`

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::layout::{
    FIRST_EDITABLE_BLOCK, LAST_EDITABLE_BLOCK, MAX_BLOCKS, MAX_BLOCK_COUNT, MIN_BLOCK_COUNT,
};
use crate::codec::{self, Decoded};
use crate::profile::{ClockProfile, ModulationProfile, ProfileError, ProfileTables};

/// Errors from configuration updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Block count outside `MIN_BLOCK_COUNT..=MAX_BLOCK_COUNT`
    BlockCountOutOfRange,
    /// Edit block outside `FIRST_EDITABLE_BLOCK..=LAST_EDITABLE_BLOCK`
    EditBlockOutOfRange,
    /// Block index is 0 (derived) or past the last editable block
    BlockIndexOutOfRange,
}

/// Fields whose value can come from a loaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoadedField {
    Modulation,
    Clock,
    BlockCount,
}

/// "Value came from a file" markers, one per selection control
///
/// Armed together by a load, consumed one at a time by the next display
/// of each control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadedFlags {
    modulation: bool,
    clock: bool,
    block_count: bool,
}

impl LoadedFlags {
    /// Mark all three fields as loaded
    pub fn arm_all(&mut self) {
        self.modulation = true;
        self.clock = true;
        self.block_count = true;
    }

    /// Check a single flag
    pub fn is_set(&self, field: LoadedField) -> bool {
        *self.flag(field)
    }

    /// Clear a flag, returning whether it was set
    pub fn take(&mut self, field: LoadedField) -> bool {
        core::mem::take(self.flag_mut(field))
    }

    /// Check if any flag is still set
    pub fn any(&self) -> bool {
        self.modulation || self.clock || self.block_count
    }

    fn flag(&self, field: LoadedField) -> &bool {
        match field {
            LoadedField::Modulation => &self.modulation,
            LoadedField::Clock => &self.clock,
            LoadedField::BlockCount => &self.block_count,
        }
    }

    fn flag_mut(&mut self, field: LoadedField) -> &mut bool {
        match field {
            LoadedField::Modulation => &mut self.modulation,
            LoadedField::Clock => &mut self.clock,
            LoadedField::BlockCount => &mut self.block_count,
        }
    }
}

/// Discrete selections encoded in the control word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selections {
    /// Index into the modulation catalog
    pub modulation_index: usize,
    /// Index into the clock catalog
    pub clock_index: usize,
    /// Number of blocks written, block 0 included
    pub block_count: u8,
}

/// Current selections and raw block contents
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TagConfiguration {
    modulation_index: usize,
    modulation: ModulationProfile,
    clock_index: usize,
    clock: ClockProfile,
    block_count: u8,
    edit_block: u8,
    blocks: [u32; MAX_BLOCKS],
    loaded: LoadedFlags,
}

impl TagConfiguration {
    /// Create a configuration with the first profile of each catalog,
    /// one block, and all blocks cleared
    pub fn new(tables: &ProfileTables) -> Self {
        let mut config = Self {
            modulation_index: 0,
            modulation: tables.modulations.first(),
            clock_index: 0,
            clock: tables.clocks.first(),
            block_count: MIN_BLOCK_COUNT,
            edit_block: FIRST_EDITABLE_BLOCK,
            blocks: [0; MAX_BLOCKS],
            loaded: LoadedFlags::default(),
        };
        config.refresh();
        config
    }

    pub fn modulation_index(&self) -> usize {
        self.modulation_index
    }

    pub fn modulation(&self) -> &ModulationProfile {
        &self.modulation
    }

    pub fn clock_index(&self) -> usize {
        self.clock_index
    }

    pub fn clock(&self) -> &ClockProfile {
        &self.clock
    }

    pub fn block_count(&self) -> u8 {
        self.block_count
    }

    pub fn edit_block(&self) -> u8 {
        self.edit_block
    }

    /// All blocks of the tag, block 0 first
    pub fn blocks(&self) -> &[u32; MAX_BLOCKS] {
        &self.blocks
    }

    /// Blocks `0..block_count`, the part that is saved and written
    pub fn active_blocks(&self) -> &[u32] {
        &self.blocks[..self.block_count as usize]
    }

    /// Block 0
    pub fn control_word(&self) -> u32 {
        self.blocks[0]
    }

    pub fn loaded(&self) -> &LoadedFlags {
        &self.loaded
    }

    pub fn loaded_mut(&mut self) -> &mut LoadedFlags {
        &mut self.loaded
    }

    /// Current selections
    pub fn selections(&self) -> Selections {
        Selections {
            modulation_index: self.modulation_index,
            clock_index: self.clock_index,
            block_count: self.block_count,
        }
    }

    /// Select a modulation profile by catalog index
    pub fn set_modulation(
        &mut self,
        tables: &ProfileTables,
        index: usize,
    ) -> Result<(), ProfileError> {
        self.modulation = tables.modulations.get(index)?;
        self.modulation_index = index;
        self.refresh();
        Ok(())
    }

    /// Select a clock profile by catalog index
    pub fn set_clock(&mut self, tables: &ProfileTables, index: usize) -> Result<(), ProfileError> {
        self.clock = tables.clocks.get(index)?;
        self.clock_index = index;
        self.refresh();
        Ok(())
    }

    /// Set the number of blocks, zeroing every block past the new count
    pub fn set_block_count(&mut self, count: u8) -> Result<(), ConfigError> {
        if !(MIN_BLOCK_COUNT..=MAX_BLOCK_COUNT).contains(&count) {
            return Err(ConfigError::BlockCountOutOfRange);
        }
        self.block_count = count;
        self.zero_unused_blocks();
        self.refresh();
        Ok(())
    }

    /// Choose which block `edit_selected_block` writes
    pub fn set_edit_block(&mut self, index: u8) -> Result<(), ConfigError> {
        if !(FIRST_EDITABLE_BLOCK..=LAST_EDITABLE_BLOCK).contains(&index) {
            return Err(ConfigError::EditBlockOutOfRange);
        }
        self.edit_block = index;
        Ok(())
    }

    /// Overwrite a user block
    ///
    /// Block 0 is rejected: it always follows the selections.
    pub fn set_block(&mut self, index: usize, value: u32) -> Result<(), ConfigError> {
        let editable = FIRST_EDITABLE_BLOCK as usize..=LAST_EDITABLE_BLOCK as usize;
        if !editable.contains(&index) {
            return Err(ConfigError::BlockIndexOutOfRange);
        }
        self.blocks[index] = value;
        Ok(())
    }

    /// Overwrite the block chosen with `set_edit_block`
    pub fn edit_selected_block(&mut self, value: u32) {
        // edit_block is kept in the editable range by set_edit_block
        self.blocks[self.edit_block as usize] = value;
    }

    /// Recompute block 0 from the selections and return it
    pub fn refresh(&mut self) -> u32 {
        self.blocks[0] = codec::encode(self);
        self.blocks[0]
    }

    /// Commit a load: raw blocks from the document plus the selections
    /// decoded from its block 0
    ///
    /// Catalogs without a matching entry keep the current selection. All
    /// loaded flags are armed.
    pub fn apply_loaded(&mut self, decoded: &Decoded, blocks: [u32; MAX_BLOCKS]) {
        self.blocks = blocks;
        if let Some(found) = decoded.modulation {
            self.modulation_index = found.index;
            self.modulation = found.profile;
        }
        if let Some(found) = decoded.clock {
            self.clock_index = found.index;
            self.clock = found.profile;
        }
        self.block_count = decoded.block_count;
        self.zero_unused_blocks();
        self.refresh();
        self.loaded.arm_all();
    }

    fn zero_unused_blocks(&mut self) {
        for block in &mut self.blocks[self.block_count as usize..] {
            *block = 0;
        }
    }
}
