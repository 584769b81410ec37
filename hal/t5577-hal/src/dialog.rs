//! User dialog abstractions
//!
//! Both dialogs can be cancelled by the user, which is reported as `None`.

use heapless::String;

/// Maximum length of a storage path
pub const MAX_PATH_LEN: usize = 128;

/// Maximum length of a tag name (the text input buffer is 32 bytes)
pub const MAX_NAME_LEN: usize = 31;

/// Storage path buffer
pub type Path = String<MAX_PATH_LEN>;

/// Tag name buffer
pub type TagName = String<MAX_NAME_LEN>;

/// File browser
pub trait FilePicker {
    /// Let the user pick a file under `base_folder` with `extension`
    ///
    /// Returns the full path of the chosen file, or `None` if cancelled.
    fn pick_file(&mut self, base_folder: &str, extension: &str) -> Option<Path>;
}

/// Text entry dialog
pub trait TextInput {
    /// Ask the user for a line of text, pre-filled with `default`
    ///
    /// Returns the entered text, or `None` if cancelled.
    fn request_text(&mut self, prompt: &str, default: &str) -> Option<TagName>;
}
