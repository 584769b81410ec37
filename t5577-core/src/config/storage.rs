//! Storage settings for saved tag files

use core::fmt::Write;

use t5577_hal::Path;

/// Where tag files live and how they are named
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageConfig {
    /// Shared application data folder (parent of `folder`)
    pub apps_data_folder: &'static str,
    /// Folder holding tag files
    pub folder: &'static str,
    /// Tag file extension, including the dot
    pub extension: &'static str,
    /// Name offered by the first save
    pub default_tag_name: &'static str,
    /// Header of the name entry dialog
    pub name_prompt: &'static str,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            apps_data_folder: "/ext/apps_data",
            folder: "/ext/apps_data/t5577_writer",
            extension: ".t5577",
            default_tag_name: "Tag_1",
            name_prompt: "Enter name",
        }
    }
}

impl StorageConfig {
    /// Full path of the tag file called `name`
    ///
    /// Returns `None` if the path does not fit in a [`Path`].
    pub fn file_path(&self, name: &str) -> Option<Path> {
        let mut path = Path::new();
        write!(path, "{}/{}{}", self.folder, name, self.extension).ok()?;
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path() {
        let config = StorageConfig::default();
        let path = config.file_path("Tag_1").unwrap();
        assert_eq!(path.as_str(), "/ext/apps_data/t5577_writer/Tag_1.t5577");
    }

    #[test]
    fn test_file_path_too_long() {
        let config = StorageConfig::default();
        let name = "n".repeat(t5577_hal::MAX_PATH_LEN);
        assert_eq!(config.file_path(&name), None);
    }

    #[test]
    fn test_folder_is_inside_apps_data() {
        let config = StorageConfig::default();
        assert!(config.folder.starts_with(config.apps_data_folder));
    }
}
