//! Configuration and data paths
//!
//! Uses the directories crate for platform-appropriate locations:
//! - Linux: `~/.config/manga-api-tester/`
//! - macOS: `~/Library/Application Support/manga-api-tester/`
//! - Windows: `%APPDATA%\manga-api-tester\`

use std::path::PathBuf;

/// Application name used for directory lookup
const APP_NAME: &str = "manga-api-tester";

/// File name of the placeholder image written by the translate test
const SAMPLE_IMAGE_NAME: &str = "manga_sample.png";

/// Get the configuration directory path
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Fixed location of the synthesized sample image
pub fn sample_image_path() -> PathBuf {
    std::env::temp_dir().join(SAMPLE_IMAGE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.file_name().unwrap(), "config.toml");
        }
    }

    #[test]
    fn test_sample_image_in_temp_dir() {
        let path = sample_image_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with("manga_sample.png"));
    }
}
