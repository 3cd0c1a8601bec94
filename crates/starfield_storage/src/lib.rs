use starfield_core::Theme;
use std::fs;
use std::path::Path;

/// Load the persisted theme flag. The entry is the literal string "light" or
/// "dark"; an absent file, a read error, or any other content means dark.
pub fn load_theme(path: &Path) -> Theme {
    match fs::read_to_string(path) {
        Ok(contents) => Theme::from_persisted(contents.trim()),
        Err(_) => Theme::Dark,
    }
}

/// Persist the theme flag to disk
pub fn save_theme(theme: Theme, path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create dir: {e}"))?;
        }
    }
    fs::write(path, theme.as_str()).map_err(|e| format!("Write error: {e}"))?;
    Ok(())
}
