use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".daybook";

/// Returns the application-specific data directory, defaulting to `~/.daybook`.
///
/// The `DAYBOOK_HOME` environment variable overrides the default location.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("DAYBOOK_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Resolves the file path backing a storage key within `root`.
pub fn key_file(root: &std::path::Path, key: &str) -> PathBuf {
    root.join(format!("{}.json", key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_file_appends_json_extension() {
        let path = key_file(std::path::Path::new("/tmp/store"), "journal_entries_v1");
        assert!(path.ends_with("journal_entries_v1.json"));
    }
}
