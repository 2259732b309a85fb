//! Plugin registration metadata consumed by the host registry.
//!
//! Static descriptive data only; nothing here touches the decoder.

use serde::Serialize;

use crate::verify::GameFile;

pub const KEY: &str = "dangerous_dave_a";
pub const TITLE: &str = "Dangerous Dave";
pub const DEVELOPER: &str = "John Romero";
pub const DESCRIPTION: &str = "Dangerous Dave (DOS)";

/// Archive holding the packed tile graphics inside the game directory
pub const TILE_ARCHIVE_NAME: &str = "EGADAVE.DAV";

/// Descriptive record handed to the host registry
#[derive(Debug, Clone, Serialize)]
pub struct PluginInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub developer: &'static str,
    pub description: &'static str,
}

pub fn info() -> PluginInfo {
    PluginInfo {
        key: KEY,
        title: TITLE,
        developer: DEVELOPER,
        description: DESCRIPTION,
    }
}

/// Files that identify a supported installation
pub fn identifying_files() -> Vec<GameFile> {
    vec![GameFile::new(
        "DAVE.EXE",
        76586,
        "10ac35dd6bc6314cd5caf08a4ffb4275",
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_serialises_for_registry() {
        let json = serde_json::to_string(&info()).unwrap();

        assert!(json.contains("\"key\":\"dangerous_dave_a\""));
        assert!(json.contains("\"title\":\"Dangerous Dave\""));
        assert!(json.contains("\"developer\":\"John Romero\""));
    }

    #[test]
    fn test_identifying_files_cover_the_executable() {
        let files = identifying_files();

        assert!(files.iter().any(|file| file.name == "DAVE.EXE"));
    }
}
