//! Turns a vault listing into rows the list widget can display.
//!
//! Nothing is cached: every call reads the directory again, so files added
//! or removed behind the session's back show up the next time the list is
//! opened.

use chrono::{DateTime, Local};
use std::time::SystemTime;

use crate::core::error::NoteResult;
use crate::core::vault::{NoteMeta, Vault};

pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One displayable row. `title` is the note's filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub title: String,
    pub description: String,
}

/// Fresh listing of the vault, in directory order.
pub fn load(vault: &Vault) -> NoteResult<Vec<ListEntry>> {
    Ok(project(&vault.list_notes()?))
}

pub fn project(notes: &[NoteMeta]) -> Vec<ListEntry> {
    notes
        .iter()
        .map(|note| ListEntry {
            title: note.name.clone(),
            description: format!("Modified: {}", format_modified(note.modified)),
        })
        .collect()
}

pub fn format_modified(time: SystemTime) -> String {
    DateTime::<Local>::from(time).format(MODIFIED_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::temp_vault;
    use chrono::TimeZone;
    use std::fs;

    #[test]
    fn test_project_keeps_order_and_formats_description() {
        let stamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
        let notes = vec![
            NoteMeta {
                name: "zeta.md".to_string(),
                modified: stamp.into(),
            },
            NoteMeta {
                name: "alpha.md".to_string(),
                modified: stamp.into(),
            },
        ];

        let entries = project(&notes);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "zeta.md");
        assert_eq!(entries[1].title, "alpha.md");
        assert_eq!(entries[0].description, "Modified: 2024-03-09 14:05");
    }

    #[test]
    fn test_load_rereads_directory() {
        let (dir, vault) = temp_vault();
        assert!(load(&vault).unwrap().is_empty());

        fs::write(dir.path().join("late.md"), "").unwrap();
        let entries = load(&vault).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "late.md");
        assert!(entries[0].description.starts_with("Modified: "));
    }
}
