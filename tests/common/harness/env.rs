//! Isolated test environment with temp directory.

use super::{NotesCommand, TestNote};
use jot::domain::Note;
use jot::infra::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes file.
///
/// Creates a temp directory that is automatically cleaned up on drop. The
/// notes file lives inside it and the config directory points at it too, so
/// a user's own config never leaks into a test.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Root of the environment
    root: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Returns the root of the environment.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the path of the notes file.
    pub fn notes_file(&self) -> PathBuf {
        self.root.join("notes.json")
    }

    /// Returns a store over the notes file.
    pub fn store(&self) -> NoteStore {
        NoteStore::new(self.notes_file())
    }

    /// Writes the given notes as the whole collection.
    pub fn seed(&self, notes: &[TestNote]) {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        self.store().save(&notes).expect("Failed to seed notes");
    }

    /// Loads the collection as the binary left it.
    pub fn notes(&self) -> Vec<Note> {
        self.store().load().expect("Failed to load notes")
    }

    /// Returns the raw notes file contents.
    pub fn read_notes_file(&self) -> String {
        std::fs::read_to_string(self.notes_file()).expect("Failed to read notes file")
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config_home(&self.root.join("config"))
            .file(&self.notes_file())
            .no_color()
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_creates_temp_directory() {
        let env = TestEnv::new();
        assert!(env.root().is_dir(), "root should be a directory");
        assert!(!env.notes_file().exists(), "notes file starts absent");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_seed_and_load() {
        let env = TestEnv::new();
        env.seed(&[TestNote::new("One"), TestNote::new("Two").id(2)]);

        let notes = env.notes();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[1].title(), "Two");
    }

    #[test]
    fn test_env_write_file_creates_parents() {
        let env = TestEnv::new();
        let path = env.write_file("nested/dir/file.txt", "hi");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "hi");
    }
}
