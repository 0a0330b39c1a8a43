//! Loading puzzle inputs from disk

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs
///
/// Directory structure: `{dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    dir: PathBuf,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        read_input(&self.input_path(year, day))
    }
}

/// Where the executor takes its inputs from
pub enum InputSource {
    /// One explicit file, used for the single selected day
    File(PathBuf),
    /// Per-day files under an input directory
    Store(InputStore),
}

impl InputSource {
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => read_input(path),
            InputSource::Store(store) => store.get(year, day),
        }
    }

    /// Whether an input for year/day is available without reading it
    pub fn contains(&self, year: u16, day: u8) -> bool {
        match self {
            InputSource::File(path) => path.is_file(),
            InputSource::Store(store) => store.contains(year, day),
        }
    }
}

fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::Missing {
            path: path.to_path_buf(),
        },
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        assert_eq!(
            store.input_path(2023, 1),
            Path::new("inputs").join("2023").join("day01.txt")
        );
        assert_eq!(
            store.input_path(2023, 25),
            Path::new("inputs").join("2023").join("day25.txt")
        );
    }

    #[test]
    fn test_reads_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(temp.path().join("2023")).unwrap();
        fs::write(store.input_path(2023, 4), "Card 1: 1 | 1\n").unwrap();

        assert!(store.contains(2023, 4));
        assert_eq!(store.get(2023, 4).unwrap(), "Card 1: 1 | 1\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2023, 9));
        match store.get(2023, 9) {
            Err(InputError::Missing { path }) => assert_eq!(path, store.input_path(2023, 9)),
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());
        fs::create_dir_all(store.input_path(2023, 2)).unwrap();

        assert!(!store.contains(2023, 2));
        assert!(matches!(store.get(2023, 2), Err(InputError::Read { .. })));
    }

    #[test]
    fn test_explicit_file_source_ignores_year_day() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "HASH").unwrap();

        let source = InputSource::File(file);
        assert!(source.contains(2023, 15));
        assert_eq!(source.load(2023, 15).unwrap(), "HASH");
        assert_eq!(source.load(2015, 1).unwrap(), "HASH");
    }
}
