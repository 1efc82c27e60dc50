// File: src/persistence.rs
use crate::core::exceptions::UserExceptionMap;
use crate::error::LoadError;
use crate::loader::Lexicon;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Error, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes a compiled lexicon snapshot so later runs can skip parsing the
/// word lists. The file is replaced atomically.
pub fn save_compiled(lexicon: &Lexicon, path: &Path) -> Result<(), Error> {
    let parent_dir = parent_dir(path);
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    bincode::serialize_into(&mut writer, lexicon).map_err(Error::other)?;
    writer.flush()?;
    drop(writer);

    temp_file.persist(path)?;
    info!(words = lexicon.dictionary.len(), path = %path.display(), "snapshot written");
    Ok(())
}

pub fn load_compiled(path: &Path) -> Result<Lexicon, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::io(path, e))?;
    let reader = BufReader::new(file);
    let lexicon: Lexicon = bincode::deserialize_from(reader)?;
    lexicon.dictionary.validate()?;
    info!(words = lexicon.dictionary.len(), path = %path.display(), "snapshot loaded");
    Ok(lexicon)
}

/// Rejects an entry the line format cannot carry: the loader splits at the
/// first space and reads one entry per line.
fn check_storable(key: &str, value: &str) -> Result<(), Error> {
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("exception key {key:?} cannot be saved: keys must not contain whitespace"),
        ));
    }
    if value.is_empty() || value.contains(['\n', '\r']) {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            format!("exception value for {key:?} cannot be saved: it must be one line"),
        ));
    }
    Ok(())
}

/// Writes user exceptions back in the "key value" line format, sorted by key.
/// Fails without touching `path` if any entry would not reload identically.
pub fn save_user_exceptions(map: &UserExceptionMap, path: &Path) -> Result<(), Error> {
    for (key, value) in map.iter() {
        check_storable(key, value)?;
    }
    let parent_dir = parent_dir(path);
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let mut writer = BufWriter::new(&temp_file);
    for (key, value) in map.iter() {
        writeln!(writer, "{key} {value}")?;
    }
    writer.flush()?;
    drop(writer);

    temp_file.persist(path)?;
    info!(entries = map.len(), path = %path.display(), "user exceptions saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::exceptions::ExceptionWordSets;
    use crate::core::trie::TrieError;
    use crate::loader::load_user_exceptions;

    #[test]
    fn snapshot_survives_a_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lexicon.bin");
        let lexicon = Lexicon {
            dictionary: ["თბილისი", "ღვინო"].into_iter().collect(),
            exceptions: ExceptionWordSets::new(["disharmon"], [], []),
        };
        save_compiled(&lexicon, &path).unwrap();

        let loaded = load_compiled(&path).unwrap();
        assert_eq!(loaded.dictionary.len(), 2);
        assert!(loaded.dictionary.contains("ღვინო"));
        assert!(loaded.exceptions.keeps_sh("disharmonia"));
    }

    #[test]
    fn corrupt_snapshot_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        fs::write(&path, b"\xff\xff\xff\xff\xff\xff\xff\xff\xff").unwrap();
        assert!(matches!(load_compiled(&path), Err(LoadError::Snapshot(_))));
    }

    #[test]
    fn zeroed_snapshot_is_rejected_at_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        // Decodes cleanly: an empty node list and three empty exception sets.
        fs::write(&path, [0u8; 40]).unwrap();
        assert!(matches!(
            load_compiled(&path),
            Err(LoadError::InvalidSnapshot(TrieError::MissingRoot))
        ));
    }

    #[test]
    fn user_exceptions_reload_identically() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exceptions.dat");
        let map: UserExceptionMap =
            [("didi", "დიდი"), ("gamarjoba", "გამარჯობა მეგობარო")].into_iter().collect();
        save_user_exceptions(&map, &path).unwrap();

        assert_eq!(load_user_exceptions(&path).unwrap(), map);
    }

    #[test]
    fn key_with_space_is_refused_and_file_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exceptions.dat");
        fs::write(&path, "didi დიდი\n").unwrap();

        let map: UserExceptionMap =
            [("kargi dila", "დილა მშვიდობისა"), ("didi", "დიდი")].into_iter().collect();
        let err = save_user_exceptions(&map, &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        assert_eq!(fs::read_to_string(&path).unwrap(), "didi დიდი\n");
    }

    #[test]
    fn multi_line_value_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exceptions.dat");
        let map: UserExceptionMap = [("didi", "დიდი\nპატარა")].into_iter().collect();
        let err = save_user_exceptions(&map, &path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(!path.exists());
    }
}
