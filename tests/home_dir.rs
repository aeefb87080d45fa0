//! `FileImporter::new` reads the environment, so these run in their own
//! test binary, inside a single test, to keep `HOME` changes from racing.

use medialib::importer::SourceError;
use medialib::{FileImporter, ImportError};
use std::env;

#[test]
fn default_importer_expands_home() {
    let home = tempfile::tempdir().unwrap();
    std::fs::copy("./tests/fixtures/media.json", home.path().join("test.json")).unwrap();

    // Step 1: `~` follows HOME.
    env::set_var("HOME", home.path());
    let files = FileImporter::new().read("~/test.json").unwrap();
    assert_eq!(files.len(), 3);

    // Step 2: without HOME, `~` is still expanded through the user database
    // instead of being used as a literal directory name.
    env::remove_var("HOME");
    let result = FileImporter::new().read("~/medialib-missing.json");
    match result {
        Err(ImportError::InvalidJsonFile {
            origin,
            source: SourceError::IO(_),
        }) => assert!(!origin.starts_with('~'), "unexpanded origin {}", origin),
        other => panic!("unexpected result: {:?}", other.map(|f| f.len())),
    }
}
