use medialib::importer::SourceError;
use medialib::{
    FileImporter, ImportError, Library, MediaFile, MediaItem, Metadata, ValidationError,
};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(format!("./tests/fixtures/{}", name))
}

fn expected_media() -> Vec<MediaFile> {
    vec![
        MediaFile::image(
            "image1",
            "/346/to",
            "cre1",
            "res1",
            vec![
                Metadata::new("creator", "cre1"),
                Metadata::new("resolution", "res1"),
            ],
        ),
        MediaFile::image(
            "image2",
            "/346/to",
            "cre2",
            "res2",
            vec![
                Metadata::new("creator", "cre2"),
                Metadata::new("resolution", "res2"),
            ],
        ),
        MediaFile::video(
            "video3",
            "/346/to",
            "cre3",
            "res3",
            "run3",
            vec![
                Metadata::new("creator", "cre3"),
                Metadata::new("resolution", "res3"),
                Metadata::new("runtime", "run3"),
            ],
        ),
    ]
}

#[test]
fn read_file() {
    let importer = FileImporter::without_home_dir();
    let files = importer.read(fixture("media.json")).unwrap();
    assert_eq!(files, expected_media());
}

#[test]
fn read_from_home_dir() {
    let home = tempfile::tempdir().unwrap();
    std::fs::copy(fixture("media.json"), home.path().join("test.json")).unwrap();

    let importer = FileImporter::with_home_dir(home.path());
    let files = importer.read("~/test.json").unwrap();
    assert_eq!(files, expected_media());
}

#[test]
fn missing_file_fails_the_whole_read() {
    let importer = FileImporter::without_home_dir();
    let result = importer.read(fixture("doesntexist.json"));
    assert!(matches!(
        result,
        Err(ImportError::InvalidJsonFile {
            source: SourceError::IO(_),
            ..
        })
    ));

    let files = result.unwrap_or_default();
    assert!(files.is_empty());
}

#[test]
fn home_path_without_home_dir_is_taken_literally() {
    let importer = FileImporter::without_home_dir();
    assert!(importer.read("~/surely-not-here-medialib.json").is_err());
}

#[test]
fn malformed_json_fails_the_whole_read() {
    let importer = FileImporter::without_home_dir();
    for name in ["malformed.json", "wrong_shape.json"] {
        let result = importer.read(fixture(name));
        assert!(
            matches!(
                result,
                Err(ImportError::InvalidJsonFile {
                    source: SourceError::SerdeJson(_),
                    ..
                })
            ),
            "{} should not decode",
            name
        );
    }
}

#[test]
fn bad_records_are_skipped() {
    let importer = FileImporter::without_home_dir();
    let report = importer.read_report(fixture("mixed.json")).unwrap();

    let names: Vec<&str> = report.files.iter().map(|f| f.filename()).collect();
    assert_eq!(names, vec!["beach", "song"]);
    assert!(!report.is_clean());

    let rejected: Vec<(usize, &ValidationError)> = report
        .rejected
        .iter()
        .map(|r| (r.index, &r.error))
        .collect();
    assert_eq!(
        rejected,
        vec![
            (
                1,
                &ValidationError::InvalidMetadataForType {
                    file_type: "image".to_owned(),
                    field: "resolution".to_owned(),
                }
            ),
            (2, &ValidationError::InvalidType("hologram".to_owned())),
            (
                3,
                &ValidationError::InvalidMetadataForType {
                    file_type: "document".to_owned(),
                    field: "creator".to_owned(),
                }
            ),
        ]
    );
    assert_eq!(report.rejected[0].fullpath, "/media/pics/blurry");

    let song = &report.files[1];
    assert_eq!(song.path(), "~/music");
    assert_eq!(song.creator(), "dee");
    assert_eq!(
        song.metadata(),
        &[
            Metadata::new("Creator", "Dee"),
            Metadata::new("runtime", "3:45"),
            Metadata::new("genre", "jazz"),
        ]
    );
}

#[test]
fn one_good_one_bad_record() {
    let json = br#"[
        {"fullpath": "/a/b/image1", "type": "image", "metadata": {"creator": "cre1", "resolution": "res1"}},
        {"fullpath": "/a/b/image2", "type": "image", "metadata": {"creator": "cre2"}}
    ]"#;

    let report = FileImporter::from_slice(json).unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].filename(), "image1");
    assert_eq!(report.rejected.len(), 1);
}

#[test]
fn empty_source() {
    let report = FileImporter::from_slice(b"[]").unwrap();
    assert!(report.files.is_empty());
    assert!(report.is_clean());

    assert!(FileImporter::from_slice(b"").is_err());
    assert!(FileImporter::from_slice(b"{}").is_err());
}

#[test]
fn import_then_search() {
    let importer = FileImporter::without_home_dir();
    let files = importer.read(fixture("scenario.json")).unwrap();

    let mut library = Library::new();
    library.add_all(files.clone());
    assert_eq!(library.count(), 2);

    let by_value = library.search("cre1");
    assert_eq!(by_value.len(), 1);
    assert_eq!(by_value[0].1, &files[0]);
    assert_eq!(by_value[0].1.filename(), "image1");

    let by_keyword: Vec<&MediaFile> = library
        .search("creator")
        .into_iter()
        .map(|(_, f)| f)
        .collect();
    assert_eq!(by_keyword, vec![&files[0], &files[1]]);
}
