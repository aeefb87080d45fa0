use anyhow::{bail, Result};
use log::error;
use medialib::{FileId, FileImporter, Library, MediaFile};

/// Adds what the source holds to the library. A source that can't be read
/// counts as holding nothing.
fn load(library: &mut Library, importer: &FileImporter, source: &str) {
    let report = importer.read_report(source).unwrap_or_else(|e| {
        error!("{}", e);
        println!("Nothing loaded: {}", e);
        Default::default()
    });
    for rejected in &report.rejected {
        println!(
            "Skipped record #{} ({}): {}",
            rejected.index, rejected.fullpath, rejected.error
        );
    }
    library.add_all(report.files);
}

fn print_files(files: &[(FileId, &MediaFile)]) {
    println!("\n=========================");
    println!("{} files:", files.len());
    println!("=========================");
    for (id, file) in files {
        println!("{}: {}", id.index(), file);
    }
    println!("=========================\n");
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(command), Some(source)) = (args.next(), args.next()) else {
        bail!("Usage: medialib list <file.json> | medialib search <file.json> <term>");
    };

    let mut library = Library::new();
    load(&mut library, &FileImporter::new(), &source);

    match command.as_str() {
        "list" => print_files(&library.all()),
        "search" => {
            let Some(term) = args.next() else {
                bail!("Missing search term");
            };
            print_files(&library.search(&term));
        }
        other => bail!("Unknown command: {}", other),
    }

    Ok(())
}
