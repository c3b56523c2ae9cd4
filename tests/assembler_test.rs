use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use mkcproj::artifact::{ArtifactKind, DirectoryKind};
use mkcproj::assembler::{Assembler, AssemblyState};
use mkcproj::error::Error;
use mkcproj::paths::new_file_path;

mod common;

use common::{foo_metadata, template_body, MemoryFilesystem};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
}

#[test_log::test]
fn test_assembles_every_directory_and_artifact() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::with_templates(Path::new("/tpl"));
    let mut assembler = Assembler::new(&fs, &metadata).date(date());

    assert_eq!(assembler.state(), AssemblyState::Init);
    let report = assembler.assemble().unwrap();
    assert_eq!(assembler.state(), AssemblyState::Done);

    assert_eq!(report.directories.len(), 6);
    assert_eq!(report.files.len(), 25);
    for dir in [
        "/prj/Foo",
        "/prj/Foo/src",
        "/prj/Foo/include",
        "/prj/Foo/lib",
        "/prj/Foo/man",
        "/prj/Foo/doc",
    ] {
        assert!(fs.dirs.borrow().contains(Path::new(dir)), "{dir} missing");
    }

    let header = fs.files.borrow()[Path::new("/prj/Foo/include/Foo.h")].clone();
    assert!(header.starts_with("/**\n * Foo.h\n"));
    assert!(header.contains(" * Date: 09/03/2024\n"));
    assert!(header.ends_with(&template_body(ArtifactKind::Header)));
}

#[test]
fn test_directories_are_created_in_order() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::with_templates(Path::new("/tpl"));
    let report = Assembler::new(&fs, &metadata).assemble().unwrap();

    let expected: Vec<PathBuf> = ["", "src", "include", "lib", "man", "doc"]
        .iter()
        .map(|sub| match *sub {
            "" => PathBuf::from("/prj/Foo"),
            sub => Path::new("/prj/Foo").join(sub),
        })
        .collect();
    assert_eq!(report.directories, expected);
}

#[test]
fn test_aborts_on_first_directory_failure() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem {
        fail_dir: Some(PathBuf::from("/prj/Foo/include")),
        ..MemoryFilesystem::with_templates(Path::new("/tpl"))
    };
    let mut assembler = Assembler::new(&fs, &metadata);

    let err = assembler.assemble().unwrap_err();
    assert!(matches!(err, Error::DirectoryCreateError { kind: DirectoryKind::Include, .. }));
    assert_eq!(err.code(), -3);
    assert_eq!(assembler.state(), AssemblyState::Aborted);

    let dirs = fs.dirs.borrow();
    assert!(dirs.contains(Path::new("/prj/Foo")));
    assert!(dirs.contains(Path::new("/prj/Foo/src")));
    assert!(!dirs.contains(Path::new("/prj/Foo/lib")));
    assert!(fs.written_under(Path::new("/prj")).is_empty());
}

#[test]
fn test_aborts_on_missing_template() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::with_templates(Path::new("/tpl"));
    fs.files.borrow_mut().remove(Path::new("/tpl/COPYRIGHT"));
    let mut assembler = Assembler::new(&fs, &metadata);

    let err = assembler.assemble().unwrap_err();
    match &err {
        Error::FileIoError { kind, path, .. } => {
            assert_eq!(*kind, ArtifactKind::License);
            assert_eq!(path, Path::new("/tpl/COPYRIGHT"));
        }
        other => panic!("Expected FileIoError, got {other:?}"),
    }
    assert_eq!(err.code(), -24);

    // Everything before the license file was written, nothing after it.
    assert!(fs.files.borrow().contains_key(Path::new("/prj/Foo/ChangeLog")));
    assert!(!fs.files.borrow().contains_key(Path::new("/prj/Foo/NEWS")));
    assert_eq!(fs.written_under(Path::new("/prj")).len(), ArtifactKind::License.index());
}

#[test]
fn test_write_failure_carries_destination() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem {
        fail_write: Some(PathBuf::from("/prj/Foo/man/Foo.1")),
        ..MemoryFilesystem::with_templates(Path::new("/tpl"))
    };

    let err = Assembler::new(&fs, &metadata).assemble().unwrap_err();
    assert!(matches!(
        &err,
        Error::FileIoError { kind: ArtifactKind::ManPage, path, .. }
            if path == Path::new("/prj/Foo/man/Foo.1")
    ));
    assert_eq!(err.code(), -31);
}

#[test]
fn test_existing_project_is_refused_without_force() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::with_templates(Path::new("/tpl"));
    fs.dirs.borrow_mut().insert(PathBuf::from("/prj/Foo"));

    let err = Assembler::new(&fs, &metadata).assemble().unwrap_err();
    assert!(matches!(err, Error::DestinationExists { .. }));
    assert_eq!(fs.dirs.borrow().len(), 1);
    assert!(fs.written_under(Path::new("/prj")).is_empty());
}

#[test]
fn test_force_reuses_directories_and_overwrites_files() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::with_templates(Path::new("/tpl"));
    fs.dirs.borrow_mut().insert(PathBuf::from("/prj/Foo"));
    fs.dirs.borrow_mut().insert(PathBuf::from("/prj/Foo/src"));
    let stale = new_file_path(ArtifactKind::Source, Path::new("/prj/Foo"), "Foo");
    fs.files.borrow_mut().insert(stale.clone(), "stale".to_string());

    let mut assembler = Assembler::new(&fs, &metadata).force(true);
    assembler.assemble().unwrap();

    assert_eq!(assembler.state(), AssemblyState::Done);
    assert!(fs.files.borrow()[&stale].ends_with(&template_body(ArtifactKind::Source)));
}

#[test]
fn test_plan_touches_nothing() {
    let metadata = foo_metadata(Path::new("/tpl"), Path::new("/prj"));
    let fs = MemoryFilesystem::default();
    let assembler = Assembler::new(&fs, &metadata);

    let plan = assembler.plan();
    assert_eq!(plan.len(), 25);
    assert_eq!(plan[0].new_file_path, PathBuf::from("/prj/Foo/include/Foo.h"));
    assert_eq!(plan[24].new_file_path, PathBuf::from("/prj/Foo/man/Foo.1"));
    assert_eq!(
        assembler.plan_directories()[0],
        (DirectoryKind::Project, PathBuf::from("/prj/Foo"))
    );
    assert!(fs.dirs.borrow().is_empty());
    assert!(fs.files.borrow().is_empty());
}
