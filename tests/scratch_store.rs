use assert_fs::TempDir;
use ediff::domain::areas::scratch::ScratchStore;
use ediff::domain::objects::location::SourceLocation;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
#[case::plain("foo\n")]
#[case::empty("")]
#[case::multi_byte("héllo → 日本語\nsecond line\n")]
#[tokio::test]
async fn staged_content_reads_back_byte_identical(
    #[case] content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());
    let origin = SourceLocation::file("/repo/fileA.txt");

    let path = store.stage(content, &origin, "original_").await?;

    assert_eq!(std::fs::read(&path)?, content.as_bytes());

    Ok(())
}

#[tokio::test]
async fn scratch_names_carry_prefix_base_token_and_extension()
-> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());
    let origin = SourceLocation::file("/repo/src/fileA.txt");

    let path = store.stage("foo\n", &origin, "original_").await?;

    let name = path.file_name().expect("staged file name").to_string_lossy();
    assert!(
        predicate::str::is_match(r"^original_fileA_\d+\.txt$")?.eval(name.as_ref()),
        "unexpected scratch name: {name}"
    );
    assert_eq!(path.parent(), Some(dir.path()));

    Ok(())
}

#[tokio::test]
async fn cleanup_removes_every_staged_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());

    let original = store
        .stage("foo\n", &SourceLocation::file("/repo/fileA.txt"), "original_")
        .await?;
    let modified = store
        .stage("bar\n", &SourceLocation::file("/repo/fileB.txt"), "modified_")
        .await?;
    assert_eq!(common::scratch_entry_count(dir.path()), 2);

    store.cleanup().await;

    assert!(!original.exists());
    assert!(!modified.exists());
    assert!(store.tracked_paths().is_empty());

    Ok(())
}

#[tokio::test]
async fn cleanup_with_nothing_staged_is_a_noop() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());

    store
        .stage("foo\n", &SourceLocation::file("/repo/fileA.txt"), "original_")
        .await?;
    store.cleanup().await;

    // Second sweep has nothing left to remove and must not fail.
    store.cleanup().await;

    assert!(store.tracked_paths().is_empty());
    assert_eq!(common::scratch_entry_count(dir.path()), 0);

    Ok(())
}

#[tokio::test]
async fn a_missing_file_does_not_stop_the_sweep() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());

    let original = store
        .stage("foo\n", &SourceLocation::file("/repo/fileA.txt"), "original_")
        .await?;
    let modified = store
        .stage("bar\n", &SourceLocation::file("/repo/fileB.txt"), "modified_")
        .await?;

    // Something else removed the first file while the tool was running.
    std::fs::remove_file(&original)?;

    store.cleanup().await;

    assert!(!modified.exists());
    assert!(store.tracked_paths().is_empty());

    Ok(())
}

#[tokio::test]
async fn dropping_the_store_sweeps_leftover_files() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let store = ScratchStore::in_dir(dir.path());

    let staged = store
        .stage("foo\n", &SourceLocation::file("/repo/fileA.txt"), "original_")
        .await?;
    assert!(staged.exists());

    drop(store);

    assert!(!staged.exists());

    Ok(())
}
