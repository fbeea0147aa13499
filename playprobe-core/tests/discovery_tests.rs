use playprobe_core::*;
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn test_find_media_files_recurses_and_sorts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("old/nested"))?;

    File::create(root.join("b.avi"))?;
    File::create(root.join("a.MOV"))?;
    File::create(root.join("notes.txt"))?;
    File::create(root.join("old/c.Wmv"))?;
    File::create(root.join("old/nested/d.mkv"))?;
    File::create(root.join("old/nested/e.mp3"))?;
    // A directory with a media-like name is not a file.
    fs::create_dir(root.join("folder.avi"))?;

    let found = find_media_files(root, &[".avi", "mov", ".WMV", ".mkv"])?;

    let expected = vec![
        root.join("a.MOV"),
        root.join("b.avi"),
        root.join("old/c.Wmv"),
        root.join("old/nested/d.mkv"),
    ];
    assert_eq!(found, expected);
    Ok(())
}

#[test]
fn test_find_media_files_no_matches() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join("readme.md"))?;

    match find_media_files(dir.path(), &[".avi"]) {
        Err(CoreError::NoFilesFound) => {}
        other => panic!("expected NoFilesFound, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_find_media_files_rejects_missing_root() {
    let result = find_media_files(std::path::Path::new("/nonexistent/media/root"), &[".avi"]);
    assert!(matches!(result, Err(CoreError::PathError(_))));
}

#[test]
fn test_unreadable_subdirectory_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempdir()?;
    let root = dir.path();
    File::create(root.join("good.mp4"))?;
    let locked = root.join("locked");
    fs::create_dir(&locked)?;
    File::create(locked.join("hidden.mp4"))?;
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

    let result = find_media_files(root, &["mp4"]);
    // Restore so the tempdir can be cleaned up.
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

    // Running as root the locked directory is still readable, so only the
    // readable file is guaranteed.
    let found = result?;
    assert!(found.contains(&root.join("good.mp4")));
    Ok(())
}
