use std::fs::File;
use std::path::Path;

use fitswap_core::config::PlaceholderConfig;
use fitswap_core::upload::{export_image, FileUploader, PlaceholderUploader, Uploader};
use fitswap_core::{FitSwapError, ImageRef, PhotoSlot};
use tempfile::tempdir;

#[test]
fn test_file_uploader_references_existing_image() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("customer.JPG");
    File::create(&path).unwrap();

    let image = FileUploader.upload(PhotoSlot::Customer, &path).unwrap();
    let local = image.local_path().unwrap();
    assert_eq!(local, std::fs::canonicalize(&path).unwrap());
}

#[test]
fn test_file_uploader_rejects_non_image_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes.txt");
    File::create(&path).unwrap();

    let err = FileUploader.upload(PhotoSlot::Outfit, &path).unwrap_err();
    assert!(matches!(err, FitSwapError::UnsupportedUpload { .. }));
}

#[test]
fn test_file_uploader_rejects_missing_file() {
    let err = FileUploader
        .upload(PhotoSlot::Outfit, Path::new("/nonexistent/outfit.png"))
        .unwrap_err();
    assert!(matches!(err, FitSwapError::UploadFailed(_)));
}

#[test]
fn test_file_uploader_rejects_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("album.png");
    std::fs::create_dir(&path).unwrap();

    let err = FileUploader.upload(PhotoSlot::Customer, &path).unwrap_err();
    assert!(matches!(err, FitSwapError::UnsupportedUpload { .. }));
}

#[test]
fn test_placeholder_uploader_uses_configured_refs() {
    let placeholders = PlaceholderConfig {
        customer: ImageRef::from("/p/customer"),
        outfit: ImageRef::from("/p/outfit"),
        result: ImageRef::from("/p/result"),
    };
    let uploader = PlaceholderUploader::new(placeholders);
    let any = Path::new("ignored.bin");
    assert_eq!(
        uploader.upload(PhotoSlot::Customer, any).unwrap().as_str(),
        "/p/customer"
    );
    assert_eq!(
        uploader.upload(PhotoSlot::Outfit, any).unwrap().as_str(),
        "/p/outfit"
    );
}

#[cfg(target_os = "linux")]
#[test]
fn test_file_uploader_rejects_non_utf8_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempdir().unwrap();
    let album = dir.path().join(OsStr::from_bytes(b"album-\xff"));
    std::fs::create_dir(&album).unwrap();
    let path = album.join("customer.png");
    File::create(&path).unwrap();

    let err = FileUploader.upload(PhotoSlot::Customer, &path).unwrap_err();
    match err {
        FitSwapError::UnsupportedUpload { path: rejected, reason } => {
            assert_eq!(rejected, path);
            assert!(reason.contains("UTF-8"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_export_copies_local_result() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("result.png");
    std::fs::write(&source, b"pixels").unwrap();
    let dest = dir.path().join("saved.png");

    let bytes = export_image(&ImageRef::from_path(&source), &dest).unwrap();
    assert_eq!(bytes, 6);
    assert_eq!(std::fs::read(&dest).unwrap(), b"pixels");
}

#[test]
fn test_export_rejects_placeholder_result() {
    let dir = tempdir().unwrap();
    let dest = dir.path().join("saved.png");

    let err = export_image(&ImageRef::from("/api/placeholder/400/600"), &dest).unwrap_err();
    assert!(matches!(err, FitSwapError::NotLocalImage(_)));
    assert!(!dest.exists());
}
