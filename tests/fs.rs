#![cfg(feature = "std")]

use tempfile::tempdir;
use zenbmp24::fs::{self, FileError};
use zenbmp24::{BitmapError, Raster};

#[test]
fn save_then_load_bmp() -> Result<(), BitmapError> {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("image.bmp");

    let mut raster = Raster::filled(5, 3, [10, 20, 30])?;
    raster.set_pixel(4, 2, [200, 100, 50]);
    fs::save_bmp(&path, &raster)?;

    assert!(fs::exists(&path));
    assert_eq!(fs::file_size(&path)?, 54 + 16 * 3);
    assert_eq!(fs::load_bmp(&path)?, raster);
    Ok(())
}

#[test]
fn load_missing_file_is_not_found() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("missing.bmp");
    assert!(!fs::exists(&path));
    match fs::load_bmp(&path) {
        Err(BitmapError::File(FileError::NotFound { path: p, .. })) => assert_eq!(p, path),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn load_non_bmp_is_invalid_format() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("text.bmp");
    fs::write_file(&path, b"definitely not a bitmap, just text").unwrap();
    assert!(matches!(
        fs::load_bmp(&path),
        Err(BitmapError::InvalidFormat(_))
    ));
}

#[test]
fn write_read_append() -> Result<(), FileError> {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("log.txt");

    fs::append_file(&path, b"first\n")?;
    fs::append_file(&path, b"second\n")?;
    assert_eq!(fs::read_file(&path)?, b"first\nsecond\n");

    fs::write_file(&path, b"replaced")?;
    assert_eq!(fs::read_file(&path)?, b"replaced");
    assert_eq!(fs::file_size(&path)?, 8);
    Ok(())
}

#[test]
fn copy_and_merge() -> Result<(), FileError> {
    let dir = tempdir().expect("temp dir");
    let a = dir.path().join("a.bin");
    let b = dir.path().join("b.bin");
    let copy = dir.path().join("copy.bin");
    let merged = dir.path().join("merged.bin");

    // Larger than one copy chunk.
    let big: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8).collect();
    fs::write_file(&a, &big)?;
    fs::write_file(&b, b"tail")?;

    assert_eq!(fs::copy_file(&a, &copy)?, big.len() as u64);
    assert_eq!(fs::read_file(&copy)?, big);

    assert_eq!(fs::merge_files(&merged, &a, &b)?, big.len() as u64 + 4);
    let out = fs::read_file(&merged)?;
    assert_eq!(&out[..big.len()], &big[..]);
    assert_eq!(&out[big.len()..], b"tail");
    Ok(())
}

#[test]
fn copy_missing_source_is_not_found() {
    let dir = tempdir().expect("temp dir");
    let err = fs::copy_file(dir.path().join("nope"), dir.path().join("dest")).unwrap_err();
    assert!(matches!(err, FileError::NotFound { .. }));
    assert_eq!(err.path(), dir.path().join("nope"));
}

#[test]
fn merge_missing_input_is_not_found() {
    let dir = tempdir().expect("temp dir");
    let a = dir.path().join("a.bin");
    fs::write_file(&a, b"x").unwrap();
    let err = fs::merge_files(dir.path().join("out"), &a, dir.path().join("b.bin")).unwrap_err();
    assert!(matches!(err, FileError::NotFound { .. }));
}

#[test]
fn write_into_missing_directory_is_open_failed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("no/such/dir/file.bin");
    assert!(matches!(
        fs::write_file(&path, b"data"),
        Err(FileError::OpenFailed { .. })
    ));
}
