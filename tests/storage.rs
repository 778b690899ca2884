//! File-based load/write contract: all-or-nothing reads, tagged errors.

#![cfg(feature = "std")]

use std::fs;
use std::path::PathBuf;

use zenbmp::*;

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("zenbmp-{tag}-{}.bmp", std::process::id()))
}

#[test]
fn write_then_load_roundtrip() {
    let mut img = Bitmap::new(3, 2).unwrap();
    img.set_pixel(0, 0, 255, 0, 0);
    img.set_pixel(2, 1, 0, 0, 255);

    let path = temp_path("roundtrip");
    img.write(&path).unwrap();

    let loaded = Bitmap::load(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.width(), 3);
    assert_eq!(loaded.height(), 2);
    assert_eq!(loaded.get_pixel(0, 0), Some((255, 0, 0)));
    assert_eq!(loaded.get_pixel(2, 1), Some((0, 0, 255)));
    assert_eq!(loaded.pixels(), img.pixels());
}

#[test]
fn load_missing_file() {
    let path = temp_path("does-not-exist");
    match Bitmap::load(&path) {
        Err(BmpError::StorageUnavailable { .. }) => {}
        other => panic!("expected StorageUnavailable, got {other:?}"),
    }
}

#[test]
fn load_empty_file() {
    let path = temp_path("empty");
    fs::write(&path, b"").unwrap();
    let result = Bitmap::load(&path);
    fs::remove_file(&path).unwrap();
    match result {
        Err(BmpError::EmptyFile { .. }) => {}
        other => panic!("expected EmptyFile, got {other:?}"),
    }
}

#[test]
fn load_garbage_file() {
    let path = temp_path("garbage");
    fs::write(&path, b"not a bitmap at all").unwrap();
    let result = Bitmap::load(&path);
    fs::remove_file(&path).unwrap();
    match result {
        Err(BmpError::Malformed(MalformedError::HeaderTooShort { len: 19 })) => {}
        other => panic!("expected HeaderTooShort, got {other:?}"),
    }
}

#[test]
fn write_to_missing_directory() {
    let path = std::env::temp_dir()
        .join(format!("zenbmp-no-such-dir-{}", std::process::id()))
        .join("out.bmp");
    let img = Bitmap::new(1, 1).unwrap();
    match img.write(&path) {
        Err(BmpError::WriteFailure { .. }) => {}
        other => panic!("expected WriteFailure, got {other:?}"),
    }
}
