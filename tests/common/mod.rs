#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Float comparison for accumulated costs.
pub const EPS: f64 = 1e-9;

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {}, got {}",
        expected,
        actual
    );
}

/// A short government-style passage with Thai and international numbers.
pub const SAMPLE_DOC: &str = "ประกาศกระทรวง ฉบับที่ ๑๒ พ.ศ. ๒๕๖๗\n\
งบประมาณ ๑,๒๕๐,๐๐๐ บาท ตามมาตรา 34 วรรค 2\n\
ให้ใช้บังคับตั้งแต่วันที่ ๑ มกราคม ๒๕๖๘ เป็นต้นไป\n";

/// Temp directory holding one document; dropped with the struct.
pub struct DocFixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl DocFixture {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("document.txt");
        fs::write(&path, content).expect("Failed to write document");
        Self { dir, path }
    }

    pub fn sample() -> Self {
        Self::new(SAMPLE_DOC)
    }

    pub fn out_dir(&self) -> PathBuf {
        self.dir.path().join("out")
    }
}
