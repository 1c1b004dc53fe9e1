#![allow(dead_code)]

//=====================================================================
// Utility functions to aid in accelerating testing
//=====================================================================

use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use tempfile::NamedTempFile;

use crate::api::Collisions;

// These variables hold fixture paths in a way where they are accessible
// to all tests in all files, and where the fixture is parsed once and
// reused in all tests.
lazy_static! {
    // Four-block sample file shipped with the crate
    pub static ref TEST_LXCAT_DATA: Mutex<Option<Collisions>> = Mutex::new(None);
    pub static ref TEST_LXCAT: &'static str = "test_lxcat_files/LXCat_format_test.txt";

    // For local testing against a full database download
    pub static ref LOCAL_TEST_LXCAT_DATA: Mutex<Option<Collisions>> = Mutex::new(None);
    pub static ref LOCAL_TEST_LXCAT: &'static str = "test_files/local_lxcat.txt";
}

fn load_once(cache: &Mutex<Option<Collisions>>, path: &str) -> Result<Collisions> {
    let mut data = cache
        .lock()
        .map_err(|_| anyhow::anyhow!("LXCat fixture cache lock was poisoned"))?;

    // Only parse the file if it is not already parsed
    if data.is_none() {
        let start = Instant::now();
        let collisions = Collisions::from_LXCat(path)
            .with_context(|| format!("Failed to parse LXCat fixture {}", path))?;
        println!("Time to parse {}: {:?}", path, start.elapsed());
        *data = Some(collisions);
    }
    // Otherwise, return the already parsed data
    data.clone().context("LXCat fixture cache is empty after loading")
}

pub fn get_parsed_test_file() -> Collisions {
    load_once(&TEST_LXCAT_DATA, *TEST_LXCAT).unwrap()
}

#[cfg(feature = "local")]
pub fn local_get_parsed_test_file() -> Collisions {
    load_once(&LOCAL_TEST_LXCAT_DATA, *LOCAL_TEST_LXCAT).unwrap()
}

// Write LXCat text to a temporary file which lives as long as the returned handle
pub fn write_temp_lxcat(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
