#![no_main]

use std::path::Path;

use catpath::infrastructure::{parse_tree, TreeFormat};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        let _ = parse_tree(content, TreeFormat::Json, Path::new("fuzz.json"));
        let _ = parse_tree(content, TreeFormat::Yaml, Path::new("fuzz.yaml"));
    }
});
