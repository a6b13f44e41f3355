//! Build script - copies the linker script into the output directory
//! so that the linker can find it at link time. Host builds (the default
//! feature set) never touch it.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // Only the embedded binary links against memory.x.
    if env::var("CARGO_FEATURE_EMBEDDED").is_ok() {
        let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

        fs::copy("memory.x", out_dir.join("memory.x")).unwrap();
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed=memory.x");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
