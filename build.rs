// Build script that mirrors the static page into `dist/`. The wasm bundle
// itself is produced by `wasm-pack` (see src/main.rs), which writes into
// `static/pkg` and is picked up by the next copy.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    // Copy static/ to dist/
    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if static_dir.exists() {
        let mut options = CopyOptions::new();
        options.overwrite = true;
        options.content_only = true;
        if let Err(err) = copy(static_dir, out_dir, &options) {
            println!("cargo:warning=copying static/ failed: {err}");
        }
    }
}
