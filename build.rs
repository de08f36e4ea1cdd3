// Assembles the deployable site under dist/: everything in static/, plus the
// wasm-pack output once it has been built into static/pkg.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let out_dir = Path::new("dist");
    if out_dir.exists() {
        fs::remove_dir_all(out_dir).ok();
    }
    fs::create_dir_all(out_dir).ok();

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=static/ missing – nothing to assemble into dist/");
        return;
    }

    let mut options = CopyOptions::new();
    options.content_only = true;
    options.overwrite = true;
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to assemble dist/: {err}");
    }

    if !static_dir.join("pkg").exists() {
        println!("cargo:warning=static/pkg missing – run `cargo run` (or wasm-pack) to build the wasm bundle");
    }
}
