use std::path::PathBuf;

use dynval_synth::{Config, render_module};

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let module = render_module(&Config::default())
        .unwrap_or_else(|err| panic!("dispatch table synthesis failed: {err}"));

    let path = PathBuf::from(out_dir).join("dispatch.rs");
    std::fs::write(&path, module)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", path.display()));

    println!("cargo::rerun-if-changed=build.rs");
}
