//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` locally so the page effects can be previewed.

use std::process::{Command, Stdio};
use std::{env, thread, time::Duration};

const PORT: &str = "8000";

fn main() {
    // Only meaningful on non-wasm targets.
    if env::var("TARGET").unwrap_or_default() == "wasm32-unknown-unknown" {
        return;
    }

    // 1. Compile the effects crate to wasm via wasm-pack into static/pkg
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the page may load stale effects.");
        }
    }

    // 2. Serve `static/` for local preview
    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let server = Command::new("python3")
        .args(["-m", "http.server", PORT, "--bind", "127.0.0.1", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(err) = server {
        eprintln!("failed to start http server: {err}");
        std::process::exit(1);
    }

    // Keep process alive
    loop {
        thread::sleep(Duration::from_secs(60));
    }
}
