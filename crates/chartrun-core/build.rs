// File: crates/chartrun-core/build.rs
// Summary: Links advapi32 on Windows; Skia's font manager reads the registry.

fn main() {
    #[cfg(target_os = "windows")]
    println!("cargo:rustc-link-lib=advapi32");
}
