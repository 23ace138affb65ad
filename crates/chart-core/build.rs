// File: crates/chart-core/build.rs
// Summary: Links the Windows system libraries Skia's font manager needs (registry access).

fn main() {
    #[cfg(target_os = "windows")]
    {
        println!("cargo:rustc-link-lib=advapi32");
    }
}
