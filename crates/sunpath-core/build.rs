// File: crates/sunpath-core/build.rs
// Summary: Links the Windows system library Skia's font manager needs.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // RegOpenKeyExW and friends, used by Skia's Windows font lookup
        println!("cargo:rustc-link-lib=advapi32");
    }
}
