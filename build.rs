fn main() {
    // Tell cargo to recompile when the built-in catalogs change.
    // The include_dir! macro embeds data/ at compile time,
    // but cargo doesn't track non-Rust files automatically.
    println!("cargo:rerun-if-changed=data");
}
