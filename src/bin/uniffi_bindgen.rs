//! UniFFI bindgen CLI tool for generating language bindings.
//!
//! Generates Swift, Kotlin, Python and Ruby bindings for the recipe-book
//! library so a native host UI can drive the recipe list.
//!
//! ## Usage
//!
//! ```bash
//! cargo build --release
//! cargo run --features cli --bin uniffi-bindgen generate \
//!     --library target/release/librecipe_book.so --language swift --out-dir ./bindings
//! ```

fn main() {
    uniffi::uniffi_bindgen_main()
}
