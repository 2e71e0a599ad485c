//! Entry point for the WASM application

pub fn main() {
    poetry_music::run();
}
