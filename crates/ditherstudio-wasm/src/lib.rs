//! DitherStudio WASM - WebAssembly bindings for the dithering engine
//!
//! This crate exposes the ditherstudio-core engine to JavaScript/TypeScript.
//! The browser side keeps its own responsibilities: it decodes and scales the
//! image onto a canvas, extracts the RGBA buffer, and hands it over here
//! (typically from a worker so the UI thread stays responsive).
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for RGBA image buffers
//! - `process` - Dither options wrapper and the processing entry point
//!
//! # Usage
//!
//! ```typescript
//! import init, { DitherOptions, JsImageBuffer, process_image } from '@ditherstudio/wasm';
//!
//! await init();
//!
//! const image = new JsImageBuffer(width, height, imageData.data);
//! const options = new DitherOptions();
//! options.method = 'floyd';
//! options.contrast = 10;
//!
//! const result = process_image(image, options);
//! ctx.putImageData(new ImageData(result.pixels(), result.width, result.height), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod process;
mod types;

// Re-export public types
pub use process::{process_image, DitherOptions};
pub use types::JsImageBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
