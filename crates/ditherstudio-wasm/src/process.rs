//! Dither options wrapper and the processing entry point.

use crate::types::JsImageBuffer;
use ditherstudio_core::{ChannelMode, DitherMethod};
use wasm_bindgen::prelude::*;

/// Dither options wrapper for JavaScript.
///
/// The method is exposed under its UI-facing string name (`"threshold"`,
/// `"random"`, `"bayer"`, `"floyd"`, `"atkinson"`, `"none"`).
#[wasm_bindgen]
pub struct DitherOptions {
    inner: ditherstudio_core::DitherOptions,
}

#[wasm_bindgen]
impl DitherOptions {
    /// Create new options with default values (atkinson, contrast 0,
    /// luminance quantization)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: ditherstudio_core::DitherOptions::new(),
        }
    }

    /// Get the method name
    #[wasm_bindgen(getter)]
    pub fn method(&self) -> String {
        method_name(self.inner.method).to_string()
    }

    /// Set the method by name
    ///
    /// Throws on an unknown method name.
    #[wasm_bindgen(setter)]
    pub fn set_method(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner.method = method_from_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown dither method: {}", name)))?;
        Ok(())
    }

    /// Get the contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> i32 {
        self.inner.contrast
    }

    /// Set the contrast value (recommended range -50 to 150)
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: i32) {
        self.inner.contrast = value;
    }

    /// True when R, G and B are quantized independently instead of the
    /// default single luminance signal
    #[wasm_bindgen(getter)]
    pub fn per_channel(&self) -> bool {
        self.inner.channel_mode == ChannelMode::PerChannel
    }

    /// Switch between per-channel and luminance quantization
    #[wasm_bindgen(setter)]
    pub fn set_per_channel(&mut self, value: bool) {
        self.inner.channel_mode = if value {
            ChannelMode::PerChannel
        } else {
            ChannelMode::Luminance
        };
    }

    /// Serialize to JSON for storage
    pub fn to_json(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(value: JsValue) -> Result<DitherOptions, JsValue> {
        let inner: ditherstudio_core::DitherOptions =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DitherOptions {
    /// Get a reference to the inner options for use in process_image
    pub(crate) fn inner(&self) -> &ditherstudio_core::DitherOptions {
        &self.inner
    }
}

fn method_name(method: DitherMethod) -> &'static str {
    match method {
        DitherMethod::Threshold => "threshold",
        DitherMethod::Random => "random",
        DitherMethod::Bayer => "bayer",
        DitherMethod::Floyd => "floyd",
        DitherMethod::Atkinson => "atkinson",
        DitherMethod::None => "none",
    }
}

fn method_from_name(name: &str) -> Option<DitherMethod> {
    match name {
        "threshold" => Some(DitherMethod::Threshold),
        "random" => Some(DitherMethod::Random),
        "bayer" => Some(DitherMethod::Bayer),
        "floyd" => Some(DitherMethod::Floyd),
        "atkinson" => Some(DitherMethod::Atkinson),
        "none" => Some(DitherMethod::None),
        _ => None,
    }
}

/// Process an image with the selected dithering method.
///
/// Returns a new image of the same dimensions; the input is not modified.
/// Throws if the image has zero width or height, or if the contrast value
/// sits on the pole of the contrast curve (259).
///
/// # Example (TypeScript)
/// ```typescript
/// const options = new DitherOptions();
/// options.method = 'atkinson';
/// options.contrast = 10;
///
/// const result = process_image(image, options);
/// const pixels = result.pixels();
/// ```
#[wasm_bindgen]
pub fn process_image(image: &JsImageBuffer, options: &DitherOptions) -> Result<JsImageBuffer, JsValue> {
    let output = ditherstudio_core::process(&image.to_core(), options.inner())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsImageBuffer::from_core(output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = DitherOptions::new();
        assert_eq!(opts.method(), "atkinson");
        assert_eq!(opts.contrast(), 0);
        assert!(!opts.per_channel());
    }

    #[test]
    fn test_method_round_trip() {
        let mut opts = DitherOptions::new();
        for name in ["threshold", "random", "bayer", "floyd", "atkinson", "none"] {
            opts.set_method(name).unwrap();
            assert_eq!(opts.method(), name);
        }
    }

    #[test]
    fn test_unknown_method_rejected() {
        let mut opts = DitherOptions::new();
        assert!(opts.set_method("sierra").is_err());
        // Options keep their previous method
        assert_eq!(opts.method(), "atkinson");
    }

    #[test]
    fn test_per_channel_toggle() {
        let mut opts = DitherOptions::new();
        opts.set_per_channel(true);
        assert!(opts.per_channel());
        opts.set_per_channel(false);
        assert!(!opts.per_channel());
    }

    #[test]
    fn test_process_image_threshold() {
        // 2x1 image: dark pixel and bright pixel
        let image = JsImageBuffer::new(2, 1, vec![10, 10, 10, 255, 250, 250, 250, 128]);
        let mut opts = DitherOptions::new();
        opts.set_method("threshold").unwrap();

        let result = process_image(&image, &opts).unwrap();
        assert_eq!(result.width(), 2);
        assert_eq!(result.height(), 1);
        assert_eq!(result.pixels(), vec![0, 0, 0, 255, 255, 255, 255, 128]);
    }

    #[test]
    fn test_process_image_does_not_modify_input() {
        let pixels = vec![100, 150, 200, 255];
        let image = JsImageBuffer::new(1, 1, pixels.clone());
        let opts = DitherOptions::new();

        let _result = process_image(&image, &opts).unwrap();
        assert_eq!(image.pixels(), pixels);
    }

    #[test]
    fn test_process_image_rejects_contrast_pole() {
        let image = JsImageBuffer::new(1, 1, vec![128, 128, 128, 255]);
        let mut opts = DitherOptions::new();
        opts.set_contrast(259);
        assert!(process_image(&image, &opts).is_err());
    }

    #[test]
    fn test_process_image_rejects_empty_image() {
        let image = JsImageBuffer::new(0, 0, vec![]);
        let opts = DitherOptions::new();
        assert!(process_image(&image, &opts).is_err());
    }
}

/// WASM-specific tests that require JsValue.
///
/// These tests exercise the `Result<T, JsValue>` surface and the JSON
/// conversions, which only exist on wasm32 targets. Use `wasm-pack test`
/// to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Serialize;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Options shape as the UI would persist it.
    #[derive(Serialize)]
    struct TestOptions {
        method: &'static str,
        contrast: i32,
        channel_mode: &'static str,
    }

    #[wasm_bindgen_test]
    fn test_process_image_threshold_in_browser() {
        let image = JsImageBuffer::new(2, 1, vec![10, 10, 10, 255, 250, 250, 250, 128]);
        let mut opts = DitherOptions::new();
        opts.set_method("threshold").unwrap();

        let result = process_image(&image, &opts).unwrap();
        assert_eq!(result.pixels(), vec![0, 0, 0, 255, 255, 255, 255, 128]);
    }

    #[wasm_bindgen_test]
    fn test_process_image_random_in_browser() {
        // The random method pulls entropy through the js getrandom backend;
        // output must still be binary with alpha intact
        let image = JsImageBuffer::new(4, 4, vec![128, 128, 128, 255].repeat(16));
        let mut opts = DitherOptions::new();
        opts.set_method("random").unwrap();

        let result = process_image(&image, &opts).unwrap();
        for px in result.pixels().chunks_exact(4) {
            assert!(px[0] == 0 || px[0] == 255);
            assert_eq!(px[3], 255);
        }
    }

    #[wasm_bindgen_test]
    fn test_process_image_contrast_pole_throws() {
        let image = JsImageBuffer::new(1, 1, vec![128, 128, 128, 255]);
        let mut opts = DitherOptions::new();
        opts.set_contrast(259);
        assert!(process_image(&image, &opts).is_err());
    }

    #[wasm_bindgen_test]
    fn test_options_from_json() {
        let value = serde_wasm_bindgen::to_value(&TestOptions {
            method: "bayer",
            contrast: 25,
            channel_mode: "perchannel",
        })
        .unwrap();

        let opts = DitherOptions::from_json(value).unwrap();
        assert_eq!(opts.method(), "bayer");
        assert_eq!(opts.contrast(), 25);
        assert!(opts.per_channel());
    }

    #[wasm_bindgen_test]
    fn test_options_json_round_trip() {
        let mut opts = DitherOptions::new();
        opts.set_method("floyd").unwrap();
        opts.set_contrast(-10);

        let back = DitherOptions::from_json(opts.to_json().unwrap()).unwrap();
        assert_eq!(back.method(), "floyd");
        assert_eq!(back.contrast(), -10);
        assert!(!back.per_channel());
    }
}
