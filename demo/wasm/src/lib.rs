use js_sys::{Array, Float64Array};
use wasm_bindgen::prelude::*;

use gauss_gradient::{CssStyle, GaussGradient, GradientConfig, GradientError};

mod convert;

use convert::{shape_from_tag, shape_list, stop_count_from_f64};

fn js_err(e: GradientError) -> JsError {
    JsError::new(&e.to_string())
}

/// `[descriptor, Float64Array of raw weights]` for the frontend.
fn to_js_pair(gradient: GaussGradient) -> Array {
    let (descriptor, weights) = gradient.into_parts();
    let pair = Array::new();
    pair.push(&JsValue::from_str(&descriptor));
    pair.push(&Float64Array::from(weights.as_slice()));
    pair
}

/// Mix two `#rrggbb` colors; `weight` is the percentage of `color1`.
#[wasm_bindgen]
pub fn mix(color1: &str, color2: &str, weight: f64) -> Result<String, JsError> {
    gauss_gradient::mix(color1, color2, weight).map_err(js_err)
}

/// Raw Gaussian density samples, one per stop.
#[wasm_bindgen]
pub fn sample_weights(stop_count: f64, mean: f64, std_dev: f64) -> Result<Float64Array, JsError> {
    let n = stop_count_from_f64(stop_count).map_err(js_err)?;
    let weights = gauss_gradient::sample_weights(n, mean, std_dev).map_err(js_err)?;
    Ok(Float64Array::from(weights.as_slice()))
}

/// Color gradient as `[descriptor, weights]`. `shape` defaults to
/// `radial-gradient`.
#[wasm_bindgen]
pub fn build_color_gradient(
    start_color: &str,
    end_color: &str,
    stop_count: f64,
    mean: f64,
    std_dev: f64,
    shape: Option<String>,
) -> Result<Array, JsError> {
    let n = stop_count_from_f64(stop_count).map_err(js_err)?;
    let shape = shape_from_tag(shape).map_err(js_err)?;
    gauss_gradient::build_color_gradient(start_color, end_color, n, mean, std_dev, shape)
        .map(to_js_pair)
        .map_err(js_err)
}

/// Opacity mask gradient as `[descriptor, weights]`.
#[wasm_bindgen]
pub fn build_mask_gradient(
    stop_count: f64,
    mean: f64,
    std_dev: f64,
    shape: Option<String>,
) -> Result<Array, JsError> {
    let n = stop_count_from_f64(stop_count).map_err(js_err)?;
    let shape = shape_from_tag(shape).map_err(js_err)?;
    gauss_gradient::build_mask_gradient(n, mean, std_dev, shape)
        .map(to_js_pair)
        .map_err(js_err)
}

/// CSS declaration block for a TOML configuration (empty string = defaults).
#[wasm_bindgen]
pub fn css_from_config(toml: &str, with_mask: bool) -> Result<String, JsError> {
    let config =
        GradientConfig::from_toml_str(toml).map_err(|e| JsError::new(&e.to_string()))?;
    let style = if with_mask {
        CssStyle::with_mask(&config)
    } else {
        CssStyle::from_config(&config)
    };
    style.map(|s| s.to_string()).map_err(js_err)
}

/// Get the library version string.
#[wasm_bindgen]
pub fn version() -> String {
    format!("gauss-gradient {}", env!("CARGO_PKG_VERSION"))
}

/// Get list of available shape tags.
#[wasm_bindgen]
pub fn shape_names() -> String {
    shape_list()
}
