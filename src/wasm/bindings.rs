//! JavaScript bindings for LexoRank core types

use crate::rank::{
    format_position, generate_ranks, parse_position, Bucket, IntervalSplitter, Position,
};
use wasm_bindgen::prelude::*;

/// JavaScript-friendly wrapper for Position
#[wasm_bindgen]
pub struct WasmPosition {
    inner: Position,
}

#[wasm_bindgen]
impl WasmPosition {
    /// Parse a rank from its `bucket|major[:minor]` text
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> Result<WasmPosition, JsValue> {
        parse_position(text)
            .map(|inner| Self { inner })
            .map_err(|e| JsValue::from_str(&format!("Invalid rank: {}", e)))
    }

    /// Middle rank of an empty bucket
    #[wasm_bindgen(js_name = initial)]
    pub fn initial(bucket: u8) -> Result<WasmPosition, JsValue> {
        let bucket = Bucket::new(bucket)
            .ok_or_else(|| JsValue::from_str(&format!("Invalid bucket: {}", bucket)))?;
        Ok(Self {
            inner: Position::initial(bucket),
        })
    }

    /// Get the bucket number
    #[wasm_bindgen(js_name = getBucket)]
    pub fn get_bucket(&self) -> u8 {
        self.inner.bucket().value()
    }

    /// Get the major string
    #[wasm_bindgen(js_name = getMajor)]
    pub fn get_major(&self) -> String {
        self.inner.major().to_string()
    }

    /// Get the minor string, including its separator
    #[wasm_bindgen(js_name = getMinor)]
    pub fn get_minor(&self) -> Option<String> {
        self.inner.minor().map(str::to_string)
    }

    /// A rank strictly between this one and `other`
    #[wasm_bindgen(js_name = between)]
    pub fn between(&self, other: &WasmPosition) -> Result<WasmPosition, JsValue> {
        self.inner
            .between(&other.inner)
            .map(|inner| Self { inner })
            .map_err(|e| JsValue::from_str(&format!("Rank generation failed: {}", e)))
    }

    /// Render as `bucket|major[:minor]`
    #[wasm_bindgen(js_name = toString)]
    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> String {
        format_position(&self.inner)
    }
}

/// Generate `n` ranks between two optional rank strings
///
/// Returns a JSON array of formatted ranks. `defaultBucket` applies only when
/// both bounds are absent.
#[wasm_bindgen(js_name = generateRanks)]
pub fn generate_ranks_js(
    lower: Option<String>,
    upper: Option<String>,
    n: usize,
    default_bucket: Option<u8>,
) -> Result<String, JsValue> {
    let parse = |text: Option<String>| -> Result<Option<Position>, JsValue> {
        text.map(|t| parse_position(&t))
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("Invalid rank: {}", e)))
    };
    let lower = parse(lower)?;
    let upper = parse(upper)?;

    let ranks = match default_bucket {
        Some(b) => {
            let bucket = Bucket::new(b)
                .ok_or_else(|| JsValue::from_str(&format!("Invalid bucket: {}", b)))?;
            IntervalSplitter::new(bucket).generate(lower.as_ref(), upper.as_ref(), n)
        }
        None => generate_ranks(lower.as_ref(), upper.as_ref(), n),
    }
    .map_err(|e| JsValue::from_str(&format!("Rank generation failed: {}", e)))?;

    serde_json::to_string(&ranks)
        .map_err(|e| JsValue::from_str(&format!("JSON serialization failed: {}", e)))
}
