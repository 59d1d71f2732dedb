use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top level of a strip-packing solution document.
///
/// Placement numerals deserialize straight from their JSON textual
/// representation into `Decimal` (serde_json `arbitrary_precision`), never
/// through an intermediate binary float.
#[derive(Debug, Clone, Deserialize)]
pub struct SolutionDoc {
    pub items: Vec<ItemSpec>,
    pub solution: Solution,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemSpec {
    pub demand: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Solution {
    pub layout: Layout,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Layout {
    pub placed_items: Vec<PlacedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlacedItem {
    pub transformation: Transformation,
}

/// Placement transform: translation in layout units, rotation in degrees.
#[derive(Debug, Clone, Deserialize)]
pub struct Transformation {
    pub translation: [Decimal; 2],
    pub rotation: Decimal,
}

impl SolutionDoc {
    /// Demand of the first item spec, which sizes and labels the output rows.
    pub fn demand(&self) -> Option<u64> {
        self.items.first().map(|item| item.demand)
    }
}

/// One submission row. All fields are already-rendered strings so the CSV
/// layer never touches a numeric type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRow {
    pub id: String,
    pub x: String,
    pub y: String,
    pub deg: String,
}

/// Explicit formatting configuration, passed where needed instead of living
/// in ambient process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Fractional digits kept after rounding.
    pub decimals: u32,
    /// Marker prepended to every numeric field so CSV consumers keep it as text.
    pub text_guard: char,
    /// Minimum width of the zero-padded total count in row ids.
    pub id_pad_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimals: 6,
            text_guard: 's',
            id_pad_width: 3,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<SubmissionRow>,
    pub csv_output: String,
}
