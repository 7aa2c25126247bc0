//! # Folio
//!
//! A canvas-to-page pagination engine.
//!
//! Workbook UIs let users drag table widgets anywhere on an unbounded
//! canvas. Paper is not unbounded: exporting that canvas means deciding,
//! for every fixed-size output page, which widgets appear on it and which
//! slice of each table's rows renders there, with the header repeated on
//! every page and the remaining rows carried forward.
//!
//! Folio owns exactly that arithmetic and nothing else. It does not draw:
//! the output is a per-page layout document an external renderer turns
//! into PDF pages or print CSS.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON/API)
//!       ↓
//!   [model]    — Workbook: widgets at absolute canvas coordinates
//!       ↓
//!   [layout]   — geometry: canvas y → page; rows: row slices per page
//!       ↓
//!   Output     — Vec<PageLayout>, serializable, renderer-ready
//! ```

pub mod error;
pub mod layout;
pub mod model;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;

use layout::{ExportEngine, PageLayout};
use model::Workbook;

/// Lay out every page of a workbook.
///
/// This is the primary entry point. Takes a workbook and returns one
/// layout per output page, first to last.
pub fn paginate(workbook: &Workbook) -> Result<Vec<PageLayout>, Error> {
    ExportEngine::new().layout(workbook)
}

/// Lay out a workbook described as JSON, returning the page layouts as JSON.
pub fn paginate_json(json: &str) -> Result<String, Error> {
    let workbook: Workbook = serde_json::from_str(json)?;
    let pages = paginate(&workbook)?;
    Ok(serde_json::to_string_pretty(&pages)?)
}
