//! # Workbook Model
//!
//! The input representation for the pagination engine. A workbook is a flat
//! collection of widgets, each placed at an absolute coordinate on an
//! unbounded vertical canvas. This is designed to be easily produced by a
//! drag-and-drop UI, a persistence layer, or direct JSON construction.
//!
//! There is one deliberate asymmetry: the canvas is infinite, the output is
//! not. The page size and margin the export will use live here as
//! [`PageConfig`] and are threaded explicitly into every layout computation.
//! Nothing in the crate reads page dimensions from ambient state.

use serde::{Deserialize, Serialize};

/// A complete workbook ready for pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    /// Widgets on the canvas, in insertion order.
    pub widgets: Vec<Widget>,

    /// Workbook metadata (title, author).
    #[serde(default)]
    pub metadata: Metadata,

    /// Output page configuration. Fixed for a whole export run: layouts
    /// computed against different configs are not comparable.
    #[serde(default)]
    pub page: PageConfig,
}

impl Workbook {
    /// Create an empty workbook for the given page configuration.
    pub fn new(page: PageConfig) -> Self {
        Self {
            widgets: Vec::new(),
            metadata: Metadata::default(),
            page,
        }
    }

    /// Append a new, not-yet-measured table widget at the next cascade
    /// position and return its generated id.
    ///
    /// New tables stack down-right from the canvas origin so consecutive
    /// additions stay visible instead of piling on top of each other.
    pub fn add_table(&mut self, row_count: usize) -> String {
        let n = self.widgets.len();
        let id = format!("table-{}", n + 1);
        self.widgets.push(Widget {
            id: id.clone(),
            position: CanvasPosition {
                x: 50.0,
                y: 50.0 + 50.0 * n as f64,
            },
            kind: WidgetKind::Table {
                title: None,
                row_count,
                metrics: None,
            },
        });
        id
    }

    /// Look up a widget by id.
    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }

    /// Look up a widget by id, mutably.
    pub fn widget_mut(&mut self, id: &str) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| w.id == id)
    }
}

/// Workbook metadata carried through to the layout output consumer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub author: Option<String>,
}

/// Configuration for the output pages: size and uniform margin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Page size. Defaults to Letter.
    #[serde(default)]
    pub size: PageSize,

    /// Uniform page margin in pixels.
    #[serde(default = "default_margin")]
    pub margin: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            size: PageSize::Letter,
            margin: default_margin(),
        }
    }
}

fn default_margin() -> f64 {
    40.0
}

/// Standard output page sizes, in CSS pixels at 96 DPI.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum PageSize {
    /// 210mm x 297mm.
    A4,
    /// 8.5in x 11in.
    #[default]
    Letter,
    Custom {
        width: f64,
        height: f64,
    },
}

impl PageSize {
    /// Returns (width, height) in pixels.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (794.0, 1123.0),
            PageSize::Letter => (816.0, 1056.0),
            PageSize::Custom { width, height } => (*width, *height),
        }
    }
}

/// An absolute position on the unbounded canvas.
///
/// `y` is measured from the canvas top, not from any page. Both components
/// are non-negative; [`Widget::translate`] maintains that at the boundary
/// where positions change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPosition {
    pub x: f64,
    pub y: f64,
}

/// A widget placed on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub position: CanvasPosition,
    pub kind: WidgetKind,
}

impl Widget {
    /// Apply a drag delta to the widget's position.
    ///
    /// The canvas has no negative quadrant, so the result is clamped to the
    /// origin. Keeping the clamp here means every downstream coordinate
    /// computation can assume non-negative positions.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.position.x = (self.position.x + dx).max(0.0);
        self.position.y = (self.position.y + dy).max(0.0);
    }
}

/// The different kinds of widgets on the canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WidgetKind {
    /// A data table. Row pagination applies only to this kind.
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,

        /// Number of data rows. The header is not a row.
        row_count: usize,

        /// Measured row metrics. `None` until the rendering layer has
        /// measured real row and header heights; without them the table
        /// cannot be split across pages and is placed whole.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metrics: Option<RowMetrics>,
    },

    /// A free-floating text note. Occupies a single point for visibility
    /// purposes and never splits across pages.
    Note { text: String },
}

/// Measured per-row heights for a table, in pixels.
///
/// These come from the rendering layer (DOM measurement in a browser host),
/// not from the model itself. Both heights must be positive before
/// pagination is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowMetrics {
    /// Height of one data row.
    pub row_height: f64,
    /// Height of the header row, repeated on every page of the table.
    pub header_height: f64,
}
