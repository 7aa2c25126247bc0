//! # Export Layout Engine
//!
//! Turns a workbook into per-page layouts for a fixed page size.
//!
//! ## How an export works
//!
//! Widgets live at absolute coordinates on an unbounded canvas; paper does
//! not. For every output page the engine answers two questions:
//!
//! 1. Which widgets touch this page? Point widgets (notes, tables whose
//!    rows are not yet measured) belong to the single page containing their
//!    top edge. Measured tables span from the page containing their top
//!    edge through however many continuation pages their rows need.
//! 2. Where does each widget land on the page, and which of its rows come
//!    along? The first page of a table keeps the widget's canvas offset;
//!    continuation pages restart at the top margin with a repeated header.
//!
//! Every answer is recomputed from the workbook on every call. The engine
//! holds no state, so pages can be laid out independently and in any order.

pub mod geometry;
pub mod rows;

use serde::Serialize;

use crate::error::Error;
use crate::model::{Widget, WidgetKind, Workbook};
use self::geometry::PageGeometry;
use self::rows::{paginate, Pagination, TableGeometry};

/// Layout of a single output page, ready for an external renderer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// 1-based page number.
    pub page_number: usize,
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    /// Widgets on this page, in workbook order.
    pub widgets: Vec<PlacedWidget>,
}

/// A widget as it appears on one specific page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWidget {
    pub id: String,
    /// Horizontal position, unchanged from the canvas.
    pub x: f64,
    /// Vertical position relative to the page top.
    pub y: f64,
    #[serde(flatten)]
    pub content: PlacedContent,
}

/// Renderable content of a placed widget.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum PlacedContent {
    Table {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,

        /// Row slice for this page. `None` when the table's rows are not
        /// yet measured; the renderer shows a placeholder instead of rows.
        /// A renderer that wants a "Page X of Y" footer derives it from
        /// this slice when `total_pages > 1`.
        #[serde(skip_serializing_if = "Option::is_none")]
        rows: Option<Pagination>,
    },
    Note {
        text: String,
    },
}

/// The stateless pagination engine.
pub struct ExportEngine;

impl ExportEngine {
    pub fn new() -> Self {
        ExportEngine
    }

    /// Lay out every page of the workbook, first to last.
    pub fn layout(&self, workbook: &Workbook) -> Result<Vec<PageLayout>, Error> {
        let count = self.page_count(workbook)?;
        let mut pages = Vec::with_capacity(count);
        for page_number in 1..=count {
            pages.push(self.layout_page(workbook, page_number)?);
        }
        log::info!(
            "laid out {} page(s) for {} widget(s)",
            pages.len(),
            workbook.widgets.len()
        );
        Ok(pages)
    }

    /// Number of pages the workbook occupies: the highest page touched by
    /// any widget. An empty workbook occupies no pages.
    pub fn page_count(&self, workbook: &Workbook) -> Result<usize, Error> {
        let geometry = PageGeometry::new(&workbook.page);
        let mut count = 0;
        for widget in &workbook.widgets {
            let (_, last) = widget_span(&geometry, widget)?;
            count = count.max(last);
        }
        Ok(count)
    }

    /// Lay out a single page. Pages before the first occupied one are valid
    /// and simply empty, matching fixed-size paper semantics.
    pub fn layout_page(
        &self,
        workbook: &Workbook,
        page_number: usize,
    ) -> Result<PageLayout, Error> {
        let geometry = PageGeometry::new(&workbook.page);
        let mut placed = Vec::new();

        for widget in &workbook.widgets {
            let first = geometry.page_for_y(widget.position.y);
            let visible = match &widget.kind {
                WidgetKind::Table {
                    metrics: Some(_), ..
                } => {
                    let (_, last) = widget_span(&geometry, widget)?;
                    (first..=last).contains(&page_number)
                }
                _ => geometry.is_visible_on_page(&widget.position, page_number),
            };
            if !visible {
                continue;
            }

            // First page keeps the canvas offset; continuation pages restart
            // below the top margin.
            let y = if page_number == first {
                geometry.relative_y(widget.position.y)
            } else {
                geometry.margin
            };

            let content = match &widget.kind {
                WidgetKind::Table {
                    title,
                    row_count,
                    metrics,
                } => {
                    let rows = match metrics {
                        Some(m) => {
                            let table = TableGeometry {
                                top_y: widget.position.y,
                                row_height: m.row_height,
                                header_height: m.header_height,
                                row_count: *row_count,
                            };
                            let table_page = page_number - first + 1;
                            let slice = paginate(&geometry, &table, table_page)?;
                            log::debug!(
                                "widget {} page {}: rows {}..{} of {} (table page {}/{})",
                                widget.id,
                                page_number,
                                slice.start_row,
                                slice.end_row,
                                row_count,
                                table_page,
                                slice.total_pages
                            );
                            Some(slice)
                        }
                        None => {
                            log::debug!(
                                "widget {} page {}: rows not measured, placing placeholder",
                                widget.id,
                                page_number
                            );
                            None
                        }
                    };
                    PlacedContent::Table {
                        title: title.clone(),
                        rows,
                    }
                }
                WidgetKind::Note { text } => PlacedContent::Note { text: text.clone() },
            };

            placed.push(PlacedWidget {
                id: widget.id.clone(),
                x: widget.position.x,
                y,
                content,
            });
        }

        Ok(PageLayout {
            page_number,
            width: geometry.width,
            height: geometry.height,
            margin: geometry.margin,
            widgets: placed,
        })
    }
}

impl Default for ExportEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// First and last page a widget touches.
fn widget_span(geometry: &PageGeometry, widget: &Widget) -> Result<(usize, usize), Error> {
    let first = geometry.page_for_y(widget.position.y);
    match &widget.kind {
        WidgetKind::Table {
            row_count,
            metrics: Some(m),
            ..
        } => {
            let table = TableGeometry {
                top_y: widget.position.y,
                row_height: m.row_height,
                header_height: m.header_height,
                row_count: *row_count,
            };
            let total = paginate(geometry, &table, 1)?.total_pages;
            Ok((first, first + total - 1))
        }
        _ => Ok((first, first)),
    }
}
