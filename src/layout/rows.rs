//! # Row Pagination
//!
//! Splits a table's rows across the pages its vertical extent touches.
//! This module encodes the one genuinely tricky piece of arithmetic in the
//! crate: the first page of a table starts wherever the widget happens to
//! sit on the canvas, while every continuation page starts at the top
//! margin with a repeated header, so the two capacities differ.
//!
//! Everything here is a pure function of its arguments. Nothing is cached;
//! callers that want caching own it themselves.

use serde::Serialize;

use crate::error::Error;
use crate::layout::geometry::PageGeometry;

/// Snapshot of one table's vertical geometry at pagination time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    /// Absolute canvas coordinate of the table's top edge.
    pub top_y: f64,
    /// Measured height of one data row. Must be positive.
    pub row_height: f64,
    /// Measured header height. The header repeats on every page.
    pub header_height: f64,
    /// Total number of data rows.
    pub row_count: usize,
}

/// The row slice a table contributes to one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// First row on this page (inclusive).
    pub start_row: usize,
    /// One past the last row on this page.
    pub end_row: usize,
    /// How many pages the whole table spans.
    pub total_pages: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
}

/// Compute the row slice of `table` for its `page_number`-th page, where
/// page 1 is the page containing the table's top edge.
///
/// The capacity of a continuation page depends only on the heights involved,
/// never on `row_count`: a table's layout is self-similar across all its
/// continuation pages.
///
/// Page numbers outside `[1, total_pages]` are not an error. They yield an
/// empty slice, with `start_row` and `end_row` clamped into
/// `[0, row_count]` so that the union of slices over any set of pages stays
/// an exact partition of the rows.
pub fn paginate(
    geometry: &PageGeometry,
    table: &TableGeometry,
    page_number: usize,
) -> Result<Pagination, Error> {
    if table.row_height <= 0.0 || table.header_height <= 0.0 {
        return Err(Error::InvalidGeometry(format!(
            "rows are not measured (row height {}, header height {})",
            table.row_height, table.header_height
        )));
    }

    // Vertical offset of the table's top within its first page.
    let start_offset = geometry.relative_y(table.top_y);

    // Space left below the table's top on the first page, above the bottom
    // margin. This can be too small for even the header; the first page then
    // carries zero rows and everything moves to continuation pages.
    let first_available = geometry.height - start_offset - geometry.margin;
    let first_page_rows = ((first_available - table.header_height) / table.row_height)
        .floor()
        .max(0.0) as usize;

    // Capacity of a page entirely devoted to this table: both margins apply
    // and the header is repeated.
    let full_page_height = geometry.height - table.header_height - 2.0 * geometry.margin;
    let rows_per_full_page = (full_page_height / table.row_height).floor().max(0.0) as usize;

    let remaining_rows = table.row_count.saturating_sub(first_page_rows);
    if remaining_rows > 0 && rows_per_full_page == 0 {
        return Err(Error::InvalidGeometry(format!(
            "a single row ({}px) does not fit on a full page ({}px usable)",
            table.row_height, full_page_height
        )));
    }
    let additional_pages = if remaining_rows == 0 {
        0
    } else {
        remaining_rows.div_ceil(rows_per_full_page)
    };
    let total_pages = 1 + additional_pages;

    let (start_row, end_row) = if page_number == 0 {
        (0, 0)
    } else if page_number == 1 {
        (0, first_page_rows.min(table.row_count))
    } else {
        let rows_before = first_page_rows
            .saturating_add((page_number - 2).saturating_mul(rows_per_full_page));
        (
            rows_before.min(table.row_count),
            rows_before
                .saturating_add(rows_per_full_page)
                .min(table.row_count),
        )
    };

    Ok(Pagination {
        start_row,
        end_row,
        total_pages,
        is_first_page: page_number == 1,
        is_last_page: page_number == total_pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageConfig;

    // Letter: 816 x 1056, margin 40. With 25px rows and a 30px header the
    // first page below y=0 holds floor((1056-40-30)/25) = 39 rows and a
    // full continuation page holds floor((1056-30-80)/25) = 37.
    fn letter() -> PageGeometry {
        PageGeometry::new(&PageConfig::default())
    }

    fn table(top_y: f64, row_count: usize) -> TableGeometry {
        TableGeometry {
            top_y,
            row_height: 25.0,
            header_height: 30.0,
            row_count,
        }
    }

    #[test]
    fn short_table_fits_on_one_page() {
        let p = paginate(&letter(), &table(0.0, 10), 1).unwrap();
        assert_eq!(
            p,
            Pagination {
                start_row: 0,
                end_row: 10,
                total_pages: 1,
                is_first_page: true,
                is_last_page: true,
            }
        );
    }

    #[test]
    fn table_near_page_bottom_defers_all_rows() {
        let g = letter();
        let t = table(1000.0, 100);

        // Only 16px remain below y=1000: not even the header fits, so the
        // first page carries an empty slice.
        let first = paginate(&g, &t, 1).unwrap();
        assert_eq!((first.start_row, first.end_row), (0, 0));
        assert_eq!(first.total_pages, 4);
        assert!(first.is_first_page);
        assert!(!first.is_last_page);

        let second = paginate(&g, &t, 2).unwrap();
        assert_eq!((second.start_row, second.end_row), (0, 37));

        let last = paginate(&g, &t, 4).unwrap();
        assert_eq!((last.start_row, last.end_row), (74, 100));
        assert!(last.is_last_page);
    }

    #[test]
    fn zero_rows_is_a_single_empty_page() {
        let p = paginate(&letter(), &table(300.0, 0), 1).unwrap();
        assert_eq!((p.start_row, p.end_row), (0, 0));
        assert_eq!(p.total_pages, 1);
        assert!(p.is_first_page && p.is_last_page);
    }

    #[test]
    fn page_beyond_span_yields_empty_slice() {
        let p = paginate(&letter(), &table(0.0, 10), 3).unwrap();
        assert_eq!((p.start_row, p.end_row), (10, 10));
        assert!(!p.is_first_page);
        assert!(!p.is_last_page);
    }

    #[test]
    fn page_zero_yields_empty_slice() {
        let p = paginate(&letter(), &table(0.0, 10), 0).unwrap();
        assert_eq!((p.start_row, p.end_row), (0, 0));
        assert!(!p.is_first_page);
    }

    #[test]
    fn unmeasured_rows_are_rejected() {
        let t = TableGeometry {
            top_y: 0.0,
            row_height: 0.0,
            header_height: 30.0,
            row_count: 5,
        };
        assert!(matches!(
            paginate(&letter(), &t, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn unmeasured_header_is_rejected() {
        let t = TableGeometry {
            top_y: 0.0,
            row_height: 25.0,
            header_height: 0.0,
            row_count: 5,
        };
        assert!(matches!(
            paginate(&letter(), &t, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn row_taller_than_a_full_page_is_rejected() {
        let t = TableGeometry {
            top_y: 0.0,
            row_height: 2000.0,
            header_height: 30.0,
            row_count: 5,
        };
        assert!(matches!(
            paginate(&letter(), &t, 1),
            Err(Error::InvalidGeometry(_))
        ));
    }

    #[test]
    fn slices_partition_all_rows() {
        let g = letter();
        for &(top_y, rows) in &[
            (0.0, 10usize),
            (0.0, 500),
            (1000.0, 100),
            (517.0, 83),
            (2111.0, 1),
        ] {
            let t = table(top_y, rows);
            let total = paginate(&g, &t, 1).unwrap().total_pages;
            let mut next = 0usize;
            for page in 1..=total {
                let p = paginate(&g, &t, page).unwrap();
                assert_eq!(p.start_row, next, "gap or overlap at page {page}, y={top_y}");
                assert!(p.end_row >= p.start_row);
                next = p.end_row;
            }
            assert_eq!(next, rows, "rows lost for table at y={top_y}");
        }
    }

    #[test]
    fn end_row_reaches_row_count_only_on_last_page() {
        let g = letter();
        let t = table(300.0, 200);
        let total = paginate(&g, &t, 1).unwrap().total_pages;
        for page in 1..=total {
            let p = paginate(&g, &t, page).unwrap();
            assert_eq!(p.end_row == t.row_count, p.is_last_page, "page {page}");
        }
    }

    #[test]
    fn identical_inputs_yield_identical_results() {
        let g = letter();
        let t = table(999.0, 60);
        assert_eq!(paginate(&g, &t, 2).unwrap(), paginate(&g, &t, 2).unwrap());
    }

    #[test]
    fn continuation_capacity_ignores_row_count() {
        let g = letter();
        let short = paginate(&g, &table(200.0, 50), 2).unwrap();
        let long = paginate(&g, &table(200.0, 5000), 2).unwrap();
        assert_eq!(short.start_row, long.start_row);
        assert_eq!(long.end_row - long.start_row, 37);
    }
}
