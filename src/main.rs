//! # Folio CLI
//!
//! Usage:
//!   folio workbook.json -o layout.json
//!   echo '{ ... }' | folio -o layout.json
//!   folio workbook.json --page 2 -o page2.json
//!   folio --example > workbook.json

use std::env;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    // Handle --example flag
    if args.iter().any(|a| a == "--example") {
        print!("{}", example_workbook_json());
        return;
    }

    // Read input
    let input = if args.len() > 1 && !args[1].starts_with('-') {
        fs::read_to_string(&args[1]).expect("Failed to read input file")
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .expect("Failed to read stdin");
        buf
    };

    // Parse output path
    let output_path = args
        .windows(2)
        .find(|w| w[0] == "-o")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "layout.json".to_string());

    // Optional single-page selection
    let page: Option<usize> = args
        .windows(2)
        .find(|w| w[0] == "--page")
        .map(|w| w[1].parse().expect("--page expects a page number"));

    let result = match page {
        Some(n) => layout_single_page(&input, n),
        None => folio::paginate_json(&input),
    };

    match result {
        Ok(json) => {
            fs::write(&output_path, &json).expect("Failed to write layout");
            eprintln!("✓ Written {} bytes to {}", json.len(), output_path);
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    }
}

fn layout_single_page(input: &str, page_number: usize) -> Result<String, folio::Error> {
    let workbook: folio::model::Workbook = serde_json::from_str(input)?;
    let page = folio::layout::ExportEngine::new().layout_page(&workbook, page_number)?;
    Ok(serde_json::to_string_pretty(&page)?)
}

fn example_workbook_json() -> &'static str {
    r##"{
  "metadata": {
    "title": "Quarterly inventory",
    "author": "Folio"
  },
  "page": {
    "size": "Letter",
    "margin": 40
  },
  "widgets": [
    {
      "id": "table-1",
      "position": { "x": 50, "y": 50 },
      "kind": {
        "type": "Table",
        "title": "Stock levels",
        "row_count": 120,
        "metrics": { "rowHeight": 25, "headerHeight": 30 }
      }
    },
    {
      "id": "note-1",
      "position": { "x": 520, "y": 80 },
      "kind": {
        "type": "Note",
        "text": "Counts taken at the Riverside warehouse on the last business day."
      }
    },
    {
      "id": "table-2",
      "position": { "x": 50, "y": 1200 },
      "kind": {
        "type": "Table",
        "row_count": 8,
        "metrics": { "rowHeight": 25, "headerHeight": 30 }
      }
    }
  ]
}
"##
}
