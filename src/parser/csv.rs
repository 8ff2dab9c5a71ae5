//! Products CSV loader.
//!
//! The file starts with a header row naming the columns; each following
//! record describes one product line with the quantity needed. Bad records
//! are skipped and reported, the rest of the file still loads.

use crate::error::{PackError, Result};
use crate::model::Product;
use crate::packing::sort_by_volume;
use std::path::Path;

/// Product identifier column.
pub const COL_PRODUCT_ID: &str = "Product ID";
/// Quantity column.
pub const COL_QUANTITY: &str = "Quantity needed";
/// Length column (mm).
pub const COL_LENGTH: &str = "Length (mm)";
/// Width column (mm).
pub const COL_WIDTH: &str = "Width (mm)";
/// Height column (mm).
pub const COL_HEIGHT: &str = "Height (mm)";

/// A single validated CSV record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductRecord {
    pub quantity: u32,
    pub product_id: u64,
    pub length: u32,
    pub width: u32,
    pub height: u32,
}

impl ProductRecord {
    /// Expand the record into one product per unit of quantity.
    pub fn to_products(&self) -> impl Iterator<Item = Product> + '_ {
        (0..self.quantity)
            .map(move |_| Product::new(self.product_id, self.length, self.width, self.height))
    }
}

/// Products loaded from a CSV file.
#[derive(Debug, Default)]
pub struct LoadedProducts {
    /// Products sorted by descending volume.
    pub products: Vec<Product>,
    /// Records that were skipped, one processing error each.
    pub skipped: Vec<PackError>,
}

/// Split a CSV line into trimmed fields.
///
/// Fields may be wrapped in double quotes, in which case commas are kept and
/// `""` stands for a literal quote.
pub fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(field.trim().to_string());

    fields
}

/// Look up a field by column name.
fn get_field<'a>(
    header: &[String],
    fields: &'a [String],
    name: &str,
    line: usize,
) -> Result<&'a str> {
    header
        .iter()
        .position(|h| h == name)
        .and_then(|idx| fields.get(idx))
        .map(|s| s.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PackError::MissingField {
            line,
            field: name.to_string(),
        })
}

fn invalid(line: usize, field: &str, value: &str) -> PackError {
    PackError::InvalidValue {
        line,
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Parse an unsigned integer field.
fn parse_count<T: std::str::FromStr>(
    header: &[String],
    fields: &[String],
    name: &str,
    line: usize,
) -> Result<T> {
    let value = get_field(header, fields, name, line)?;
    value.parse().map_err(|_| invalid(line, name, value))
}

/// Parse a dimension field, which must be a positive integer.
fn parse_dimension(header: &[String], fields: &[String], name: &str, line: usize) -> Result<u32> {
    let value = get_field(header, fields, name, line)?;
    match value.parse::<u32>() {
        Ok(dim) if dim > 0 => Ok(dim),
        _ => Err(invalid(line, name, value)),
    }
}

/// Extract and validate one record.
pub fn parse_record(header: &[String], fields: &[String], line: usize) -> Result<ProductRecord> {
    let quantity = parse_count(header, fields, COL_QUANTITY, line)?;
    let product_id = parse_count(header, fields, COL_PRODUCT_ID, line)?;
    let length = parse_dimension(header, fields, COL_LENGTH, line)?;
    let width = parse_dimension(header, fields, COL_WIDTH, line)?;
    let height = parse_dimension(header, fields, COL_HEIGHT, line)?;

    Ok(ProductRecord {
        quantity,
        product_id,
        length,
        width,
        height,
    })
}

/// Parse products CSV content.
///
/// Line numbers in errors are 1-based and count the header row.
pub fn parse_products(content: &str) -> LoadedProducts {
    let mut loaded = LoadedProducts::default();

    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_start_matches('\u{feff}')))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((_, header_line)) = lines.next() else {
        return loaded;
    };
    let header = split_record(header_line);

    for (line, text) in lines {
        match parse_record(&header, &split_record(text), line) {
            Ok(record) => loaded.products.extend(record.to_products()),
            Err(e) => loaded.skipped.push(e),
        }
    }

    sort_by_volume(&mut loaded.products);

    tracing::debug!(
        "Loaded {} product(s), skipped {} record(s)",
        loaded.products.len(),
        loaded.skipped.len()
    );

    loaded
}

/// Load products from a CSV file.
pub fn load_products(path: &Path) -> Result<LoadedProducts> {
    if !path.exists() {
        return Err(PackError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(PackError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    Ok(parse_products(&content))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        split_record("Product ID,Height (mm),Width (mm),Length (mm),Quantity needed")
    }

    // ==================== split_record tests ====================

    #[test]
    fn test_split_record_simple() {
        assert_eq!(split_record("1,100,100,100,1"), vec!["1", "100", "100", "100", "1"]);
    }

    #[test]
    fn test_split_record_trims_spaces() {
        assert_eq!(split_record(" 1 , 2 ,3"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_split_record_quoted() {
        assert_eq!(
            split_record(r#""Width (mm)","a, b","say ""hi""""#),
            vec!["Width (mm)", "a, b", r#"say "hi""#]
        );
    }

    #[test]
    fn test_split_record_empty_fields() {
        assert_eq!(split_record("1,,3,"), vec!["1", "", "3", ""]);
    }

    // ==================== parse_record tests ====================

    #[test]
    fn test_parse_record() {
        let fields = split_record("1,57,80,300,1");
        let record = parse_record(&header(), &fields, 2).expect("Should parse");
        assert_eq!(
            record,
            ProductRecord {
                quantity: 1,
                product_id: 1,
                length: 300,
                width: 80,
                height: 57,
            }
        );
    }

    #[test]
    fn test_parse_record_bad_type() {
        let fields = split_record("1,57,80.123,300,1");
        match parse_record(&header(), &fields, 2) {
            Err(PackError::InvalidValue { line, field, value }) => {
                assert_eq!(line, 2);
                assert_eq!(field, COL_WIDTH);
                assert_eq!(value, "80.123");
            }
            other => panic!("Expected InvalidValue error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_missing_data() {
        let header = split_record("Product ID,Height (mm),Length (mm),Quantity needed");
        let fields = split_record("1,57,300,1");
        match parse_record(&header, &fields, 5) {
            Err(PackError::MissingField { line, field }) => {
                assert_eq!(line, 5);
                assert_eq!(field, COL_WIDTH);
            }
            other => panic!("Expected MissingField error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_record_short_row() {
        let fields = split_record("1,57");
        let err = parse_record(&header(), &fields, 3).unwrap_err();
        assert!(err.is_processing());
        assert!(matches!(err, PackError::MissingField { .. }));
    }

    #[test]
    fn test_parse_record_zero_dimension() {
        let fields = split_record("1,0,80,300,1");
        let err = parse_record(&header(), &fields, 2).unwrap_err();
        assert!(matches!(err, PackError::InvalidValue { ref field, .. } if field == COL_HEIGHT));
    }

    #[test]
    fn test_parse_record_negative_quantity() {
        let fields = split_record("1,57,80,300,-1");
        let err = parse_record(&header(), &fields, 2).unwrap_err();
        assert!(matches!(err, PackError::InvalidValue { ref field, .. } if field == COL_QUANTITY));
    }

    // ==================== parse_products tests ====================

    #[test]
    fn test_parse_products_expands_and_sorts() {
        let content = "Product ID,Height (mm),Width (mm),Length (mm),Quantity needed\n\
                       2,10,10,10,2\n\
                       1,100,100,100,1\n";

        let loaded = parse_products(content);

        assert!(loaded.skipped.is_empty());
        let volumes: Vec<u64> = loaded.products.iter().map(Product::volume).collect();
        assert_eq!(volumes, vec![1_000_000, 1000, 1000]);
        assert!(loaded.products.iter().all(|p| !p.is_placed()));
    }

    #[test]
    fn test_parse_products_skips_bad_records() {
        let content = "Product ID,Height (mm),Width (mm),Length (mm),Quantity needed\n\
                       1,57,80.123,300,1\n\
                       2,10,10,10,3\n\
                       3,10,,10,1\n";

        let loaded = parse_products(content);

        assert_eq!(loaded.products.len(), 3);
        assert!(loaded.products.iter().all(|p| p.id() == 2));
        assert_eq!(loaded.skipped.len(), 2);
        assert!(matches!(loaded.skipped[0], PackError::InvalidValue { line: 2, .. }));
        assert!(matches!(loaded.skipped[1], PackError::MissingField { line: 4, .. }));
    }

    #[test]
    fn test_parse_products_zero_quantity() {
        let content = "Product ID,Quantity needed,Length (mm),Width (mm),Height (mm)\n7,0,1,1,1\n";

        let loaded = parse_products(content);

        assert!(loaded.products.is_empty());
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_parse_products_header_only() {
        let loaded = parse_products("Product ID,Height (mm),Width (mm),Length (mm),Quantity needed\n");
        assert!(loaded.products.is_empty());
        assert!(loaded.skipped.is_empty());
    }

    #[test]
    fn test_parse_products_blank_lines_and_crlf() {
        let content = "\u{feff}Product ID,Height (mm),Width (mm),Length (mm),Quantity needed\r\n\
                       \r\n\
                       4,20,30,40,2\r\n";

        let loaded = parse_products(content);

        assert!(loaded.skipped.is_empty());
        assert_eq!(loaded.products.len(), 2);
        assert_eq!(loaded.products[0].height(), 20);
        assert_eq!(loaded.products[0].width(), 30);
        assert_eq!(loaded.products[0].length(), 40);
    }

    // ==================== load_products tests ====================

    #[test]
    fn test_load_products_missing_file() {
        let result = load_products(Path::new("definitely/not/here.csv"));
        assert!(matches!(result, Err(PackError::FileNotFound { .. })));
    }
}
