//! Products CSV parser module.

mod csv;

pub use csv::{
    load_products, parse_products, parse_record, split_record, LoadedProducts, ProductRecord,
};
