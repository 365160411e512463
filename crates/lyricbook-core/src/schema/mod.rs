//! Tabular schema: canonical field ids and header resolution

mod field;
pub mod header;

pub use field::{parse_field_list, FieldGroup, FieldId};
pub use header::{normalize_header, resolve_headers, ColumnMap};
