//! Column metadata model

mod column_set;

pub use column_set::{ColumnOrder, ColumnRecord, ColumnSet};
