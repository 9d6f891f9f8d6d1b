//! In-memory model for discovered files and decoded sheets.
//!
//! Entries describe *where* a candidate file is and how to get its bytes;
//! worksheets hold the raw values decoded from one of them.

mod entry;
mod registry;
mod sheet;

pub use entry::*;
pub use registry::*;
pub use sheet::*;
