//! Workbook I/O: reading a worksheet into the table model and writing it
//! back out as `.xlsx`.

pub mod reader;
pub mod writer;

pub use reader::SheetReader;
pub use writer::{output_path_for, SheetWriter, OUTPUT_SUFFIX};
