pub mod fixer;
pub mod text;
pub mod unicode;

pub use fixer::{fix_file, FixFileError};
