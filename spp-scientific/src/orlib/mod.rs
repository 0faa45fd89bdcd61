//! Contains functionality to read OR-library style set packing problems, write and check their
//! solutions.

mod checker;
pub use self::checker::*;

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;
