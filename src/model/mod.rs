//! Domain vocabulary: classified keys, operators, and the error taxonomy.

pub mod error;
pub mod key;

pub use error::AppError;
pub use key::{classify, Key, Op};
