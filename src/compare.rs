pub mod parser;
pub use parser::*;
pub mod execute;
