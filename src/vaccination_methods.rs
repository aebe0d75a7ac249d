pub mod vaccination;
pub use vaccination::*;
