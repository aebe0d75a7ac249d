pub mod adjacency;
pub use adjacency::*;

pub mod transition;
pub use transition::*;

pub mod edge_list;
pub use edge_list::*;
