pub mod sir_states;
pub use sir_states::*;

pub mod simulation_options;
pub use simulation_options::*;

pub mod contagion;
pub use contagion::*;

pub mod simulation;
pub use simulation::*;

pub mod sir_writer;
pub use sir_writer::*;
