//! Epidemic spreading on contact networks under different vaccination
//! policies, one of which vaccinates by PageRank.
//!
//! The pipeline for one run is: build the transition matrix of the full
//! network, rank its nodes, pick whom to vaccinate, remove them and let a
//! susceptible-infected-susceptible process run on what is left. See
//! [`sir_model::simulate`].

use indicatif::{ProgressBar, ProgressStyle};

pub mod error;
pub mod misc_types;
pub mod network;
pub mod page_rank;
pub mod vaccination_methods;
pub mod sir_model;
pub mod stats_methods;
pub mod json_parsing;

pub use error::{Result, SimError};
pub use network::{AdjacencyMatrix, TransitionMatrix, ReducedNetwork};
pub use page_rank::{rank, PageRankOptions, PageRankResult};
pub use sir_model::{simulate, SimulationConfig, SimulationOutcome};
pub use vaccination_methods::VaccinationPolicy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn indication_bar(len: u64) -> ProgressBar
{
        // for indication on when it is finished
        let bar = ProgressBar::new(len);
        bar.set_style(ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise} - {eta_precise}] {wide_bar}"));
        bar
}
