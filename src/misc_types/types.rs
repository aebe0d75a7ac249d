use std::num::NonZeroUsize;

pub const DEFAULT_INITIAL_INFECTED_RATIO: f64 = 0.05;
pub const DEFAULT_VACCINATED_RATIO: f64 = 0.12;
pub const DEFAULT_CONTAMINATION_PROB: f64 = 0.2;
pub const DEFAULT_CURE_PROB: f64 = 0.26;
pub const DEFAULT_ITERATION_COUNT: usize = 150;
pub const DEFAULT_SIR_SEED: u64 = 1489264107025;
pub const DEFAULT_SAMPLES: NonZeroUsize = unsafe{NonZeroUsize::new_unchecked(1)};
pub const DEFAULT_TOP_NODES: usize = 10;

/// (step, infected fraction of the original population)
pub type CurvePoint = (usize, f64);
pub type InfectionCurve = Vec<CurvePoint>;
