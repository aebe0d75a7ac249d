use serde::{Serialize, Deserialize};

/// Cured nodes go straight back to `Susceptible`, there is no
/// recovered/immune state besides vaccination before the run.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Default)]
#[derive(Serialize, Deserialize)]
pub enum InfectionState{
    #[default]
    Susceptible,
    Infected,
}

impl InfectionState{
    pub fn sus_check(&self) -> bool{
        matches!(self, InfectionState::Susceptible)
    }
    pub fn inf_check(&self) -> bool{
        matches!(self, InfectionState::Infected)
    }
}
