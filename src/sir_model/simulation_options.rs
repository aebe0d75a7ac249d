use{
    serde::{Serialize, Deserialize},
    crate::{
        error::*,
        misc_types::*,
        page_rank::PageRankOptions,
        vaccination_methods::VaccinationPolicy,
    },
};

/// Everything one run of the pipeline (rank, select, reduce, simulate) needs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SimulationConfig
{
    pub policy: VaccinationPolicy,
    /// ignored for [`VaccinationPolicy::None`]
    pub vaccinated_ratio: f64,
    pub initial_infected_ratio: f64,
    /// chance per step and per edge to an infected node
    pub contamination_probability: f64,
    /// chance per step that an infected node is cured
    pub cure_probability: f64,
    pub iteration_count: usize,
    pub seed: u64,
    pub page_rank: PageRankOptions
}

impl Default for SimulationConfig
{
    fn default() -> Self {
        Self{
            policy: VaccinationPolicy::Random,
            vaccinated_ratio: DEFAULT_VACCINATED_RATIO,
            initial_infected_ratio: DEFAULT_INITIAL_INFECTED_RATIO,
            contamination_probability: DEFAULT_CONTAMINATION_PROB,
            cure_probability: DEFAULT_CURE_PROB,
            iteration_count: DEFAULT_ITERATION_COUNT,
            seed: DEFAULT_SIR_SEED,
            page_rank: PageRankOptions::default()
        }
    }
}

impl SimulationConfig
{
    pub fn validate(&self) -> Result<()>
    {
        check_unit_interval("vaccinated_ratio", self.vaccinated_ratio)?;
        check_unit_interval("initial_infected_ratio", self.initial_infected_ratio)?;
        check_unit_interval("contamination_probability", self.contamination_probability)?;
        check_unit_interval("cure_probability", self.cure_probability)?;
        if self.iteration_count == 0 {
            return Err(SimError::invalid("iteration_count", "must be at least 1"));
        }
        if self.policy == VaccinationPolicy::Ranked {
            self.page_rank.validate()?;
        }
        Ok(())
    }

    pub fn effective_vaccinated_ratio(&self) -> f64
    {
        self.policy.effective_ratio(self.vaccinated_ratio)
    }

    pub fn with_policy(&self, policy: VaccinationPolicy) -> Self
    {
        Self{policy, ..self.clone()}
    }

    pub fn with_seed(&self, seed: u64) -> Self
    {
        Self{seed, ..self.clone()}
    }

    /// The parameters the contagion process itself runs with
    pub fn contagion_params(&self) -> ContagionParams
    {
        ContagionParams{
            initial_infected_ratio: self.initial_infected_ratio,
            contamination_probability: self.contamination_probability,
            cure_probability: self.cure_probability,
            iteration_count: self.iteration_count
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq)]
pub struct ContagionParams
{
    pub initial_infected_ratio: f64,
    pub contamination_probability: f64,
    pub cure_probability: f64,
    pub iteration_count: usize
}
