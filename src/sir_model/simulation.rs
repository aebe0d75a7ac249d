use{
    rand::SeedableRng,
    rand_pcg::Pcg64,
    tracing::{debug, warn},
    crate::{
        error::*,
        misc_types::*,
        network::{AdjacencyMatrix, TransitionMatrix},
        page_rank::page_rank,
        vaccination_methods::*,
    },
    super::*,
};

/// How the ranking step went, kept so callers can see a capped run
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct RankingSummary
{
    pub iterations: usize,
    pub residual: f64,
    pub converged: bool
}

#[derive(Clone, Debug)]
pub struct SimulationOutcome
{
    pub policy: VaccinationPolicy,
    /// node count before vaccination
    pub population: usize,
    /// original indices of the removed nodes
    pub vaccinated: Vec<usize>,
    /// `survivors[k]` is the original index of simulated node `k`
    pub survivors: Vec<usize>,
    pub ranking: Option<RankingSummary>,
    pub curve: InfectionCurve
}

impl SimulationOutcome
{
    pub fn is_degenerate(&self) -> bool
    {
        self.survivors.is_empty()
    }

    pub fn fractions(&self) -> impl Iterator<Item=f64> + '_
    {
        self.curve.iter().map(|(_, f)| *f)
    }

    /// Recoverable conditions met during the run
    pub fn warnings(&self) -> Vec<SimError>
    {
        let mut warnings = Vec::new();
        if let Some(r) = self.ranking {
            if !r.converged {
                warnings.push(SimError::NonConvergence{iterations: r.iterations, residual: r.residual});
            }
        }
        if self.is_degenerate() {
            warnings.push(SimError::DegenerateGraph{
                population: self.population,
                vaccinated: self.vaccinated.len()
            });
        }
        warnings
    }
}

/// Rank, vaccinate, reduce and simulate.
///
/// The ranking is computed on the full network and the epidemic runs on
/// the network without the vaccinated nodes. Infected fractions are
/// divided by the size of the full network, so with vaccination the curve
/// cannot reach 1.
pub fn simulate(adjacency: &AdjacencyMatrix, config: &SimulationConfig) -> Result<SimulationOutcome>
{
    adjacency.validate()?;
    config.validate()?;

    let population = adjacency.size();
    let ratio = config.effective_vaccinated_ratio();
    let mut rng = Pcg64::seed_from_u64(config.seed);

    let mut ranking = None;
    let vaccinated = match config.policy
    {
        VaccinationPolicy::None => VaccinationSelector::Nobody.select(population, ratio, &mut rng),
        VaccinationPolicy::Random => VaccinationSelector::Random.select(population, ratio, &mut rng),
        VaccinationPolicy::Ranked => {
            let transition = TransitionMatrix::from_adjacency(adjacency);
            let res = page_rank(&transition, &config.page_rank);
            ranking = Some(RankingSummary{
                iterations: res.iterations,
                residual: res.residual,
                converged: res.converged
            });
            VaccinationSelector::Ranked(&res.ranking).select(population, ratio, &mut rng)
        }
    };
    debug!(policy = %config.policy, vaccinated = vaccinated.len(), population, "vaccinated");

    let reduced = adjacency.without_nodes(&vaccinated);
    if reduced.adjacency.is_empty() {
        warn!(population, vaccinated = vaccinated.len(), "no node survives vaccination");
    }

    let mut model = ContagionModel::new(
        &reduced.adjacency,
        population,
        config.contagion_params(),
        rng
    );
    let curve = model.propagate_curve();

    Ok(SimulationOutcome{
        policy: config.policy,
        population,
        vaccinated,
        survivors: reduced.survivors,
        ranking,
        curve
    })
}
