use{
    rand::{distributions::Uniform, prelude::Distribution, seq::index},
    rand_pcg::Pcg64,
    tracing::{debug, warn},
    crate::{
        misc_types::*,
        network::AdjacencyMatrix,
        vaccination_methods::count_from_ratio,
    },
    super::*,
};

/// Susceptible-infected-susceptible process on a (reduced) network.
///
/// Every step first cures, then spreads from whoever is still infected,
/// then merges. A node next to k infected nodes gets k independent chances
/// to be contaminated. Fractions are relative to `population`, the size of
/// the network before vaccination.
#[derive(Clone)]
pub struct ContagionModel<'a>{
    network: &'a AdjacencyMatrix,
    population: usize,
    params: ContagionParams,
    states: Vec<InfectionState>,
    // sorted, no duplicates
    infected_list: Vec<usize>,
    new_infected_list: Vec<usize>,
    rng_type: Pcg64,
}

impl<'a> ContagionModel<'a>{
    pub fn new(
        network: &'a AdjacencyMatrix,
        population: usize,
        params: ContagionParams,
        rng_type: Pcg64
    ) -> Self
    {
        let mut res = Self{
            network,
            population,
            params,
            states: vec![InfectionState::Susceptible; network.size()],
            infected_list: Vec::new(),
            new_infected_list: Vec::new(),
            rng_type
        };
        res.reset_simulation();
        res
    }

    /// Everybody susceptible, then infect floor(population * ratio)
    /// distinct nodes of the reduced network.
    pub fn reset_simulation(&mut self)
    {
        self.infected_list.clear();
        self.states.iter_mut().for_each(|s| *s = InfectionState::Susceptible);

        let wanted = count_from_ratio(self.population, self.params.initial_infected_ratio);
        let available = self.network.size();
        if wanted > available {
            warn!(wanted, available, "fewer nodes left than initially infected requested, infecting all");
        }
        let amount = wanted.min(available);

        self.infected_list = index::sample(&mut self.rng_type, available, amount).into_vec();
        self.infected_list.sort_unstable();
        for &index in self.infected_list.iter(){
            self.states[index] = InfectionState::Infected;
        }
        debug!(infected = amount, nodes = available, "seeded infection");
    }

    pub fn infected(&self) -> &[usize]
    {
        &self.infected_list
    }

    pub fn state(&self, index: usize) -> InfectionState
    {
        self.states[index]
    }

    pub fn infected_fraction(&self) -> f64
    {
        if self.population == 0 {
            0.0
        } else {
            self.infected_list.len() as f64 / self.population as f64
        }
    }

    fn cure(&mut self)
    {
        let prob_dist = Uniform::new(0.0, 1.0);
        let gamma = self.params.cure_probability;
        let rng = &mut self.rng_type;
        let states = &mut self.states;
        self.infected_list.retain(
            |&index|
            {
                let cured = prob_dist.sample(&mut *rng) < gamma;
                if cured {
                    states[index] = InfectionState::Susceptible;
                }
                !cured
            }
        );
    }

    fn spread(&mut self)
    {
        debug_assert!(self.new_infected_list.is_empty());
        let prob_dist = Uniform::new(0.0, 1.0);
        let lambda = self.params.contamination_probability;

        // one draw per edge incidence, infected neighbours included
        for &index in self.infected_list.iter(){
            for n_index in self.network.neighbors(index){
                if prob_dist.sample(&mut self.rng_type) < lambda {
                    self.new_infected_list.push(n_index);
                }
            }
        }
    }

    fn merge(&mut self)
    {
        for n_index in self.new_infected_list.drain(..){
            if self.states[n_index].sus_check() {
                self.states[n_index] = InfectionState::Infected;
                self.infected_list.push(n_index);
            }
        }
        self.infected_list.sort_unstable();
    }

    pub fn propagate_one_time_step(&mut self)
    {
        self.cure();
        self.spread();
        self.merge();
    }

    /// Records the current state as step 0, then runs
    /// `iteration_count - 1` steps.
    pub fn propagate_curve(&mut self) -> InfectionCurve
    {
        let steps = self.params.iteration_count;
        let mut curve = Vec::with_capacity(steps);
        curve.push((0, self.infected_fraction()));
        for step in 1..steps{
            if !self.infected_list.is_empty() {
                self.propagate_one_time_step();
            }
            curve.push((step, self.infected_fraction()));
        }
        curve
    }
}
