use {
    super::parser::*,
    serde_json::Value,
    std::time::{Duration, Instant},
    rand::{Rng, SeedableRng},
    rand_pcg::Pcg64,
    tracing::{info, warn},
    pagerank_vax::{
        *,
        misc_types::*,
        network::{load_edge_list, AdjacencyMatrix},
        sir_model::SirWriter,
        stats_methods::CurveStatistics,
    },
};

pub fn run_comparison(param: CompareParams, json: Value) -> Result<()>
{
    let graph = load_edge_list(&param.graph, &param.edge_list)?;
    let sim = &param.simulation;
    sim.validate()?;
    println!(
        "Graph: {}\nNodes: {}\nEdges: {}\nDensity: {}\
        \nRatio of initially infected individuals: {}\
        \nRatio of vaccinated individuals: {}\
        \nProbability of contaminating each neighbor when infected: {}\
        \nProbability of being cured when infected: {}\
        \nNumber of iterations: {}\nSamples per policy: {}",
        param.graph.display(),
        graph.info.nodes,
        graph.info.edges,
        graph.info.density,
        sim.initial_infected_ratio,
        sim.vaccinated_ratio,
        sim.contamination_probability,
        sim.cure_probability,
        sim.iteration_count,
        param.samples
    );

    // every policy sees the same seeds
    let seeds = sample_seeds(sim.seed, param.samples.get());

    let mut results = Vec::with_capacity(VaccinationPolicy::ALL.len());
    for policy in VaccinationPolicy::ALL
    {
        let start = Instant::now();
        let stats = run_policy(&graph.adjacency, &sim.with_policy(policy), &seeds)?;
        let elapsed = start.elapsed();
        info!(%policy, ?elapsed, "policy done");
        results.push((policy, stats, elapsed));
    }

    print_timings(&results);

    let path = param.output_path();
    let mut writer = SirWriter::create(&path)?;
    writer.write_header(&[json])?;
    let columns: Vec<_> = results.iter()
        .map(|(policy, stats, _)| (policy.name(), stats))
        .collect();
    writer.write_statistics(&columns)?;
    println!("Curves written to {}", path.display());
    Ok(())
}

/// One seed per sample, drawn from a `Pcg64` seeded with `master`
pub fn sample_seeds(master: u64, samples: usize) -> Vec<u64>
{
    let mut sir_rng = Pcg64::seed_from_u64(master);
    (0..samples)
        .map(|_| sir_rng.gen())
        .collect()
}

fn run_policy(adjacency: &AdjacencyMatrix, config: &SimulationConfig, seeds: &[u64]) -> Result<CurveStatistics>
{
    let bar = indication_bar(seeds.len() as u64);
    bar.set_message(config.policy.name());

    let mut curves: Vec<InfectionCurve> = Vec::with_capacity(seeds.len());
    for &seed in seeds
    {
        let outcome = simulate(adjacency, &config.with_seed(seed))?;
        for w in outcome.warnings()
        {
            warn!(policy = %config.policy, seed, "{w}");
        }
        curves.push(outcome.curve);
        bar.inc(1);
    }
    bar.finish_and_clear();
    CurveStatistics::from_curves(&curves)
}

fn print_timings(results: &[(VaccinationPolicy, CurveStatistics, Duration)])
{
    println!("Time spent to run each simulation:");
    for (policy, _, elapsed) in results
    {
        println!("{}: {}", policy.name(), humantime::format_duration(*elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_seeds_follow_master_stream() {
        let seeds = sample_seeds(DEFAULT_SIR_SEED, 5);
        let mut rng = Pcg64::seed_from_u64(DEFAULT_SIR_SEED);
        let expected: Vec<u64> = (0..5).map(|_| rng.gen()).collect();
        assert_eq!(seeds, expected);
        // more samples extend the list, earlier seeds stay put
        assert_eq!(&sample_seeds(DEFAULT_SIR_SEED, 8)[..5], &seeds[..]);
        assert_ne!(sample_seeds(DEFAULT_SIR_SEED + 1, 5), seeds);
    }
}
