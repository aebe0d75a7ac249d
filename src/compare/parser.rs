use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::{num::*, path::PathBuf},
    pagerank_vax::{
        error::*,
        json_parsing::*,
        misc_types::*,
        network::EdgeListOptions,
        sir_model::SimulationConfig,
    },
};

#[derive(Debug, StructOpt, Clone)]
/// Compare no vaccination, random vaccination and PageRank vaccination
pub struct Compare
{
    /// Specify the json file with the options
    /// If neither this nor a graph is given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// File containing the edge list of the network, overrides the json
    #[structopt(short = "g", long = "input-graph", parse(from_os_str))]
    graph: Option<PathBuf>,

    /// Ratio of initially infected individuals
    #[structopt(short = "i", long)]
    infected: Option<f64>,

    /// Ratio of vaccinated individuals
    #[structopt(short = "v", long)]
    vaccinate: Option<f64>,

    /// Probability of being cured per step when infected
    #[structopt(short = "H", long)]
    heal: Option<f64>,

    /// Probability of contaminating each neighbor per step when infected
    #[structopt(short = "c", long)]
    contamination: Option<f64>,

    /// Number of steps of the simulation
    #[structopt(short = "t", long)]
    iteration: Option<usize>,

    /// Number of runs per policy, curves are averaged
    #[structopt(long)]
    samples: Option<NonZeroUsize>,

    #[structopt(long)]
    seed: Option<u64>,

    /// Treat every edge as undirected
    #[structopt(long)]
    symmetric: bool,

    /// Where to write the curves, derived from the parameters if omitted
    #[structopt(long, parse(from_os_str))]
    out: Option<PathBuf>,
}

impl Compare {
    pub fn parse(&self) -> Result<Option<(CompareParams, Value)>>
    {
        let parsed = match (&self.json, &self.graph)
        {
            (None, None) => return parse::<String, CompareParams>(None),
            (Some(file), _) => parse_file(file)?,
            (None, Some(_)) => {
                let param = CompareParams::default();
                let json = serde_json::to_value(&param)?;
                (param, json)
            }
        };
        let param = self.apply_overrides(parsed.0);
        // header should show what was actually run
        let json = serde_json::to_value(&param)?;
        Ok(Some((param, json)))
    }

    fn apply_overrides(&self, mut param: CompareParams) -> CompareParams
    {
        let sim = &mut param.simulation;
        if let Some(graph) = &self.graph {
            param.graph = graph.clone();
        }
        if let Some(v) = self.infected {
            sim.initial_infected_ratio = v;
        }
        if let Some(v) = self.vaccinate {
            sim.vaccinated_ratio = v;
        }
        if let Some(v) = self.heal {
            sim.cure_probability = v;
        }
        if let Some(v) = self.contamination {
            sim.contamination_probability = v;
        }
        if let Some(v) = self.iteration {
            sim.iteration_count = v;
        }
        if let Some(v) = self.seed {
            sim.seed = v;
        }
        if let Some(v) = self.samples {
            param.samples = v;
        }
        if self.symmetric {
            param.edge_list.symmetric = true;
        }
        if self.out.is_some() {
            param.out = self.out.clone();
        }
        param
    }

    pub fn execute(&self) -> Result<()>
    {
        match self.parse()?
        {
            None => Ok(()),
            Some((param, json)) => super::execute::run_comparison(param, json)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct CompareParams
{
    pub graph: PathBuf,
    pub edge_list: EdgeListOptions,
    /// the policy field is ignored, every policy is run
    pub simulation: SimulationConfig,
    pub samples: NonZeroUsize,
    pub out: Option<PathBuf>
}

impl CompareParams
{
    pub fn quick_name(&self) -> String
    {
        let sim = &self.simulation;
        let stem = self.graph
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "graph".to_owned());
        format!(
            "v{}Compare_{}Inf{}Vac{}Cont{}Cure{}T{}Sam{}SS{}.curves",
            pagerank_vax::VERSION,
            stem,
            sim.initial_infected_ratio,
            sim.vaccinated_ratio,
            sim.contamination_probability,
            sim.cure_probability,
            sim.iteration_count,
            self.samples,
            sim.seed
        )
    }

    pub fn output_path(&self) -> PathBuf
    {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.quick_name()))
    }
}

impl Default for CompareParams
{
    fn default() -> Self {
        Self{
            graph: PathBuf::from("graph.csv"),
            edge_list: EdgeListOptions::default(),
            simulation: SimulationConfig::default(),
            samples: DEFAULT_SAMPLES,
            out: None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cmd = Compare::from_iter(&[
            "compare", "-g", "net.txt", "-v", "0.3", "-H", "0.1", "-t", "20", "--symmetric"
        ]);
        let (param, json) = cmd.parse().unwrap().unwrap();
        assert_eq!(param.graph, PathBuf::from("net.txt"));
        assert_eq!(param.simulation.vaccinated_ratio, 0.3);
        assert_eq!(param.simulation.cure_probability, 0.1);
        assert_eq!(param.simulation.iteration_count, 20);
        assert!(param.edge_list.symmetric);
        assert_eq!(json["simulation"]["iteration_count"], 20);
        assert!(param.quick_name().starts_with(&format!("v{}Compare_net", pagerank_vax::VERSION)));
    }
}
