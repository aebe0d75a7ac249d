use{
    structopt::StructOpt,
    serde::{Serialize, Deserialize},
    serde_json::Value,
    std::path::PathBuf,
    pagerank_vax::{
        error::*,
        json_parsing::*,
        misc_types::*,
        network::EdgeListOptions,
        page_rank::PageRankOptions,
    },
};

#[derive(Debug, StructOpt, Clone)]
/// Print the most important nodes of a network by PageRank
pub struct RankNodes
{
    /// Specify the json file with the options
    /// If neither this nor a graph is given, an example json will be printed
    #[structopt(long)]
    json: Option<String>,

    /// File containing the edge list of the network, overrides the json
    #[structopt(short = "g", long = "input-graph", parse(from_os_str))]
    graph: Option<PathBuf>,

    /// How many nodes to print
    #[structopt(long)]
    top: Option<usize>,

    /// Probability of following an edge instead of teleporting
    #[structopt(long)]
    damping: Option<f64>,

    #[structopt(long)]
    epsilon: Option<f64>,

    #[structopt(long)]
    max_iterations: Option<usize>,

    /// Treat every edge as undirected
    #[structopt(long)]
    symmetric: bool,
}

impl RankNodes {
    pub fn parse(&self) -> Result<Option<(RankParams, Value)>>
    {
        let mut param = match (&self.json, &self.graph)
        {
            (None, None) => return parse::<String, RankParams>(None),
            (Some(file), _) => parse_file::<_, RankParams>(file)?.0,
            (None, Some(_)) => RankParams::default()
        };
        if let Some(graph) = &self.graph {
            param.graph = graph.clone();
        }
        if let Some(top) = self.top {
            param.top = top;
        }
        if let Some(d) = self.damping {
            param.page_rank.damping = d;
        }
        if let Some(e) = self.epsilon {
            param.page_rank.epsilon = e;
        }
        if let Some(m) = self.max_iterations {
            param.page_rank.max_iterations = m;
        }
        if self.symmetric {
            param.edge_list.symmetric = true;
        }
        // report what was actually run
        let json = serde_json::to_value(&param)?;
        Ok(Some((param, json)))
    }

    pub fn execute(&self) -> Result<()>
    {
        match self.parse()?
        {
            None => Ok(()),
            Some((param, json)) => super::execute::print_ranking(param, json)
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RankParams
{
    pub graph: PathBuf,
    pub edge_list: EdgeListOptions,
    pub page_rank: PageRankOptions,
    pub top: usize
}

impl Default for RankParams
{
    fn default() -> Self {
        Self{
            graph: PathBuf::from("graph.csv"),
            edge_list: EdgeListOptions::default(),
            page_rank: PageRankOptions::default(),
            top: DEFAULT_TOP_NODES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_end_up_in_reported_json() {
        let cmd = RankNodes::from_iter(&[
            "rank", "-g", "ring.txt", "--top", "3", "--damping", "0.85", "--symmetric"
        ]);
        let (param, json) = cmd.parse().unwrap().unwrap();
        assert_eq!(param.graph, PathBuf::from("ring.txt"));
        assert_eq!(param.top, 3);
        assert_eq!(param.page_rank.damping, 0.85);
        assert!(param.edge_list.symmetric);
        assert_eq!(json["top"], 3);
        assert_eq!(json["page_rank"]["damping"], 0.85);
        assert_eq!(json["edge_list"]["symmetric"], true);
        assert_eq!(json["graph"], "ring.txt");
    }
}
