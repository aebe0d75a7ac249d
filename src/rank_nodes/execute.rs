use {
    super::parser::*,
    std::io,
    serde_json::Value,
    tracing::warn,
    pagerank_vax::{
        error::Result,
        network::{load_edge_list, TransitionMatrix},
        page_rank::rank,
        sir_model::write_jsons,
    },
};

pub fn print_ranking(param: RankParams, json: Value) -> Result<()>
{
    write_jsons(&[json], io::stdout().lock())?;
    let graph = load_edge_list(&param.graph, &param.edge_list)?;
    println!(
        "Graph: {}\nNodes: {}\nEdges: {}\nDensity: {}",
        param.graph.display(),
        graph.info.nodes,
        graph.info.edges,
        graph.info.density
    );

    let transition = TransitionMatrix::from_adjacency(&graph.adjacency);
    let res = rank(&transition, &param.page_rank)?;
    if !res.converged {
        warn!(iterations = res.iterations, residual = res.residual, "ranking is a best effort");
    }
    println!(
        "Iterations: {}\nConverged: {}\n#Rank Node Importance",
        res.iterations,
        res.converged
    );
    for (place, &index) in res.top(param.top).iter().enumerate()
    {
        println!("{} {} {:e}", place + 1, graph.labels[index], res.importance[index]);
    }
    Ok(())
}
