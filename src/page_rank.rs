//! Importance ranking by power iteration with teleportation (PageRank).
//!
//! Each step computes
//!
//! ```text
//! r' = s * (r · P) + (1 - s) * sum(r) / n
//! ```
//!
//! where `P` is the transition matrix and `s` the damping factor. Iteration
//! stops once the L1 distance between successive iterates drops to
//! `epsilon`. That criterion is a heuristic: graphs made of several
//! components without a common root may approach it slowly or hover around
//! it, so the loop is also bounded by `max_iterations` and the result says
//! whether it actually converged.

use{
    serde::{Serialize, Deserialize},
    tracing::{debug, warn},
    crate::{
        error::*,
        network::TransitionMatrix,
    },
};

pub const DEFAULT_DAMPING: f64 = 0.8;
pub const DEFAULT_EPSILON: f64 = 1e-4;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

#[derive(Serialize, Deserialize, Clone, Debug, Copy, PartialEq)]
pub struct PageRankOptions
{
    /// Probability of following an edge, `1 - damping` is the teleport probability
    pub damping: f64,
    /// Convergence threshold on the L1 distance of successive iterates
    pub epsilon: f64,
    pub max_iterations: usize
}

impl Default for PageRankOptions
{
    fn default() -> Self {
        Self{
            damping: DEFAULT_DAMPING,
            epsilon: DEFAULT_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS
        }
    }
}

impl PageRankOptions
{
    pub fn validate(&self) -> Result<()>
    {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SimError::invalid("damping", format!("{} is outside (0, 1)", self.damping)));
        }
        if !(self.epsilon > 0.0) {
            return Err(SimError::invalid("epsilon", format!("{} is not positive", self.epsilon)));
        }
        if self.max_iterations == 0 {
            return Err(SimError::invalid("max_iterations", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct PageRankResult
{
    /// Stationary importance per node, normalized to sum to 1
    pub importance: Vec<f64>,
    /// Node indices by descending importance, ties by ascending index
    pub ranking: Vec<usize>,
    pub iterations: usize,
    /// L1 distance between the last two iterates
    pub residual: f64,
    pub converged: bool
}

impl PageRankResult
{
    /// Turn a capped, non-converged run into an error for callers that
    /// cannot live with a best-effort ranking.
    pub fn require_convergence(self) -> Result<Self>
    {
        if self.converged {
            Ok(self)
        } else {
            Err(SimError::NonConvergence{
                iterations: self.iterations,
                residual: self.residual
            })
        }
    }

    /// The `count` most important nodes
    pub fn top(&self, count: usize) -> &[usize]
    {
        &self.ranking[..count.min(self.ranking.len())]
    }
}

/// Validates `options` and ranks the nodes of `transition`.
pub fn rank(transition: &TransitionMatrix, options: &PageRankOptions) -> Result<PageRankResult>
{
    options.validate()?;
    Ok(page_rank(transition, options))
}

/// Power iteration. Assumes `options` were validated.
pub fn page_rank(transition: &TransitionMatrix, options: &PageRankOptions) -> PageRankResult
{
    let n = transition.size();
    if n == 0 {
        return PageRankResult{
            importance: Vec::new(),
            ranking: Vec::new(),
            iterations: 0,
            residual: 0.0,
            converged: true
        };
    }
    let n_f64 = n as f64;
    let s = options.damping;

    let mut rank = vec![1.0 / n_f64; n];
    let mut next = vec![0.0; n];
    let mut iterations = 0;
    let mut residual = f64::INFINITY;

    while iterations < options.max_iterations
    {
        iterations += 1;
        let teleport = (1.0 - s) * rank.iter().sum::<f64>() / n_f64;
        next.iter_mut().for_each(|r| *r = teleport);

        for (i, &r_i) in rank.iter().enumerate()
        {
            if r_i == 0.0 {
                continue;
            }
            let share = s * r_i;
            for (j, p) in transition.row(i).iter().enumerate()
            {
                if *p > 0.0 {
                    next[j] += share * p;
                }
            }
        }

        residual = rank.iter()
            .zip(next.iter())
            .map(|(old, new)| (old - new).abs())
            .sum();
        std::mem::swap(&mut rank, &mut next);

        if residual <= options.epsilon {
            break;
        }
    }
    let converged = residual <= options.epsilon;

    if converged {
        debug!(iterations, residual, "page rank converged");
    } else {
        warn!(iterations, residual, "page rank hit the iteration cap without converging");
    }

    // dangling rows leak mass, the ranking is unaffected by rescaling
    let total: f64 = rank.iter().sum();
    if total > 0.0 {
        rank.iter_mut().for_each(|r| *r /= total);
    }

    PageRankResult{
        ranking: descending_order(&rank),
        importance: rank,
        iterations,
        residual,
        converged
    }
}

/// Indices sorted by descending value; sort is stable so ties keep index order
pub fn descending_order(values: &[f64]) -> Vec<usize>
{
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AdjacencyMatrix;

    fn star(leaves: usize) -> AdjacencyMatrix
    {
        let edges: Vec<_> = (1..=leaves).map(|leaf| (0, leaf)).collect();
        AdjacencyMatrix::from_undirected_edges(leaves + 1, &edges).unwrap()
    }

    #[test]
    fn hub_of_star_ranks_first() {
        let t = TransitionMatrix::from_adjacency(&star(6));
        let res = rank(&t, &PageRankOptions::default()).unwrap();
        assert!(res.converged);
        assert_eq!(res.ranking[0], 0);
        // leaves are symmetric, ties keep index order
        assert_eq!(&res.ranking[1..], &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn importance_sums_to_one() {
        let t = TransitionMatrix::from_adjacency(&star(4));
        let res = page_rank(&t, &PageRankOptions::default());
        let sum: f64 = res.importance.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dangling_nodes_still_get_mass() {
        // 0 -> 1 -> 2, node 2 has no outgoing edge
        let adj = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0],
        ]).unwrap();
        let res = page_rank(&TransitionMatrix::from_adjacency(&adj), &PageRankOptions::default());
        assert!(res.importance.iter().all(|r| *r > 0.0));
        assert_eq!(res.ranking[0], 2);
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let t = TransitionMatrix::from_adjacency(&star(10));
        let opt = PageRankOptions{epsilon: 1e-300, max_iterations: 3, ..Default::default()};
        let res = page_rank(&t, &opt);
        assert_eq!(res.iterations, 3);
        assert!(!res.converged);
        assert_eq!(res.ranking[0], 0);
        assert!(matches!(
            res.require_convergence(),
            Err(SimError::NonConvergence{iterations: 3, ..})
        ));
    }

    #[test]
    fn invalid_options_are_rejected() {
        let t = TransitionMatrix::from_adjacency(&star(2));
        for (opt, field) in [
            (PageRankOptions{damping: 1.0, ..Default::default()}, "damping"),
            (PageRankOptions{epsilon: 0.0, ..Default::default()}, "epsilon"),
            (PageRankOptions{max_iterations: 0, ..Default::default()}, "max_iterations"),
        ] {
            match rank(&t, &opt) {
                Err(SimError::InvalidInput{field: f, ..}) => assert_eq!(f, field),
                other => panic!("expected invalid {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_graph_gives_empty_ranking() {
        let t = TransitionMatrix::from_adjacency(&AdjacencyMatrix::new(0));
        let res = page_rank(&t, &PageRankOptions::default());
        assert!(res.ranking.is_empty());
        assert!(res.converged);
    }
}
