use{
    serde::{Serialize, Deserialize},
    crate::error::*,
};

/// Dense row-major n×n matrix of non-negative weights.
///
/// Used both for the adjacency structure (entry (i,j) > 0 is an edge from
/// i to j) and, wrapped in [`TransitionMatrix`](super::TransitionMatrix),
/// for the row-stochastic transition structure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix
{
    size: usize,
    weights: Vec<f64>
}

impl AdjacencyMatrix
{
    /// Matrix of `size` nodes without any edges
    pub fn new(size: usize) -> Self
    {
        Self{
            size,
            weights: vec![0.0; size * size]
        }
    }

    /// Build from explicit rows, failing fast on non-square input
    /// or on negative / non-finite entries.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self>
    {
        let size = rows.len();
        let mut weights = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate()
        {
            if row.len() != size {
                return Err(SimError::invalid(
                    "adjacency",
                    format!("row {i} has {} entries, expected {size}", row.len())
                ));
            }
            weights.extend(row);
        }
        let matrix = Self{size, weights};
        matrix.validate()?;
        Ok(matrix)
    }

    /// Undirected, unweighted matrix from an edge list over `size` nodes
    pub fn from_undirected_edges(size: usize, edges: &[(usize, usize)]) -> Result<Self>
    {
        let mut matrix = Self::new(size);
        for &(i, j) in edges
        {
            matrix.set(i, j, 1.0)?;
            matrix.set(j, i, 1.0)?;
        }
        Ok(matrix)
    }

    pub fn validate(&self) -> Result<()>
    {
        if self.weights.len() != self.size * self.size {
            return Err(SimError::invalid("adjacency", "matrix is not square"));
        }
        match self.weights.iter().position(|w| !w.is_finite() || *w < 0.0)
        {
            None => Ok(()),
            Some(pos) => Err(SimError::invalid(
                "adjacency",
                format!(
                    "entry ({}, {}) is {}, weights must be finite and non-negative",
                    pos / self.size,
                    pos % self.size,
                    self.weights[pos]
                )
            ))
        }
    }

    #[inline]
    pub fn size(&self) -> usize
    {
        self.size
    }

    pub fn is_empty(&self) -> bool
    {
        self.size == 0
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64
    {
        self.weights[i * self.size + j]
    }

    pub fn set(&mut self, i: usize, j: usize, weight: f64) -> Result<()>
    {
        if i >= self.size || j >= self.size {
            return Err(SimError::invalid(
                "adjacency",
                format!("index ({i}, {j}) out of range for {} nodes", self.size)
            ));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(SimError::invalid("adjacency", format!("weight {weight} is negative or not finite")));
        }
        self.weights[i * self.size + j] = weight;
        Ok(())
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64]
    {
        &self.weights[i * self.size..(i + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64]
    {
        let size = self.size;
        &mut self.weights[i * size..(i + 1) * size]
    }

    /// Sum of the outgoing weights of node `i`
    pub fn out_weight(&self, i: usize) -> f64
    {
        self.row(i).iter().sum()
    }

    /// Targets of the outgoing edges of `i`, in ascending order
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item=usize> + '_
    {
        self.row(i)
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > 0.0)
            .map(|(j, _)| j)
    }

    /// Number of nonzero entries, i.e. directed edges
    pub fn edge_count(&self) -> usize
    {
        self.weights.iter().filter(|w| **w > 0.0).count()
    }

    pub fn is_symmetric(&self) -> bool
    {
        (0..self.size).all(
            |i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i))
        )
    }

    /// Graph reduction: drop the rows and columns of `removed`.
    ///
    /// Survivors keep their relative order and are reindexed `0..n'`.
    /// Indices out of range are ignored.
    pub fn without_nodes(&self, removed: &[usize]) -> ReducedNetwork
    {
        let mut keep = vec![true; self.size];
        for &idx in removed
        {
            if let Some(k) = keep.get_mut(idx) {
                *k = false;
            }
        }
        let survivors: Vec<usize> = (0..self.size)
            .filter(|&i| keep[i])
            .collect();

        let reduced_size = survivors.len();
        let mut weights = Vec::with_capacity(reduced_size * reduced_size);
        for &i in survivors.iter()
        {
            let row = self.row(i);
            weights.extend(survivors.iter().map(|&j| row[j]));
        }

        ReducedNetwork{
            adjacency: Self{size: reduced_size, weights},
            survivors
        }
    }
}

/// Result of removing vaccinated nodes from a network.
#[derive(Clone, Debug)]
pub struct ReducedNetwork
{
    pub adjacency: AdjacencyMatrix,
    /// `survivors[k]` is the original index of reduced node `k`
    pub survivors: Vec<usize>
}
