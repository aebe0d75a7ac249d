use{
    std::ops::Deref,
    super::AdjacencyMatrix,
};

/// Row-stochastic matrix derived from an [`AdjacencyMatrix`].
///
/// Rows of dangling nodes (no outgoing weight) stay all-zero. That mass is
/// not redistributed; the teleportation term of the ranker still gives
/// those nodes a nonzero share, which is accepted as an approximation.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMatrix(AdjacencyMatrix);

impl Deref for TransitionMatrix
{
    type Target = AdjacencyMatrix;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TransitionMatrix
{
    pub fn from_adjacency(adjacency: &AdjacencyMatrix) -> Self
    {
        let mut transition = adjacency.clone();
        for i in 0..transition.size()
        {
            let out = transition.out_weight(i);
            if out > 0.0 {
                transition.row_mut(i)
                    .iter_mut()
                    .for_each(|w| *w /= out);
            }
        }
        Self(transition)
    }

    pub fn is_dangling(&self, i: usize) -> bool
    {
        self.0.row(i).iter().all(|w| *w == 0.0)
    }
}

impl From<&AdjacencyMatrix> for TransitionMatrix
{
    fn from(adjacency: &AdjacencyMatrix) -> Self {
        Self::from_adjacency(adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_normalized_by_out_weight() {
        let adj = AdjacencyMatrix::from_rows(vec![
            vec![0.0, 1.0, 3.0],
            vec![2.0, 0.0, 2.0],
            vec![0.0, 0.0, 0.0],
        ]).unwrap();
        let t = TransitionMatrix::from_adjacency(&adj);

        assert!((t.get(0, 1) - 0.25).abs() < 1e-12);
        assert!((t.get(0, 2) - 0.75).abs() < 1e-12);
        assert!((t.out_weight(1) - 1.0).abs() < 1e-12);
        assert!(t.is_dangling(2));
        assert_eq!(t.out_weight(2), 0.0);
    }
}
