use{
    serde::{Serialize, Deserialize},
    rand::{Rng, seq::index},
    std::fmt,
};

#[derive(Debug, Clone, Serialize, Deserialize, Copy, PartialEq, Eq, Hash)]
pub enum VaccinationPolicy{
    /// nobody gets vaccinated, whatever the ratio says
    None,
    Random,
    /// highest page rank first
    Ranked,
}

impl VaccinationPolicy{
    pub const ALL: [VaccinationPolicy; 3] = [Self::None, Self::Random, Self::Ranked];

    pub fn name(self) -> &'static str
    {
        match self{
            Self::None => "NoVaccination",
            Self::Random => "RandomVaccination",
            Self::Ranked => "PageRankVaccination",
        }
    }

    pub fn effective_ratio(self, vaccinated_ratio: f64) -> f64
    {
        match self{
            Self::None => 0.0,
            _ => vaccinated_ratio
        }
    }
}

impl fmt::Display for VaccinationPolicy{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where the vaccinated nodes come from
#[derive(Debug, Clone, Copy)]
pub enum VaccinationSelector<'a>{
    Nobody,
    Random,
    /// prefix of an importance ranking
    Ranked(&'a [usize]),
}

/// floor(population * ratio)
pub fn count_from_ratio(population: usize, ratio: f64) -> usize
{
    ((population as f64 * ratio).floor() as usize).min(population)
}

impl<'a> VaccinationSelector<'a>{
    /// Exactly `count_from_ratio(population, ratio)` distinct indices,
    /// except for `Nobody` which is always empty.
    pub fn select<R: Rng>(self, population: usize, ratio: f64, rng: &mut R) -> Vec<usize>
    {
        let amount = count_from_ratio(population, ratio);
        match self{
            Self::Nobody => Vec::new(),
            Self::Random => select_random(population, amount, rng),
            Self::Ranked(ranking) => select_ranked(ranking, amount),
        }
    }
}

/// uniform sample without replacement
pub fn select_random<R: Rng>(population: usize, amount: usize, rng: &mut R) -> Vec<usize>
{
    index::sample(rng, population, amount.min(population)).into_vec()
}

pub fn select_ranked(ranking: &[usize], amount: usize) -> Vec<usize>
{
    ranking.iter()
        .take(amount)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;
    use std::collections::HashSet;

    #[test]
    fn count_is_floored() {
        assert_eq!(count_from_ratio(10, 0.25), 2);
        assert_eq!(count_from_ratio(4, 0.5), 2);
        assert_eq!(count_from_ratio(7, 0.0), 0);
        assert_eq!(count_from_ratio(3, 1.0), 3);
    }

    #[test]
    fn random_selection_is_distinct_and_in_range() {
        let mut rng = Pcg64::seed_from_u64(77);
        let chosen = VaccinationSelector::Random.select(100, 0.37, &mut rng);
        assert_eq!(chosen.len(), 37);
        let set: HashSet<_> = chosen.iter().collect();
        assert_eq!(set.len(), 37);
        assert!(chosen.iter().all(|&i| i < 100));
    }

    #[test]
    fn ranked_selection_takes_prefix() {
        let ranking = [4, 2, 0, 1, 3];
        let mut rng = Pcg64::seed_from_u64(1);
        let chosen = VaccinationSelector::Ranked(&ranking).select(5, 0.5, &mut rng);
        assert_eq!(chosen, vec![4, 2]);
    }

    #[test]
    fn zero_ratio_selects_nobody() {
        let mut rng = Pcg64::seed_from_u64(1);
        assert!(VaccinationSelector::Random.select(50, 0.0, &mut rng).is_empty());
        assert!(VaccinationSelector::Ranked(&[0, 1]).select(2, 0.0, &mut rng).is_empty());
        assert!(VaccinationSelector::Nobody.select(50, 0.9, &mut rng).is_empty());
    }

    #[test]
    fn none_policy_ignores_ratio() {
        assert_eq!(VaccinationPolicy::None.effective_ratio(0.4), 0.0);
        assert_eq!(VaccinationPolicy::Ranked.effective_ratio(0.4), 0.4);
    }
}
