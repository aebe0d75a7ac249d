//all the methods of calculating averages and variances etc.

use crate::{
    error::*,
    misc_types::*,
};

#[derive(Clone, Debug, PartialEq)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance(&self) -> f64
    {
        self.var
    }

    pub fn from_slice(slice: &[f64]) -> Self
    {
        let mean = calc_average(slice);
        let var = calc_variance(slice, mean);
        Self{
            mean,
            var
        }
    }
}

/// Mean and variance of the infected fraction at every step of an ensemble
#[derive(Clone, Debug)]
pub struct CurveStatistics
{
    pub samples: usize,
    pub per_step: Vec<MyVariance>
}

impl CurveStatistics
{
    pub fn from_curves(curves: &[InfectionCurve]) -> Result<Self>
    {
        let len = match curves.first()
        {
            None => return Err(SimError::invalid("curves", "need at least one curve")),
            Some(c) => c.len()
        };
        if let Some(bad) = curves.iter().position(|c| c.len() != len) {
            return Err(SimError::invalid(
                "curves",
                format!("curve {bad} has {} steps, expected {len}", curves[bad].len())
            ));
        }

        let mut column = Vec::with_capacity(curves.len());
        let per_step = (0..len)
            .map(
                |step|
                {
                    column.clear();
                    column.extend(curves.iter().map(|c| c[step].1));
                    MyVariance::from_slice(&column)
                }
            ).collect();
        Ok(Self{samples: curves.len(), per_step})
    }

    pub fn len(&self) -> usize
    {
        self.per_step.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.per_step.is_empty()
    }

    pub fn mean_curve(&self) -> InfectionCurve
    {
        self.per_step.iter()
            .enumerate()
            .map(|(step, v)| (step, v.mean))
            .collect()
    }
}

pub fn calc_average(slice: &[f64]) -> f64
{
    if slice.is_empty() {
        return 0.0;
    }
    slice.iter().sum::<f64>() / slice.len() as f64
}

pub fn calc_variance(slice: &[f64], average: f64) -> f64
{
    if slice.is_empty() {
        return 0.0;
    }
    let var_sum: f64 = slice.iter()
        .map(|val| {
            let dif = average - val;
            dif * dif
        }).sum();

    var_sum / slice.len() as f64
}
