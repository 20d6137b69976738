//! Defines the `Sampler` traits - objects that can randomly draw `World`s from the inheritance
//! model of a `Population`.

use crate::model::{Population, ProbabilityModel};
use crate::world::{GeneCount, World};

use ndarray::prelude as nd;
use rand::Rng;

pub mod forward;
pub mod likelihood;

pub use self::forward::ForwardSampler;
pub use self::likelihood::LikelihoodWeightedSampler;

pub trait Sampler {

    /// Draw a full `World` from the associated model.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> World;

}


/// A sample (a full `World`) and the associated weight.
/// Used for likelihood weighting.
#[derive(Clone, Debug)]
pub struct WeightedSample(pub World, pub f64);

pub trait WeightedSampler {

    fn weighted_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> WeightedSample;

}


/// Draw an index from the categorical distribution `p`
fn draw<R: Rng + ?Sized>(p: nd::ArrayView1<f64>, rng: &mut R) -> usize {
    let u: f64 = rng.gen();
    let mut upper = 0.0;

    for (i, &pi) in p.iter().enumerate() {
        upper += pi;
        if u < upper {
            return i;
        }
    }

    // rounding can leave the cumulative total just short of 1
    p.iter().rposition(|&pi| pi > 0.0).unwrap_or(0)
}


/// Draw the gene count of the person at `idx` given the genes already drawn for their parents
fn draw_genes<R: Rng + ?Sized>(
    population: &Population,
    model: &ProbabilityModel,
    world: &World,
    idx: usize,
    rng: &mut R
) -> GeneCount {
    let row = match population.parents_of(idx) {
        None => model.prior_row(),
        Some((mother, father)) => model.inheritance_row(world.genes(mother), world.genes(father))
    };

    // draw only returns indices into a row over gene counts
    GeneCount::from_index(draw(row, rng)).unwrap_or(GeneCount::Zero)
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draw_frequencies() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = array![0.2, 0.0, 0.8];
        let mut counts = [0; 3];

        for _ in 0..10_000 {
            counts[draw(p.view(), &mut rng)] += 1;
        }

        assert_eq!(0, counts[1]);
        let freq = counts[0] as f64 / 10_000.0;
        assert!((freq - 0.2).abs() < 0.02);
    }

    #[test]
    fn draw_degenerate() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = array![0.0, 1.0, 0.0];

        for _ in 0..100 {
            assert_eq!(1, draw(p.view(), &mut rng));
        }
    }

}
