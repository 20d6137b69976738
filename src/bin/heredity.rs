//! Print the gene and trait distributions of every person in a family data file.
//!
//! ```text
//! heredity data/family0.csv
//! heredity --engine sampling --samples 100000 --seed 7 data/family0.csv
//! ```

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use heredity::io::load_population;
use heredity::{
    EnumerationEngine,
    GeneCount,
    ImportanceSamplingEngine,
    InferenceEngine,
    Marginals,
    ParallelEnumerationEngine,
    ProbabilityModel,
    Result
};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use std::path::PathBuf;
use std::process;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum Engine {
    /// Exact enumeration on a single thread
    Exact,

    /// Exact enumeration across a thread pool
    Parallel,

    /// Likelihood weighted importance sampling
    Sampling,
}

#[derive(Parser, Debug)]
#[command(name = "heredity", version, about = "Infer gene and trait distributions over a family tree.")]
struct Args {
    /// CSV file with columns name, mother, father, trait
    data: PathBuf,

    /// Probability that a transmitted gene mutates
    #[arg(long, value_name = "RATE", default_value_t = 0.01)]
    mutation: f64,

    /// Inference engine to run
    #[arg(long, value_enum, default_value_t = Engine::Exact)]
    engine: Engine,

    /// Number of samples for the sampling engine
    #[arg(long, value_name = "NUMBER", default_value_t = 100_000)]
    samples: usize,

    /// Seed for the sampling engine
    #[arg(long, value_name = "NUMBER", default_value_t = 0)]
    seed: u64,

    /// Worker threads for the parallel engine; rayon's global pool if absent
    #[arg(long, value_name = "NUMBER")]
    threads: Option<usize>,
}

fn run(args: &Args) -> Result<Marginals> {
    let population = load_population(&args.data)?;
    let model = ProbabilityModel::default().with_mutation(args.mutation)?;
    info!("loaded {} people from {}", population.len(), args.data.display());

    match args.engine {
        Engine::Exact => EnumerationEngine::new(&population, &model).infer(),
        Engine::Parallel => match args.threads {
            Some(threads) => ParallelEnumerationEngine::with_threads(&population, &model, threads)?.infer(),
            None => ParallelEnumerationEngine::new(&population, &model).infer(),
        },
        Engine::Sampling => {
            let rng = StdRng::seed_from_u64(args.seed);
            ImportanceSamplingEngine::new(&population, &model, args.samples, rng).infer()
        }
    }
}

fn print(marginals: &Marginals) {
    for (name, dist) in marginals.iter() {
        println!("{}:", name);
        println!("  Gene:");
        for genes in GeneCount::ALL.iter().rev() {
            println!("    {}: {:.4}", genes.index(), dist.gene(*genes));
        }
        println!("  Trait:");
        for &present in [true, false].iter() {
            println!("    {}: {:.4}", if present { "True" } else { "False" }, dist.has_trait(present));
        }
    }
}

fn main() {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(marginals) => print(&marginals),
        Err(e) => {
            eprintln!("heredity: {}", e);
            process::exit(1);
        }
    }
}
