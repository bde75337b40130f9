use anyhow::{Context, Result};
use caption_match::{
    answer::{AnswerSource, ScriptedSource, TerminalSource},
    config::Config,
    experiment,
    presentation::PresenterKind,
    scoring::TrueNegativeScope,
};
use clap::Parser;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use std::{env, io, num::NonZeroUsize, path::PathBuf};

#[derive(Debug, Clone, Parser)]
/// Matching experiment: annotators match shuffled images with captions.
struct Args {
    /// Number of shuffled batches to annotate [default: 1]
    #[clap(short, long)]
    batches: Option<NonZeroUsize>,
    /// Number of examples per batch [default: 3]
    #[clap(short, long)]
    examples: Option<NonZeroUsize>,
    /// Caption dataset file [default: captions.json]
    #[clap(short, long)]
    dataset: Option<PathBuf>,
    /// Statistics output file [default: statistics.json]
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Random seed [default: 1234567]
    #[clap(long)]
    seed: Option<u64>,
    /// Labels counted as true negatives, 'configured' or 'batch' [default: configured]
    #[clap(long)]
    true_negatives: Option<TrueNegativeScope>,
    /// How images are shown, 'terminal' or 'window' [default: terminal]
    #[clap(long)]
    presenter: Option<PresenterKind>,
    /// json5 configuration file. Command line options take precedence.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Replay answers from a file, one line per prompt.
    #[clap(long)]
    answers: Option<PathBuf>,
}

impl Args {
    fn load_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::open(path)
                .with_context(|| format!("failed to load config file '{}'", path.display()))?,
            None => Config::default(),
        };

        if let Some(batches) = self.batches {
            config.batches = batches;
        }
        if let Some(examples) = self.examples {
            config.examples = examples;
        }
        if let Some(dataset) = &self.dataset {
            config.dataset_file = dataset.clone();
        }
        if let Some(output) = &self.output {
            config.output_file = output.clone();
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(scope) = self.true_negatives {
            config.true_negatives = scope;
        }
        if let Some(presenter) = self.presenter {
            config.presenter = presenter;
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    // setup logger
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => builder.parse_filters(&filters),
        Err(_) => builder.filter_level(LevelFilter::Info),
    };
    builder.init();

    // parse arguments
    let args = Args::parse();
    let config = args.load_config()?;
    info!("{:?}", config);

    let mut source: Box<dyn AnswerSource> = match &args.answers {
        Some(path) => Box::new(ScriptedSource::load(path)?),
        None => Box::new(TerminalSource::new()),
    };
    let mut presenter = config.presenter.build()?;
    let mut rng = StdRng::seed_from_u64(config.seed);

    experiment::run(
        &config,
        &mut rng,
        &mut *source,
        &mut *presenter,
        &mut io::stdout(),
    )?;

    Ok(())
}
