use crate::{common::*, presentation::PresenterKind, scoring::TrueNegativeScope};

pub const DEFAULT_SEED: u64 = 1234567;
pub const DEFAULT_BATCHES: NonZeroUsize = non_zero(1);
pub const DEFAULT_EXAMPLES: NonZeroUsize = non_zero(3);

const fn non_zero(value: usize) -> NonZeroUsize {
    match NonZeroUsize::new(value) {
        Some(value) => value,
        None => panic!("default value must be non-zero"),
    }
}

/// Experiment configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file listing the caption records.
    pub dataset_file: PathBuf,
    /// File the statistics are written to.
    pub output_file: PathBuf,
    /// Number of quiz rounds.
    pub batches: NonZeroUsize,
    /// Number of images and captions per round.
    pub examples: NonZeroUsize,
    /// Seed of the random generator used for sampling and shuffling.
    pub seed: u64,
    /// The label universe for true negative counting.
    pub true_negatives: TrueNegativeScope,
    pub presenter: PresenterKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_file: PathBuf::from("captions.json"),
            output_file: PathBuf::from("statistics.json"),
            batches: DEFAULT_BATCHES,
            examples: DEFAULT_EXAMPLES,
            seed: DEFAULT_SEED,
            true_negatives: TrueNegativeScope::default(),
            presenter: PresenterKind::default(),
        }
    }
}

impl Config {
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let text = fs::read_to_string(path)?;
        let config = json5::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("experiment.json5");
        fs::write(
            &path,
            r#"{
                // two rounds of five
                batches: 2,
                examples: 5,
                true_negatives: "batch",
            }"#,
        )?;

        let config = Config::open(&path)?;
        assert_eq!(config.batches.get(), 2);
        assert_eq!(config.examples.get(), 5);
        assert_eq!(config.true_negatives, TrueNegativeScope::Batch);
        assert_eq!(config.dataset_file, Path::new("captions.json"));
        assert_eq!(config.seed, DEFAULT_SEED);
        Ok(())
    }

    #[test]
    fn default_config_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("experiment.json5");
        fs::write(&path, "{}")?;

        let config = Config::open(&path)?;
        assert_eq!(config, Config::default());
        assert_eq!(config.batches.get(), 1);
        assert_eq!(config.examples.get(), 3);
        assert_eq!(config.output_file, Path::new("statistics.json"));
        assert_eq!(config.true_negatives, TrueNegativeScope::Configured);
        assert_eq!(config.presenter, PresenterKind::Terminal);
        Ok(())
    }

    #[test]
    fn zero_examples_test() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("experiment.json5");
        fs::write(&path, "{ examples: 0 }")?;
        assert!(Config::open(&path).is_err());
        Ok(())
    }
}
