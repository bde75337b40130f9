//! The experiment procedure: quiz rounds, answer collection, scoring.

use crate::{
    answer::{collect_answers, Answer, AnswerSource},
    common::*,
    config::Config,
    dataset::CaptionDataset,
    presentation::{caption_listing, Figure, Presenter},
    quiz::QuizGenerator,
    scoring::{ConfusionCounts, Statistics},
};

#[derive(Debug, Clone)]
pub struct Experiment<'a> {
    config: &'a Config,
    generator: QuizGenerator<'a>,
}

impl<'a> Experiment<'a> {
    pub fn new(config: &'a Config, dataset: &'a CaptionDataset) -> Result<Self> {
        let generator = QuizGenerator::new(dataset, config.examples)?;
        Ok(Self { config, generator })
    }

    /// Runs every quiz round and returns the answers in collection order.
    pub fn collect<R, S, P, W>(
        &self,
        rng: &mut R,
        source: &mut S,
        presenter: &mut P,
        console: &mut W,
    ) -> Result<Vec<Answer>>
    where
        R: Rng + ?Sized,
        S: AnswerSource + ?Sized,
        P: Presenter + ?Sized,
        W: Write + ?Sized,
    {
        let num_batches = self.config.batches.get();
        let mut answers = vec![];

        for batch_index in 0..num_batches {
            let quiz = self.generator.generate(batch_index, rng)?;

            presenter.show(&Figure::new(&quiz, num_batches))?;
            writeln!(console, "{}", caption_listing(&quiz.captions))?;
            console.flush()?;

            let batch_answers = collect_answers(&quiz, source)?;
            presenter.close()?;

            info!(
                "collected {} answers for batch {} of {}",
                batch_answers.len(),
                batch_index,
                num_batches
            );
            answers.extend(batch_answers);
        }

        Ok(answers)
    }

    pub fn score(&self, answers: &[Answer]) -> Result<Statistics> {
        let counts = ConfusionCounts::from_answers(
            answers,
            self.config.true_negatives,
            self.config.examples.get(),
        );
        info!("confusion counts {:?}", counts);
        Statistics::from_counts(counts)
    }
}

/// Loads the dataset, runs the experiment and writes the statistics file.
pub fn run<R, S, P, W>(
    config: &Config,
    rng: &mut R,
    source: &mut S,
    presenter: &mut P,
    console: &mut W,
) -> Result<Statistics>
where
    R: Rng + ?Sized,
    S: AnswerSource + ?Sized,
    P: Presenter + ?Sized,
    W: Write + ?Sized,
{
    let dataset = CaptionDataset::load(&config.dataset_file)?;
    let experiment = Experiment::new(config, &dataset)?;

    let answers = experiment.collect(rng, source, presenter, console)?;
    let stats = experiment.score(&answers)?;

    writeln!(console, "{}", stats.summary_line())?;
    stats.table().print(console)?;
    stats.save(&config.output_file)?;

    Ok(stats)
}
