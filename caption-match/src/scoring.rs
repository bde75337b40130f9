//! Confusion counting and precision/recall statistics.

use crate::{answer::Answer, common::*};
use prettytable::{cell, row, Table};
use strum::{AsRefStr, Display, EnumString};

/// The label universe used when counting true negatives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TrueNegativeScope {
    /// The labels `0..examples`, shared by every batch.
    Configured,
    /// The record indices sampled into the answer's batch.
    Batch,
}

impl Default for TrueNegativeScope {
    fn default() -> Self {
        Self::Configured
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    pub true_positives: usize,
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ConfusionCounts {
    /// Counts every answer.
    ///
    /// `examples` is the configured batch size, only used by
    /// [TrueNegativeScope::Configured].
    pub fn from_answers<'a, I>(answers: I, scope: TrueNegativeScope, examples: usize) -> Self
    where
        I: IntoIterator<Item = &'a Answer>,
    {
        let configured = LabelSet::range(examples);

        answers
            .into_iter()
            .fold(Self::default(), |mut counts, answer| {
                let universe = match scope {
                    TrueNegativeScope::Configured => &configured,
                    TrueNegativeScope::Batch => &*answer.batch_labels,
                };
                counts.add_answer(answer, universe);
                counts
            })
    }

    /// Adds the counts of a single answer.
    pub fn add_answer(&mut self, answer: &Answer, universe: &LabelSet) {
        let image_label = answer.image.label;
        let mut has_correct_label = false;

        for caption in &answer.captions {
            if caption.label == image_label {
                has_correct_label = true;
                self.true_positives += 1;
            } else {
                self.false_positives += 1;
            }
        }

        if !has_correct_label {
            self.false_negatives += 1;
        }

        let present = answer.chosen_labels();
        self.true_negatives += universe
            .difference(&present)
            .filter(|&label| label != image_label)
            .count();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecRec<T>
where
    T: Copy,
{
    pub precision: T,
    pub recall: T,
}

impl TryFrom<&ConfusionCounts> for PrecRec<R64> {
    type Error = Error;

    fn try_from(counts: &ConfusionCounts) -> Result<Self, Self::Error> {
        let ConfusionCounts {
            true_positives: tp,
            false_positives: fp,
            false_negatives: fn_,
            ..
        } = *counts;

        ensure!(
            tp + fp > 0,
            "precision is undefined: no caption was selected in any answer"
        );
        ensure!(
            tp + fn_ > 0,
            "recall is undefined: there are no true positives and no false negatives"
        );

        Ok(Self {
            precision: r64(tp as f64 / (tp + fp) as f64),
            recall: r64(tp as f64 / (tp + fn_) as f64),
        })
    }
}

/// The persisted experiment summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub precision: R64,
    pub recall: R64,
    #[serde(flatten)]
    pub counts: ConfusionCounts,
}

impl Statistics {
    pub fn from_counts(counts: ConfusionCounts) -> Result<Self> {
        let PrecRec { precision, recall } = PrecRec::try_from(&counts)?;
        Ok(Self {
            precision,
            recall,
            counts,
        })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(
            File::create(path)
                .with_context(|| format!("failed to create statistics file '{}'", path.display()))?,
        );
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        info!("statistics written to '{}'", path.display());
        Ok(())
    }

    pub fn summary_line(&self) -> String {
        format!(
            "Precision is {:.3} and recall is {:.3}",
            self.precision.raw(),
            self.recall.raw()
        )
    }

    pub fn table(&self) -> Table {
        let ConfusionCounts {
            true_positives,
            true_negatives,
            false_positives,
            false_negatives,
        } = self.counts;

        let mut table = Table::new();
        table.add_row(row!["", "matched", "not matched"]);
        table.add_row(row!["selected", true_positives, false_positives]);
        table.add_row(row!["not selected", false_negatives, true_negatives]);
        table
    }
}
