//! Batch sampling and shuffling.

use crate::{common::*, dataset::CaptionDataset};

/// One shuffled quiz round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    /// Zero-based batch index.
    pub batch_index: usize,
    /// Images in display order.
    pub images: Vec<ImageItem>,
    /// Captions in display order. The annotator refers to a caption by its
    /// position in this list.
    pub captions: Vec<CaptionItem>,
    /// Record indices sampled into this batch.
    pub labels: LabelSet,
}

impl Quiz {
    pub fn num_examples(&self) -> usize {
        self.images.len()
    }

    /// The caption displayed at `position`.
    pub fn caption_at(&self, position: usize) -> Option<&CaptionItem> {
        self.captions.get(position)
    }
}

/// Draws quiz rounds from a dataset.
#[derive(Debug, Clone)]
pub struct QuizGenerator<'a> {
    dataset: &'a CaptionDataset,
    examples: NonZeroUsize,
}

impl<'a> QuizGenerator<'a> {
    pub fn new(dataset: &'a CaptionDataset, examples: NonZeroUsize) -> Result<Self> {
        ensure!(
            examples.get() <= dataset.len(),
            "cannot sample {} examples from a dataset of {} records",
            examples,
            dataset.len()
        );
        Ok(Self { dataset, examples })
    }

    pub fn examples(&self) -> usize {
        self.examples.get()
    }

    /// Draws distinct record indices uniformly at random.
    pub fn sample_labels<R>(&self, rng: &mut R) -> Vec<usize>
    where
        R: Rng + ?Sized,
    {
        rand::seq::index::sample(rng, self.dataset.len(), self.examples.get()).into_vec()
    }

    /// Samples a batch and shuffles its images and captions independently.
    pub fn generate<R>(&self, batch_index: usize, rng: &mut R) -> Result<Quiz>
    where
        R: Rng + ?Sized,
    {
        let sampled = self.sample_labels(rng);
        let labels: LabelSet = sampled.iter().copied().collect();
        debug!("batch {} sampled records {}", batch_index, labels);

        let mut images: Vec<ImageItem> = sampled
            .iter()
            .map(|&label| self.dataset.image_item(label))
            .try_collect()?;
        let mut captions: Vec<CaptionItem> = sampled
            .iter()
            .map(|&label| self.dataset.caption_item(label))
            .try_collect()?;

        images.shuffle(rng);
        captions.shuffle(rng);

        Ok(Quiz {
            batch_index,
            images,
            captions,
            labels,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::CaptionRecord;

    fn dataset(len: usize) -> CaptionDataset {
        let records = (0..len)
            .map(|index| CaptionRecord {
                image_name: format!("images/{}.jpg", index).into(),
                captions: vec![vec![format!("caption {}", index)]],
            })
            .collect();
        CaptionDataset::from_records(records)
    }

    #[test]
    fn sample_labels_test() -> Result<()> {
        let dataset = dataset(20);
        let mut rng = StdRng::seed_from_u64(1234567);

        for examples in 1..=20 {
            let generator = QuizGenerator::new(&dataset, NonZeroUsize::new(examples).unwrap())?;
            for _ in 0..10 {
                let labels = generator.sample_labels(&mut rng);
                assert_eq!(labels.len(), examples);
                assert!(labels.iter().all(|&label| label < 20));
                assert_eq!(labels.iter().unique().count(), examples);
            }
        }
        Ok(())
    }

    #[test]
    fn too_many_examples_test() {
        let dataset = dataset(2);
        assert!(QuizGenerator::new(&dataset, NonZeroUsize::new(3).unwrap()).is_err());
    }

    #[test]
    fn generate_is_permutation_test() -> Result<()> {
        let dataset = dataset(10);
        let generator = QuizGenerator::new(&dataset, NonZeroUsize::new(5).unwrap())?;
        let mut rng = StdRng::seed_from_u64(7);

        for batch_index in 0..20 {
            let quiz = generator.generate(batch_index, &mut rng)?;
            assert_eq!(quiz.batch_index, batch_index);
            assert_eq!(quiz.num_examples(), 5);
            assert_eq!(quiz.labels.iter().count(), 5);
            assert_eq!(LabelSet::of_items(&quiz.images), quiz.labels);
            assert_eq!(LabelSet::of_items(&quiz.captions), quiz.labels);

            for image in &quiz.images {
                assert_eq!(image.data, PathBuf::from(format!("images/{}.jpg", image.label)));
            }
            for caption in &quiz.captions {
                assert_eq!(caption.data, format!("caption {}", caption.label));
            }
        }
        Ok(())
    }

    #[test]
    fn generate_is_deterministic_test() -> Result<()> {
        let dataset = dataset(10);
        let generator = QuizGenerator::new(&dataset, NonZeroUsize::new(4).unwrap())?;

        let lhs = generator.generate(0, &mut StdRng::seed_from_u64(99))?;
        let rhs = generator.generate(0, &mut StdRng::seed_from_u64(99))?;
        assert_eq!(lhs, rhs);
        Ok(())
    }
}
