use super::*;
use crate::{common::*, quiz::Quiz};

/// One annotator's caption selection for one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub image: ImageItem,
    pub captions: Vec<CaptionItem>,
    /// Record indices sampled into the batch the image was shown in.
    pub batch_labels: Arc<LabelSet>,
}

impl Answer {
    /// Labels among the chosen captions.
    pub fn chosen_labels(&self) -> LabelSet {
        LabelSet::of_items(&self.captions)
    }

    pub fn has_correct_caption(&self) -> bool {
        self.captions
            .iter()
            .any(|caption| caption.matches(&self.image))
    }
}

/// Formats the prompt shown for an image.
pub fn prompt_for(image: &ImageItem) -> String {
    format!("Image {:3} matches captions... ", image.label)
}

/// Prompts for one image until the annotator submits a valid selection.
pub fn collect_answer<S>(quiz: &Quiz, image: &ImageItem, source: &mut S) -> Result<Answer>
where
    S: AnswerSource + ?Sized,
{
    let bound = quiz.num_examples();
    let prompt = prompt_for(image);
    let mut state = InputState::AwaitingInput;

    let positions = loop {
        let line = source
            .read_line(&prompt)?
            .ok_or_else(|| format_err!("input closed while waiting for image {}", image.label))?;

        state = state.feed(&line, bound);

        if let InputState::ParsedOk(positions) = &state {
            break positions.clone();
        }
        source.report(&state.to_string())?;
    };

    let captions: Vec<CaptionItem> = positions
        .into_iter()
        .map(|position| {
            quiz.caption_at(position)
                .cloned()
                .ok_or_else(|| format_err!("caption position {} is out of bound", position))
        })
        .try_collect()?;

    Ok(Answer {
        image: image.clone(),
        captions,
        batch_labels: Arc::new(quiz.labels.clone()),
    })
}

/// Collects one answer per image in display order.
pub fn collect_answers<S>(quiz: &Quiz, source: &mut S) -> Result<Vec<Answer>>
where
    S: AnswerSource + ?Sized,
{
    quiz.images
        .iter()
        .map(|image| collect_answer(quiz, image, &mut *source))
        .try_collect()
}
