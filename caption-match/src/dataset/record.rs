use crate::common::*;

/// One dataset entry pairing an image with its ground-truth captions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRecord {
    pub image_name: PathBuf,
    /// Caption groups. The first caption of the first group is displayed.
    pub captions: Vec<Vec<String>>,
}

impl CaptionRecord {
    /// The caption text shown in the quiz.
    pub fn display_caption(&self) -> Option<&str> {
        self.captions.first()?.first().map(String::as_str)
    }
}
