use crate::{common::*, quiz::Quiz};

/// One column of the figure: an image above its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub image: PathBuf,
    pub text: String,
}

/// What is drawn for a quiz round, independent of the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(quiz: &Quiz, num_batches: usize) -> Self {
        let title = format!("Image Batch {} of {}", quiz.batch_index, num_batches);
        let panels = quiz
            .images
            .iter()
            .map(|image| Panel {
                image: image.data.clone(),
                text: display_label(image),
            })
            .collect();
        Self { title, panels }
    }
}

/// The text shown under an image.
pub fn display_label(image: &ImageItem) -> String {
    format!("Image {:3}", image.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_test() {
        let quiz = Quiz {
            batch_index: 1,
            images: vec![Item::new("x.png".into(), 10), Item::new("y.png".into(), 2)],
            captions: vec![Item::new("y".into(), 2), Item::new("x".into(), 10)],
            labels: vec![2, 10].into_iter().collect(),
        };
        let figure = Figure::new(&quiz, 4);

        assert_eq!(figure.title, "Image Batch 1 of 4");
        assert_eq!(
            figure.panels,
            vec![
                Panel {
                    image: "x.png".into(),
                    text: "Image  10".into()
                },
                Panel {
                    image: "y.png".into(),
                    text: "Image   2".into()
                },
            ]
        );
    }
}
