//! Rendering of quiz rounds.

mod figure;
mod terminal;
#[cfg(feature = "opencv")]
mod with_opencv;

pub use figure::*;
pub use terminal::*;
#[cfg(feature = "opencv")]
pub use with_opencv::*;

use crate::common::*;
use strum::{AsRefStr, Display, EnumString};

/// Displays the figure of a quiz round.
pub trait Presenter {
    fn show(&mut self, figure: &Figure) -> Result<()>;

    /// Discards the figure shown last.
    fn close(&mut self) -> Result<()>;
}

impl<P> Presenter for Box<P>
where
    P: Presenter + ?Sized,
{
    fn show(&mut self, figure: &Figure) -> Result<()> {
        (**self).show(figure)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PresenterKind {
    /// Lists images and their labels on the console.
    Terminal,
    /// Opens an OpenCV window per batch.
    Window,
}

impl Default for PresenterKind {
    fn default() -> Self {
        Self::Terminal
    }
}

impl PresenterKind {
    pub fn build(self) -> Result<Box<dyn Presenter>> {
        let presenter: Box<dyn Presenter> = match self {
            Self::Terminal => Box::new(TerminalPresenter::stdout()),
            Self::Window => build_window_presenter()?,
        };
        Ok(presenter)
    }
}

#[cfg(feature = "opencv")]
fn build_window_presenter() -> Result<Box<dyn Presenter>> {
    Ok(Box::new(WindowPresenter::default()))
}

#[cfg(not(feature = "opencv"))]
fn build_window_presenter() -> Result<Box<dyn Presenter>> {
    bail!("'opencv' feature must be enabled to use the window presenter");
}

/// Lists captions numbered by their display position.
pub fn caption_listing(captions: &[CaptionItem]) -> String {
    let mut text = String::from("Captions were:");
    for (position, caption) in captions.iter().enumerate() {
        text.push_str(&format!("\n  ({:3}) {}", position, caption.data));
    }
    text
}
