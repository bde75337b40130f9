use super::*;
use opencv::{
    core::{self, Mat, Point, Scalar, Size, Vector},
    highgui, imgcodecs, imgproc,
    prelude::*,
};

const PANEL_SIZE: i32 = 256;
const TEXT_HEIGHT: i32 = 40;

/// Shows each figure in an OpenCV window.
#[derive(Debug, Default)]
pub struct WindowPresenter {
    window: Option<String>,
}

impl WindowPresenter {
    fn render_panel(panel: &Panel) -> Result<Mat> {
        let path = panel.image.to_str().ok_or_else(|| {
            format_err!("non-UTF-8 image path '{}'", panel.image.display())
        })?;
        let image = imgcodecs::imread(path, imgcodecs::IMREAD_COLOR)?;
        ensure!(
            image.rows() > 0 && image.cols() > 0,
            "unable to read image '{}'",
            panel.image.display()
        );

        let mut resized = Mat::default();
        imgproc::resize(
            &image,
            &mut resized,
            Size::new(PANEL_SIZE, PANEL_SIZE),
            0.0,
            0.0,
            imgproc::INTER_AREA,
        )?;

        let mut text = Mat::new_rows_cols_with_default(
            TEXT_HEIGHT,
            PANEL_SIZE,
            core::CV_8UC3,
            Scalar::all(255.0),
        )?;
        imgproc::put_text(
            &mut text,
            &panel.text,
            Point::new(PANEL_SIZE / 4, TEXT_HEIGHT * 2 / 3),
            imgproc::FONT_HERSHEY_SIMPLEX,
            0.6,
            Scalar::all(0.0),
            1,
            imgproc::LINE_8,
            false,
        )?;

        let mut column = Mat::default();
        core::vconcat(&Vector::<Mat>::from_iter([resized, text]), &mut column)?;
        Ok(column)
    }
}

impl Presenter for WindowPresenter {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let columns: Vector<Mat> = figure
            .panels
            .iter()
            .map(Self::render_panel)
            .try_collect()?;

        let mut canvas = Mat::default();
        core::hconcat(&columns, &mut canvas)?;

        highgui::named_window(&figure.title, highgui::WINDOW_AUTOSIZE)?;
        highgui::imshow(&figure.title, &canvas)?;
        highgui::wait_key(1)?;
        self.window = Some(figure.title.clone());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(window) = self.window.take() {
            highgui::destroy_window(&window)?;
            highgui::wait_key(1)?;
        }
        Ok(())
    }
}
