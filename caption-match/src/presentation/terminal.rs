use super::*;
use prettytable::{Cell, Row, Table};

/// Prints the figure as a two-row table.
#[derive(Debug)]
pub struct TerminalPresenter<W>
where
    W: Write,
{
    writer: W,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W> TerminalPresenter<W>
where
    W: Write,
{
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Presenter for TerminalPresenter<W>
where
    W: Write,
{
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let mut table = Table::new();
        table.add_row(Row::new(
            figure
                .panels
                .iter()
                .map(|panel| Cell::new(&panel.image.display().to_string()))
                .collect(),
        ));
        table.add_row(Row::new(
            figure
                .panels
                .iter()
                .map(|panel| Cell::new(&panel.text))
                .collect(),
        ));

        writeln!(self.writer, "{}", figure.title)?;
        table.print(&mut self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_presenter_test() -> Result<()> {
        let figure = Figure {
            title: "Image Batch 0 of 1".into(),
            panels: vec![
                Panel {
                    image: "images/cat.jpg".into(),
                    text: "Image   0".into(),
                },
                Panel {
                    image: "images/bus.jpg".into(),
                    text: "Image   2".into(),
                },
            ],
        };

        let mut presenter = TerminalPresenter::new(Vec::<u8>::new());
        presenter.show(&figure)?;
        presenter.close()?;
        let output = String::from_utf8(presenter.into_inner())?;

        assert!(output.starts_with("Image Batch 0 of 1\n"));
        assert!(output.contains("images/cat.jpg"));
        assert!(output.contains("Image   2"));
        Ok(())
    }
}
