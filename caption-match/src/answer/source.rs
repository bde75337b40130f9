use crate::common::*;

/// Where annotator answers come from.
pub trait AnswerSource {
    /// Shows the prompt and reads one line. Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Reports a validation message to the annotator.
    fn report(&mut self, message: &str) -> Result<()>;
}

impl<S> AnswerSource for &mut S
where
    S: AnswerSource + ?Sized,
{
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn report(&mut self, message: &str) -> Result<()> {
        (**self).report(message)
    }
}

/// Reads answers from the standard input.
#[derive(Debug)]
pub struct TerminalSource {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl TerminalSource {
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        {
            let mut stdout = self.stdout.lock();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        let num_bytes = self.stdin.lock().read_line(&mut line)?;
        if num_bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn report(&mut self, message: &str) -> Result<()> {
        writeln!(self.stdout.lock(), "{}", message)?;
        Ok(())
    }
}

/// Replays pre-recorded answer lines and keeps a transcript.
///
/// Rejected lines are logged as warnings since nobody watches the prompts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
    pub messages: Vec<String>,
}

impl ScriptedSource {
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: vec![],
            messages: vec![],
        }
    }

    /// Loads one answer line per prompt from a text file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read answers file '{}'", path.display()))?;
        Ok(Self::from_lines(text.lines()))
    }

    /// Number of lines not consumed yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl AnswerSource for ScriptedSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_owned());
        Ok(self.lines.pop_front())
    }

    fn report(&mut self, message: &str) -> Result<()> {
        warn!("replayed answer rejected: {}", message);
        self.messages.push(message.to_owned());
        Ok(())
    }
}
