// Output stream shared by every worked example.
//
// Variants never print directly: they write to a `Console`, so the same code
// can drive the terminal in the binaries and an in-memory transcript in tests.

/// Sink for the human-readable lines an operation emits.
pub trait Console {
    fn line(&mut self, text: String);
}

/// Prints each line to stdout.
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn line(&mut self, text: String) {
        println!("{}", text);
    }
}

/// Records lines in memory.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl Console for Transcript {
    fn line(&mut self, text: String) {
        self.lines.push(text);
    }
}

/// Records every line while forwarding it to another console.
pub struct Tee<'a> {
    inner: &'a mut dyn Console,
    captured: Vec<String>,
}

impl<'a> Tee<'a> {
    pub fn new(inner: &'a mut dyn Console) -> Self {
        Self {
            inner,
            captured: Vec::new(),
        }
    }

    pub fn into_captured(self) -> Vec<String> {
        self.captured
    }
}

impl Console for Tee<'_> {
    fn line(&mut self, text: String) {
        self.captured.push(text.clone());
        self.inner.line(text);
    }
}
