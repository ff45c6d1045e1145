//! Arguments captured for one step invocation.

/// Multiline argument attached to a step: free text or tabular data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultilineArg {
    /// A free-text block.
    DocString(String),
    /// Tabular data, row by row.
    Table(Vec<Vec<String>>),
}

/// Positional captures plus the optional multiline argument for one step.
///
/// Immutable once constructed. The executor passes the same arguments to
/// the step on the first attempt and on the retry, unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepArgs {
    captures: Vec<String>,
    multiline: Option<MultilineArg>,
}

impl StepArgs {
    /// Arguments with no captures.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Arguments from positional captures.
    pub fn new(captures: Vec<String>) -> Self {
        Self {
            captures,
            multiline: None,
        }
    }

    /// Attach a multiline argument.
    pub fn with_multiline(mut self, arg: MultilineArg) -> Self {
        self.multiline = Some(arg);
        self
    }

    /// All positional captures, in order.
    pub fn captures(&self) -> &[String] {
        &self.captures
    }

    /// A single capture by position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(String::as_str)
    }

    /// The attached multiline argument, if any.
    pub fn multiline(&self) -> Option<&MultilineArg> {
        self.multiline.as_ref()
    }
}
