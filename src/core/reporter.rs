//! Level-gated, depth-aware console tracing shared by the walker, the
//! scanner and the dictionary synchronizer.

use std::fmt;

/// Spaces of indentation per depth level.
pub const INDENT_WIDTH: usize = 3;

/// How chatty a run is, from `0` (silent) to `3` (trace every token).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Verbosity(u8);

impl Verbosity {
    pub const MAX: u8 = 3;

    pub const SILENT: Self = Self(0);
    pub const NORMAL: Self = Self(1);
    pub const DETAILED: Self = Self(2);
    pub const TRACE: Self = Self(3);

    /// Build a verbosity level, clamping anything above `3`.
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    pub fn level(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Verbosity {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

/// Where emitted lines go.
#[derive(Debug)]
enum Sink {
    Stdout,
    Buffer(Vec<String>),
}

/// Emits messages only when the configured verbosity is one of the levels a
/// message is tagged with.
///
/// The reporter also tracks the current nesting depth of the run. Directory
/// entries, inspected files and matched tokens each sit one level deeper
/// than their parent, and depth-sensitive messages are indented by
/// [`INDENT_WIDTH`] spaces per level.
#[derive(Debug)]
pub struct Reporter {
    verbosity: Verbosity,
    depth: usize,
    sink: Sink,
}

impl Reporter {
    /// A reporter printing to stdout.
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            depth: 0,
            sink: Sink::Stdout,
        }
    }

    /// A reporter collecting lines in memory, readable with [`Reporter::lines`].
    pub fn buffered(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            depth: 0,
            sink: Sink::Buffer(Vec::new()),
        }
    }

    /// True if a message tagged with `levels` would be emitted.
    pub fn is_enabled(&self, levels: &[u8]) -> bool {
        levels.contains(&self.verbosity.level())
    }

    /// Emit `message` as-is if the current level is one of `levels`.
    pub fn report(&mut self, levels: &[u8], message: impl fmt::Display) {
        if self.is_enabled(levels) {
            self.emit(message.to_string());
        }
    }

    /// Emit `message` prefixed with the indentation of the current depth.
    pub fn report_nested(&mut self, levels: &[u8], message: impl fmt::Display) {
        if self.is_enabled(levels) {
            let indent = " ".repeat(self.depth * INDENT_WIDTH);
            self.emit(format!("{indent}{message}"));
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn set_depth(&mut self, depth: usize) {
        self.depth = depth;
    }

    /// Step one level deeper.
    pub fn descend(&mut self) {
        self.depth += 1;
    }

    /// Step one level back up. Never goes below zero.
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Lines captured by a buffered reporter. Empty for a stdout reporter.
    pub fn lines(&self) -> &[String] {
        match &self.sink {
            Sink::Buffer(lines) => lines,
            Sink::Stdout => &[],
        }
    }

    fn emit(&mut self, line: String) {
        match &mut self.sink {
            Sink::Stdout => println!("{line}"),
            Sink::Buffer(lines) => lines.push(line),
        }
    }
}
