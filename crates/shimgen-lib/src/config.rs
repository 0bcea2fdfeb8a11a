//! Configuration for stub generation and rendering.

/// Prefix the front end puts on module-scoped environment names.
pub const DEFAULT_MODULE_PREFIX: &str = "module:";

/// Line terminator placed between rendered statements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`
    #[default]
    CrLf,
    /// `\n`
    Lf,
}

impl LineEnding {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "crlf" => Some(Self::CrLf),
            "lf" => Some(Self::Lf),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// Configuration for stub generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Environment-name prefix marking module-scoped symbols
    pub(crate) module_prefix: String,
    /// Terminator placed between rendered statements
    pub(crate) line_ending: LineEnding,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            module_prefix: DEFAULT_MODULE_PREFIX.to_owned(),
            line_ending: LineEnding::default(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module-name prefix.
    pub fn module_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.module_prefix = prefix.into();
        self
    }

    /// Set the line ending for rendered output.
    pub fn line_ending(mut self, value: LineEnding) -> Self {
        self.line_ending = value;
        self
    }

    /// Join statements with the configured line ending.
    pub fn render(&self, statements: &[String]) -> String {
        crate::render(statements, self.line_ending)
    }
}
