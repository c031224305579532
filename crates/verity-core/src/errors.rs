use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleError {
    /// A caller-supplied regular expression failed to compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// No built-in pattern carries this name
    #[error("Unknown pattern '{0}'")]
    UnknownPattern(String),
}
