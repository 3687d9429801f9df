use dial_mkml::ParseError;

/// Failure turning `.mkml` markup into widgets.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("line {line}: unknown widget `{name}`")]
    UnknownWidget { line: usize, name: String },

    #[error("line {line}: `{widget}` has no property `{key}`")]
    UnknownProperty { line: usize, widget: String, key: String },

    #[error("line {line}: `{key}` expects {expected}, got `{found}`")]
    InvalidValue { line: usize, key: String, expected: &'static str, found: String },

    #[error("line {line}: `{name}` is not a valid instance name (letters, digits, `-` and `_`, not starting with a digit)")]
    InvalidName { line: usize, name: String },

    #[error("line {line}: instance name `{name}` is already used")]
    DuplicateName { line: usize, name: String },
}
