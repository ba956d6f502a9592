use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum MasonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Tree(#[from] TreeError),
}

impl MasonError {
    /// The backend's explanation of why the input text could not be parsed.
    ///
    /// Returns `None` for errors that did not come from parsing.
    #[must_use]
    pub fn parse_reason(&self) -> Option<&str> {
        match self {
            MasonError::Parse(ParseError::Syntax { message, .. }) => Some(message),
            MasonError::Tree(_) => None,
        }
    }
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum ParseError {
    #[error("Malformed {format} input: {message}")]
    #[diagnostic(
        code(parser::syntax),
        help("The backend could not build a tree from this text, so no record was produced.")
    )]
    Syntax {
        format: &'static str,
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
    },
}

#[derive(Error, Debug, Diagnostic, Clone)]
pub enum TreeError {
    #[error("Cannot add key `{key}` to a node that is not an object")]
    #[diagnostic(
        code(tree::not_an_object),
        help("Keys can only be attached to object nodes created by the backend.")
    )]
    NotAnObject { key: String },

    #[error("Cannot append to a node that is not an array")]
    #[diagnostic(code(tree::not_an_array))]
    NotAnArray,

    #[error("Failed to stringify {format} tree: {message}")]
    #[diagnostic(code(tree::stringify))]
    Stringify {
        format: &'static str,
        message: String,
    },
}
