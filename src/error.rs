use crate::binding::BindingError;
use std::fmt;

/// One stage of the render pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pass {
    Header,
    Registration,
    Footer,
    Patterns,
}

impl Pass {
    /// All passes in the order the pipeline runs them.
    pub const ALL: [Pass; 4] = [Pass::Header, Pass::Registration, Pass::Footer, Pass::Patterns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pass::Header => "header",
            Pass::Registration => "registration",
            Pass::Footer => "footer",
            Pass::Patterns => "patterns",
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure inside a single pass.
#[derive(Debug)]
pub enum PassError {
    /// The template engine failed
    Template(askama::Error),
    /// A binding could not be compiled
    Binding {
        service: String,
        method: String,
        index: usize,
        source: BindingError,
    },
}

impl fmt::Display for PassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassError::Template(err) => write!(f, "template error: {err}"),
            PassError::Binding {
                service,
                method,
                index,
                source,
            } => write!(f, "binding {service}.{method}[{index}]: {source}"),
        }
    }
}

impl std::error::Error for PassError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PassError::Template(err) => Some(err),
            PassError::Binding { source, .. } => Some(source),
        }
    }
}

impl From<askama::Error> for PassError {
    fn from(err: askama::Error) -> Self {
        PassError::Template(err)
    }
}

/// Error returned by [`crate::render`].
///
/// Either the input had nothing to generate, or exactly one pass failed. In
/// both cases no partial output is returned.
#[derive(Debug)]
pub enum GenerateError {
    /// The file unit declares no services
    NoTargetService,
    /// A render pass failed
    Pass { pass: Pass, source: PassError },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::NoTargetService => write!(f, "no target service defined in the file"),
            GenerateError::Pass { pass, source } => {
                write!(f, "failed to render {pass} pass: {source}")
            }
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateError::NoTargetService => None,
            GenerateError::Pass { source, .. } => Some(source),
        }
    }
}
