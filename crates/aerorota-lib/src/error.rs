use thiserror::Error;

/// Convenient result alias for the aerorota library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a filtered airport record is missing data the network
    /// builder depends on.
    #[error("invalid airport record {ident}: {reason}")]
    InvalidRecord { ident: String, reason: String },

    /// Raised when no airports survive filtering; an empty network cannot
    /// answer route queries.
    #[error("no airports survived filtering; cannot build an empty network")]
    EmptyNetwork,

    /// Raised when an airport code could not be found in the graph.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route could be found between two airports.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any airports.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
