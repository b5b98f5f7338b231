//! CLI error taxonomy.
//!
//! Wraps engine errors and adds the loader/config failure modes. `main` is
//! the only place errors become exit codes; everywhere else they propagate
//! with `?`.

use costar_graph::GraphError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    /// File open or read failure, with the offending path.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A table line that does not parse: no `|` separator, or a
    /// non-numeric id. Carries the 1-based line number.
    #[error("{path}:{line}: {reason}")]
    Malformed {
        path: String,
        line: usize,
        reason: String,
    },

    /// A credits row referencing an id absent from its directory.
    #[error("{path}:{line}: unknown {kind} id {id}")]
    UnknownId {
        path: String,
        line: usize,
        kind: &'static str,
        id: u32,
    },

    /// A manifest file that is not valid JSON for the expected shape.
    #[error("invalid manifest {path}: {source}")]
    Manifest {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Required input provided neither as a flag nor in the manifest.
    #[error("missing required input: {0} (pass --{0} or set it in --config)")]
    MissingInput(&'static str),

    #[error(transparent)]
    Graph(#[from] GraphError),
}
