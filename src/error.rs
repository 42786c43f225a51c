use thiserror::Error;

/// Anything that aborts a run. Nothing is emitted once one of these occurs.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("couldn't decode CodeGeneratorRequest: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("{file} was requested for generation but wasn't included in proto_file")]
    MissingFile { file: String },

    #[error(
        "{service}.{method} has a google.api.http annotation without a GET, POST, PATCH, PUT or DELETE path"
    )]
    UnresolvedHttpRule { service: String, method: String },
}
