pub mod atom;
pub mod atoms;
pub mod config;
pub mod dashboard;
pub mod positions;
pub mod sync;

/// Backend errors surface as their short banner text
pub(crate) fn backend_error(err: atomscope_client::Error) -> anyhow::Error {
    anyhow::anyhow!(err.user_message())
}
