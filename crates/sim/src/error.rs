/// Errors that can occur while running the host simulator.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Failed to bind app listener on port {0}: {1}")]
    Bind(u16, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
