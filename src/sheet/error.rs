use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("could not encode QR code for {url:?}: {source}")]
    Qr {
        url: String,
        source: qrcode::types::QrError,
    },

    #[error("pdf assembly failed: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("could not write document: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not replace output file: {0}")]
    Persist(#[from] tempfile::PersistError),
}
