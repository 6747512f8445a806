/// Failures while turning an imported file into sentences
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("could not parse subtitle file {file_name}, check format")]
    NoCues { file_name: String },

    #[error("{file_name} is not a text file: {source}")]
    NotText {
        file_name: String,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
