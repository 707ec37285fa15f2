use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Errore di configurazione: {0}")]
    Config(String),

    #[error("File non trovato: {0}")]
    FileNotFound(String),

    #[error("File non leggibile come foglio di calcolo: {0}")]
    Decode(String),

    #[error("Catalogo non trovato: {0}")]
    CatalogNotFound(String),

    #[error("Il catalogo {catalog} ha {total} errori, numero {number} non valido")]
    ErrorIndexOutOfRange {
        catalog: String,
        number: usize,
        total: usize,
    },

    #[error("Errore di generazione Excel: {0}")]
    ExcelGeneration(String),

    #[error("Errore di input interattivo: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Errore JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Errore IO: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] errori_checker_common::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
