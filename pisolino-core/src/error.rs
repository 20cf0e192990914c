use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Errore condiviso del client: trasporto, risposte non-2xx, URL malformati.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Fallimento del trasporto (DNS, connessione, body non decodificabile).
    #[error("network error: {0}")]
    Network(String),

    /// Risposta non-2xx con il messaggio del server.
    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    /// Credenziali non valide, username già esistente o token mancante/scaduto.
    #[error("auth error: {0}")]
    Auth(String),

    /// L'URL di una storia non è un URL assoluto con host.
    #[error("malformed url: {0}")]
    MalformedUrl(String),

    /// storyId o username inesistente sul server.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Corpo d'errore che l'API allega alle risposte non-2xx:
/// `{ "error": { "status": 404, "title": "Not Found", "message": "..." } }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorDetail {
    pub status: u16,
    pub title: String,
    pub message: String,
}
