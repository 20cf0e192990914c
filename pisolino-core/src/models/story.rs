use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;

/// Storia inviata da un utente, così come arriva dal server (non è un modello di DB).
/// Tutti i campi sono assegnati dal server e non vengono mai modificati dopo la costruzione.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub story_id: String,
    pub title: String,
    pub author: String,
    pub url: String,
    /// Username di chi ha inviato la storia.
    pub username: String,
    pub created_at: String, // RFC3339 UTC
}

impl Story {
    /// Estrae l'hostname dall'URL della storia (calcolato al volo, non salvato).
    /// Fallisce con `Error::MalformedUrl` se l'URL non è un URL assoluto con host.
    pub fn host_name(&self) -> Result<String, Error> {
        let parsed = Url::parse(&self.url).map_err(|_| Error::MalformedUrl(self.url.clone()))?;
        match parsed.host_str() {
            Some(host) => Ok(host.to_string()),
            // URL validi ma senza host (es. "mailto:a@b.c") contano come malformati
            None => Err(Error::MalformedUrl(self.url.clone())),
        }
    }
}

/// I tre campi forniti dall'utente per una nuova storia, nel formato
/// che l'API si aspetta dentro la richiesta di creazione.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    pub title: String,
    pub author: String,
    pub url: String,
}
