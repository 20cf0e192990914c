use serde::{Deserialize, Serialize};

use super::story::Story;

/// Profilo utente esposto sul wire (non è un modello di DB).
/// Sul wire il server chiama `stories` le storie inviate dall'utente:
/// qui il campo diventa `own_stories`, la rinomina la fa serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub name: String,
    pub created_at: String, // RFC3339 UTC
    /// Storie salvate dall'utente. Invariante: mai due entry con lo stesso storyId
    /// (lo garantisce il livello sessione, non questo tipo).
    #[serde(default)]
    pub favorites: Vec<Story>,
    /// Storie inviate dall'utente.
    #[serde(default, rename = "stories")]
    pub own_stories: Vec<Story>,
}
