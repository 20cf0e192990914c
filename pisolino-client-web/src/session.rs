//! Sessione dell'utente autenticato: login, signup, riapertura e preferiti.

use pisolino_core::{AuthResponse, Error, Story, User};
use tracing::warn;

use crate::api::ApiClient;

/// L'utente attualmente autenticato: profilo + token bearer.
///
/// Vive solo in memoria: la persistenza di token/username tra un reload e
/// l'altro è compito di chi ci ospita. Due toggle in volo sulla stessa
/// sessione non sono serializzati tra loro: `&mut self` impedisce due chiamate
/// concorrenti sullo stesso valore, ma cloni indipendenti (come quelli che
/// tiene la UI) possono comunque intrecciarsi. Limite noto, non gestito.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user: User,
    /// Credenziale bearer richiesta da tutte le chiamate autenticate.
    pub token: String,
}

impl CurrentUser {
    fn from_auth(response: AuthResponse) -> Self {
        Self {
            user: response.user,
            token: response.token,
        }
    }

    /// Registra un nuovo utente e apre la sessione.
    /// I tre campi devono essere non vuoti: il controllo avviene prima di
    /// qualsiasi richiesta. Credenziali rifiutate dal server (username già
    /// esistente compreso) risalgono come `Error::Auth`.
    pub async fn signup(
        api: &ApiClient,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<Self, Error> {
        require_non_empty(&[("username", username), ("password", password), ("name", name)])?;
        let response = api.signup(username, password, name).await?;
        Ok(Self::from_auth(response))
    }

    /// Apre una sessione con credenziali esistenti.
    pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<Self, Error> {
        require_non_empty(&[("username", username), ("password", password)])?;
        let response = api.login(username, password).await?;
        Ok(Self::from_auth(response))
    }

    /// Riapre la sessione da un token salvato, rileggendo il profilo corrente
    /// dal server. Viene chiamata in modo speculativo all'avvio: QUALSIASI
    /// fallimento (token scaduto, rete, utente inesistente) diventa `None`
    /// e non risale mai oltre questo confine.
    pub async fn from_stored_credentials(
        api: &ApiClient,
        token: &str,
        username: &str,
    ) -> Option<Self> {
        match api.user(token, username).await {
            Ok(user) => Some(Self {
                user,
                token: token.to_string(),
            }),
            Err(e) => {
                warn!(error = %e, "session restore failed");
                None
            }
        }
    }

    /// Aggiunge o toglie una storia dai preferiti, a seconda che il suo
    /// storyId sia già presente. Lo stato locale viene allineato solo dopo
    /// la conferma del server: in caso di errore resta intatto e l'errore
    /// risale come `Err`. Ritorna il messaggio di conferma del server.
    pub async fn toggle_favorite(
        &mut self,
        api: &ApiClient,
        story: &Story,
    ) -> Result<String, Error> {
        if self.is_favorite(&story.story_id) {
            let message = api
                .remove_favorite(&self.token, &self.user.username, &story.story_id)
                .await?;
            self.remove_favorite_local(&story.story_id);
            Ok(message)
        } else {
            let message = api
                .add_favorite(&self.token, &self.user.username, &story.story_id)
                .await?;
            self.add_favorite_local(story.clone());
            Ok(message)
        }
    }

    /// True se lo storyId è tra i preferiti. Il render lo ricalcola a ogni
    /// passaggio: il confronto è per storyId, mai per identità dell'oggetto.
    pub fn is_favorite(&self, story_id: &str) -> bool {
        self.user.favorites.iter().any(|s| s.story_id == story_id)
    }

    /// True se la storia è stata inviata da questo utente
    /// (dà il diritto di cancellarla).
    pub fn owns(&self, story: &Story) -> bool {
        story.username == self.user.username
    }

    /// Append locale con guardia sui duplicati: se lo storyId è già presente
    /// non succede niente, così `favorites` non può mai contenerlo due volte.
    fn add_favorite_local(&mut self, story: Story) {
        if !self.is_favorite(&story.story_id) {
            self.user.favorites.push(story);
        }
    }

    fn remove_favorite_local(&mut self, story_id: &str) {
        self.user.favorites.retain(|s| s.story_id != story_id);
    }
}

/// Errore `Auth` se uno dei campi richiesti è vuoto.
fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), Error> {
    for (name, value) in fields {
        if value.is_empty() {
            return Err(Error::Auth(format!("{} must not be empty", name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CurrentUser {
        CurrentUser {
            user: User {
                username: "ann".to_string(),
                name: "Ann A".to_string(),
                created_at: "2025-11-01T09:00:00Z".to_string(),
                favorites: vec![],
                own_stories: vec![],
            },
            token: "token-ann".to_string(),
        }
    }

    fn story(id: &str, username: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: "titolo".to_string(),
            author: "autore".to_string(),
            url: "https://example.org/x".to_string(),
            username: username.to_string(),
            created_at: "2025-11-02T10:20:30Z".to_string(),
        }
    }

    #[test]
    fn add_favorite_local_never_duplicates() {
        let mut user = session();
        user.add_favorite_local(story("s1", "bob"));
        // secondo append con lo stesso storyId: deve essere un no-op
        user.add_favorite_local(story("s1", "bob"));
        assert_eq!(user.user.favorites.len(), 1);
        assert!(user.is_favorite("s1"));
    }

    #[test]
    fn remove_favorite_local_restores_membership() {
        let mut user = session();
        user.add_favorite_local(story("s1", "bob"));
        user.remove_favorite_local("s1");
        assert!(user.user.favorites.is_empty());
        assert!(!user.is_favorite("s1"));
    }

    #[test]
    fn owns_matches_submitter_only() {
        let user = session();
        assert!(user.owns(&story("s1", "ann")));
        assert!(!user.owns(&story("s2", "bob")));
    }

    #[test]
    fn require_non_empty_rejects_blank_fields() {
        let err = require_non_empty(&[("username", "ann"), ("password", "")]).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
        assert!(require_non_empty(&[("username", "ann")]).is_ok());
    }
}
