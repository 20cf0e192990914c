//! Client HTTP verso l'API remota: un metodo per endpoint, DTO tipizzati.

use pisolino_core::error::ApiErrorBody;
use pisolino_core::{
    AuthResponse, CreateStoryRequest, CreateStoryResponse, Error, LoginCredentials, LoginRequest,
    MessageResponse, SignupCredentials, SignupRequest, StoriesResponse, Story, StoryDraft, User,
    UserResponse,
};
use serde::de::DeserializeOwned;
use tracing::debug;

/// Endpoint pubblico dell'API v3.
pub const DEFAULT_BASE_URL: &str = "https://hack-or-snooze-v3.herokuapp.com";

/// Client verso l'API remota.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// URL base senza slash finale.
    base_url: String,
    /// HTTP client riusato tra le chiamate.
    http: reqwest::Client,
}

impl ApiClient {
    /// Crea un nuovo client. `base_url` è l'unico parametro di configurazione:
    /// i test lo puntano a un server locale.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, Error> {
        request.send().await.map_err(|e| Error::Network(e.to_string()))
    }

    /// Decodifica la risposta: 2xx nel DTO atteso, non-2xx nella variante
    /// d'errore corrispondente allo status.
    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| Error::Network(e.to_string()));
        }
        // l'API allega quasi sempre un corpo { "error": {...} }; se manca o non
        // si parsa, ripieghiamo sulla reason phrase dello status
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) => body.error.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
        };
        Err(match status.as_u16() {
            401 | 403 | 409 => Error::Auth(message),
            404 => Error::NotFound(message),
            code => Error::Api { status: code, message },
        })
    }

    /// GET /stories (nessuna autenticazione richiesta).
    pub async fn stories(&self) -> Result<Vec<Story>, Error> {
        debug!("GET /stories");
        let response = Self::send(self.http.get(format!("{}/stories", self.base_url))).await?;
        let body: StoriesResponse = Self::handle(response).await?;
        Ok(body.stories)
    }

    /// POST /stories: crea una storia, token nel body.
    pub async fn create_story(&self, token: &str, draft: &StoryDraft) -> Result<Story, Error> {
        debug!(title = %draft.title, "POST /stories");
        let request = CreateStoryRequest {
            token: token.to_string(),
            story: draft.clone(),
        };
        let response = Self::send(
            self.http
                .post(format!("{}/stories", self.base_url))
                .json(&request),
        )
        .await?;
        let body: CreateStoryResponse = Self::handle(response).await?;
        Ok(body.story)
    }

    /// DELETE /stories/:storyId, token come query param.
    /// Ritorna il messaggio di conferma del server.
    pub async fn delete_story(&self, token: &str, story_id: &str) -> Result<String, Error> {
        debug!(story_id = %story_id, "DELETE /stories/:storyId");
        let response = Self::send(
            self.http
                .delete(format!("{}/stories/{}", self.base_url, story_id))
                .query(&[("token", token)]),
        )
        .await?;
        let body: MessageResponse = Self::handle(response).await?;
        Ok(body.message)
    }

    /// POST /signup: registra un nuovo utente.
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthResponse, Error> {
        debug!(username = %username, "POST /signup");
        let request = SignupRequest {
            user: SignupCredentials {
                username: username.to_string(),
                password: password.to_string(),
                name: name.to_string(),
            },
        };
        let response = Self::send(
            self.http
                .post(format!("{}/signup", self.base_url))
                .json(&request),
        )
        .await?;
        Self::handle(response).await
    }

    /// POST /login: autentica un utente esistente.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthResponse, Error> {
        debug!(username = %username, "POST /login");
        let request = LoginRequest {
            user: LoginCredentials {
                username: username.to_string(),
                password: password.to_string(),
            },
        };
        let response = Self::send(
            self.http
                .post(format!("{}/login", self.base_url))
                .json(&request),
        )
        .await?;
        Self::handle(response).await
    }

    /// GET /users/:username?token=: rilegge il profilo corrente.
    pub async fn user(&self, token: &str, username: &str) -> Result<User, Error> {
        debug!(username = %username, "GET /users/:username");
        let response = Self::send(
            self.http
                .get(format!("{}/users/{}", self.base_url, username))
                .query(&[("token", token)]),
        )
        .await?;
        let body: UserResponse = Self::handle(response).await?;
        Ok(body.user)
    }

    /// POST /users/:username/favorites/:storyId?token=
    pub async fn add_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> Result<String, Error> {
        debug!(story_id = %story_id, "POST favorite");
        self.favorite_request(reqwest::Method::POST, token, username, story_id)
            .await
    }

    /// DELETE /users/:username/favorites/:storyId?token=
    pub async fn remove_favorite(
        &self,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> Result<String, Error> {
        debug!(story_id = %story_id, "DELETE favorite");
        self.favorite_request(reqwest::Method::DELETE, token, username, story_id)
            .await
    }

    // add e remove condividono URL e forma della risposta: cambia solo il metodo
    async fn favorite_request(
        &self,
        method: reqwest::Method,
        token: &str,
        username: &str,
        story_id: &str,
    ) -> Result<String, Error> {
        let url = format!(
            "{}/users/{}/favorites/{}",
            self.base_url, username, story_id
        );
        let response = Self::send(self.http.request(method, url).query(&[("token", token)])).await?;
        let body: MessageResponse = Self::handle(response).await?;
        Ok(body.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
