//! Lista ordinata delle storie caricate per la pagina.

use pisolino_core::{Error, Story, StoryDraft};
use tracing::debug;

use crate::api::ApiClient;
use crate::session::CurrentUser;

/// Collezione ordinata di storie: l'ordine di inserimento è l'ordine di
/// visualizzazione e le nuove storie entrano in testa.
///
/// La lista riflette l'ultimo fetch riuscito più le mutazioni locali:
/// cancellazioni fatte da altri client non vengono sincronizzate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryList {
    pub stories: Vec<Story>,
}

impl StoryList {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    /// Scarica l'intera collezione dal server, nell'ordine in cui arriva.
    /// Gli errori risalgono al chiamante senza essere toccati.
    pub async fn fetch(api: &ApiClient) -> Result<Self, Error> {
        let stories = api.stories().await?;
        debug!(count = stories.len(), "story list fetched");
        Ok(Self::new(stories))
    }

    /// Crea una storia via API e la inserisce in testa alla lista e in coda
    /// alle storie dell'utente, poi la ritorna.
    /// Lo stato locale viene toccato solo dopo la conferma del server: in caso
    /// di errore lista e utente restano intatti e l'errore risale come `Err`.
    pub async fn add_story(
        &mut self,
        api: &ApiClient,
        user: &mut CurrentUser,
        draft: StoryDraft,
    ) -> Result<Story, Error> {
        let story = api.create_story(&user.token, &draft).await?;
        self.stories.insert(0, story.clone());
        user.user.own_stories.push(story.clone());
        Ok(story)
    }

    /// Cancella una storia dell'utente via API (solo chi l'ha inviata può
    /// farlo, lo impone il server) e la rimuove dalla lista, dalle storie
    /// dell'utente e dai suoi preferiti. Come per `add_story`, nessuna
    /// mutazione locale prima della conferma del server.
    pub async fn delete_story(
        &mut self,
        api: &ApiClient,
        user: &mut CurrentUser,
        story_id: &str,
    ) -> Result<String, Error> {
        let message = api.delete_story(&user.token, story_id).await?;
        self.stories.retain(|s| s.story_id != story_id);
        user.user.own_stories.retain(|s| s.story_id != story_id);
        user.user.favorites.retain(|s| s.story_id != story_id);
        Ok(message)
    }

    /// Cerca una storia per storyId (usata dal rendering per risalire dal
    /// click alla storia).
    pub fn find(&self, story_id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.story_id == story_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(id: &str) -> Story {
        Story {
            story_id: id.to_string(),
            title: format!("storia {}", id),
            author: "autore".to_string(),
            url: "https://example.org/x".to_string(),
            username: "bob".to_string(),
            created_at: "2025-11-02T10:20:30Z".to_string(),
        }
    }

    #[test]
    fn new_preserves_order_and_count() {
        let list = StoryList::new(vec![story("a"), story("b"), story("c")]);
        assert_eq!(list.stories.len(), 3);
        assert_eq!(list.stories[0].story_id, "a");
        assert_eq!(list.stories[1].story_id, "b");
        assert_eq!(list.stories[2].story_id, "c");
    }

    #[test]
    fn find_matches_by_story_id() {
        let list = StoryList::new(vec![story("a"), story("b")]);
        assert_eq!(list.find("b").map(|s| s.title.as_str()), Some("storia b"));
        assert!(list.find("z").is_none());
    }
}
