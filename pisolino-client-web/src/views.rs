//! Dal modello al markup: render della lista storie.
//!
//! Queste funzioni ricevono Story/CurrentUser e ritornano `Html`; la scelta
//! di cosa mostrare e i gestori degli eventi arrivano dal componente radice.

use pisolino_core::{short_date, Story};
use yew::prelude::*;

use crate::session::CurrentUser;

/// Un `<li>` per una storia: stellina dei preferiti (solo per chi è loggato,
/// piena se la storia è tra i preferiti), titolo che punta all'URL, hostname
/// tra parentesi, autore, chi l'ha inviata, data breve e cancellazione sulle
/// storie proprie.
pub fn story_item(
    story: &Story,
    viewer: Option<&CurrentUser>,
    on_toggle_favorite: Callback<String>,
    on_delete: Callback<String>,
) -> Html {
    // un URL malformato non deve rompere il render: ripieghiamo sull'URL grezzo
    let host = match story.host_name() {
        Ok(host) => host,
        Err(_) => story.url.clone(),
    };
    let date = short_date(&story.created_at).unwrap_or_default();

    let favorite_mark = viewer.map(|user| {
        let star = if user.is_favorite(&story.story_id) { "★" } else { "☆" };
        let story_id = story.story_id.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_favorite.emit(story_id.clone());
        });
        html! { <a href="#" class="story-favorite" {onclick}>{ star }</a> }
    });

    let delete_mark = viewer.filter(|user| user.owns(story)).map(|_| {
        let story_id = story.story_id.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_delete.emit(story_id.clone());
        });
        html! { <a href="#" class="story-delete" {onclick}>{ "✕" }</a> }
    });

    html! {
        <li id={story.story_id.clone()}>
            { favorite_mark }
            { delete_mark }
            <a href={story.url.clone()} target="_blank" class="story-link">
                { story.title.clone() }
            </a>
            <small class="story-hostname">{ format!("({})", host) }</small>
            <small class="story-author">{ format!("by {}", story.author) }</small>
            <small class="story-user">{ format!("posted by {}", story.username) }</small>
            <small class="story-date">{ date }</small>
        </li>
    }
}

/// L'`<ol>` su una fetta di storie, riusato per tutte e tre le viste
/// (tutte le storie, preferiti, le mie storie).
pub fn story_list_view(
    stories: &[Story],
    viewer: Option<&CurrentUser>,
    on_toggle_favorite: Callback<String>,
    on_delete: Callback<String>,
    empty_message: &str,
) -> Html {
    if stories.is_empty() {
        return html! { <p class="stories-empty">{ empty_message.to_string() }</p> };
    }
    html! {
        <ol class="stories-list">
            { for stories.iter().map(|story| {
                story_item(story, viewer, on_toggle_favorite.clone(), on_delete.clone())
            }) }
        </ol>
    }
}
