//! Componente radice: tiene il contesto esplicito della pagina (API client,
//! lista storie, sessione, tab attiva, banner d'errore) e collega gli eventi
//! della UI alle operazioni del client. Lo stato vive qui dentro, niente
//! globali di modulo.

use pisolino_core::StoryDraft;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use pisolino_client_web::api::{ApiClient, DEFAULT_BASE_URL};
use pisolino_client_web::session::CurrentUser;
use pisolino_client_web::stories::StoryList;
use pisolino_client_web::views::story_list_view;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// Quale lista è visibile.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    All,
    Favorites,
    Mine,
}

// La persistenza di token/username tra un reload e l'altro passa dal
// localStorage del browser: è il confine col DOM, non parte del core.

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn saved_credentials() -> Option<(String, String)> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let username = storage.get_item(USERNAME_KEY).ok().flatten()?;
    Some((token, username))
}

fn save_credentials(token: &str, username: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

fn clear_credentials() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

#[function_component(App)]
fn app() -> Html {
    let api = use_memo((), |_| ApiClient::new(DEFAULT_BASE_URL));
    let story_list = use_state(|| None::<StoryList>);
    let current_user = use_state(|| None::<CurrentUser>);
    let tab = use_state(|| Tab::All);
    let banner = use_state(|| None::<String>);

    let title_ref = use_node_ref();
    let author_ref = use_node_ref();
    let url_ref = use_node_ref();
    let login_username_ref = use_node_ref();
    let login_password_ref = use_node_ref();
    let signup_username_ref = use_node_ref();
    let signup_password_ref = use_node_ref();
    let signup_name_ref = use_node_ref();

    // Primo caricamento: scarica la lista (nessuna auth) e prova a riaprire
    // la sessione dalle credenziali salvate. La riapertura è speculativa:
    // se fallisce si resta semplicemente sloggati.
    {
        let api = api.clone();
        let story_list = story_list.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        use_effect_with((), move |_| {
            {
                let api = api.clone();
                let banner = banner.clone();
                spawn_local(async move {
                    match StoryList::fetch(&api).await {
                        Ok(list) => story_list.set(Some(list)),
                        Err(e) => banner.set(Some(format!("stories failed to load: {}", e))),
                    }
                });
            }
            if let Some((token, username)) = saved_credentials() {
                spawn_local(async move {
                    if let Some(user) =
                        CurrentUser::from_stored_credentials(&api, &token, &username).await
                    {
                        current_user.set(Some(user));
                    }
                });
            }
            || ()
        });
    }

    let on_toggle_favorite = {
        let api = api.clone();
        let story_list = story_list.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        Callback::from(move |story_id: String| {
            let (Some(list), Some(user)) = ((*story_list).clone(), (*current_user).clone())
            else {
                return;
            };
            // dal click si risale alla storia cercandola per storyId nella lista
            let Some(story) = list.find(&story_id).cloned() else {
                return;
            };
            let api = api.clone();
            let current_user = current_user.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let mut user = user;
                match user.toggle_favorite(&api, &story).await {
                    Ok(_) => {
                        current_user.set(Some(user));
                        banner.set(None);
                    }
                    // nessuna mutazione locale applicata: la vista resta com'era
                    Err(e) => banner.set(Some(format!("could not change favorite: {}", e))),
                }
            });
        })
    };

    let on_delete = {
        let api = api.clone();
        let story_list = story_list.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        Callback::from(move |story_id: String| {
            let (Some(list), Some(user)) = ((*story_list).clone(), (*current_user).clone())
            else {
                return;
            };
            let api = api.clone();
            let story_list = story_list.clone();
            let current_user = current_user.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let mut list = list;
                let mut user = user;
                match list.delete_story(&api, &mut user, &story_id).await {
                    Ok(_) => {
                        story_list.set(Some(list));
                        current_user.set(Some(user));
                        banner.set(None);
                    }
                    Err(e) => banner.set(Some(format!("could not delete story: {}", e))),
                }
            });
        })
    };

    let on_submit_story = {
        let api = api.clone();
        let story_list = story_list.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        let title_ref = title_ref.clone();
        let author_ref = author_ref.clone();
        let url_ref = url_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let (Some(list), Some(user)) = ((*story_list).clone(), (*current_user).clone())
            else {
                return;
            };
            let draft = StoryDraft {
                title: input_value(&title_ref),
                author: input_value(&author_ref),
                url: input_value(&url_ref),
            };
            let api = api.clone();
            let story_list = story_list.clone();
            let current_user = current_user.clone();
            let banner = banner.clone();
            spawn_local(async move {
                let mut list = list;
                let mut user = user;
                match list.add_story(&api, &mut user, draft).await {
                    Ok(_) => {
                        story_list.set(Some(list));
                        current_user.set(Some(user));
                        banner.set(None);
                    }
                    Err(e) => banner.set(Some(format!("could not submit story: {}", e))),
                }
            });
        })
    };

    let on_login = {
        let api = api.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        let login_username_ref = login_username_ref.clone();
        let login_password_ref = login_password_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = input_value(&login_username_ref);
            let password = input_value(&login_password_ref);
            let api = api.clone();
            let current_user = current_user.clone();
            let banner = banner.clone();
            spawn_local(async move {
                match CurrentUser::login(&api, &username, &password).await {
                    Ok(user) => {
                        save_credentials(&user.token, &user.user.username);
                        current_user.set(Some(user));
                        banner.set(None);
                    }
                    Err(e) => banner.set(Some(format!("login failed: {}", e))),
                }
            });
        })
    };

    let on_signup = {
        let api = api.clone();
        let current_user = current_user.clone();
        let banner = banner.clone();
        let signup_username_ref = signup_username_ref.clone();
        let signup_password_ref = signup_password_ref.clone();
        let signup_name_ref = signup_name_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = input_value(&signup_username_ref);
            let password = input_value(&signup_password_ref);
            let name = input_value(&signup_name_ref);
            let api = api.clone();
            let current_user = current_user.clone();
            let banner = banner.clone();
            spawn_local(async move {
                match CurrentUser::signup(&api, &username, &password, &name).await {
                    Ok(user) => {
                        save_credentials(&user.token, &user.user.username);
                        current_user.set(Some(user));
                        banner.set(None);
                    }
                    Err(e) => banner.set(Some(format!("signup failed: {}", e))),
                }
            });
        })
    };

    let on_logout = {
        let current_user = current_user.clone();
        let tab = tab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            clear_credentials();
            current_user.set(None);
            tab.set(Tab::All);
        })
    };

    let show_tab = |target: Tab| {
        let tab = tab.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            tab.set(target);
        })
    };

    let viewer = current_user.as_ref();
    let logged_username = viewer.map(|user| user.user.username.clone());

    let stories_view = {
        let on_fav = on_toggle_favorite.clone();
        let on_del = on_delete.clone();
        match (&*story_list, viewer, *tab) {
            (None, _, _) => html! { <p id="stories-loading-msg">{ "Loading…" }</p> },
            (Some(_), Some(user), Tab::Favorites) => story_list_view(
                &user.user.favorites,
                viewer,
                on_fav,
                on_del,
                "no favorites added!",
            ),
            (Some(_), Some(user), Tab::Mine) => story_list_view(
                &user.user.own_stories,
                viewer,
                on_fav,
                on_del,
                "no stories added by user yet!",
            ),
            (Some(list), _, _) => {
                story_list_view(&list.stories, viewer, on_fav, on_del, "no stories yet")
            }
        }
    };

    html! {
        <>
            <nav>
                <a href="#" class="nav-all" onclick={show_tab(Tab::All)}>{ "Pisolino" }</a>
                if let Some(username) = logged_username {
                    <>
                        <a href="#" class="nav-favorites" onclick={show_tab(Tab::Favorites)}>
                            { "favorites" }
                        </a>
                        <a href="#" class="nav-my-stories" onclick={show_tab(Tab::Mine)}>
                            { "my stories" }
                        </a>
                        <a href="#" class="nav-logout" onclick={on_logout}>
                            { format!("logout ({})", username) }
                        </a>
                    </>
                }
            </nav>
            if let Some(message) = &*banner {
                <p class="error-banner">{ message.clone() }</p>
            }
            if viewer.is_some() {
                <form id="story-form" onsubmit={on_submit_story}>
                    <input ref={title_ref.clone()} id="story-title" placeholder="title" />
                    <input ref={author_ref.clone()} id="story-author" placeholder="author" />
                    <input ref={url_ref.clone()} id="story-url" placeholder="url" />
                    <button type="submit">{ "submit" }</button>
                </form>
            } else {
                <>
                    <form id="login-form" onsubmit={on_login}>
                        <input ref={login_username_ref.clone()} placeholder="username" />
                        <input ref={login_password_ref.clone()} type="password" placeholder="password" />
                        <button type="submit">{ "login" }</button>
                    </form>
                    <form id="signup-form" onsubmit={on_signup}>
                        <input ref={signup_username_ref.clone()} placeholder="username" />
                        <input ref={signup_password_ref.clone()} type="password" placeholder="password" />
                        <input ref={signup_name_ref.clone()} placeholder="name" />
                        <button type="submit">{ "signup" }</button>
                    </form>
                </>
            }
            { stories_view }
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
