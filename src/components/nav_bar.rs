//! Top navigation bar with session-aware links and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes;
use crate::state::session::{self, Session};

/// Navigation bar — shows agenda links while logged in, login/registration
/// links otherwise. Logout clears the session and returns to the login page.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session::logout(session);
        navigate(routes::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"Agenda"</a>
            <Show
                when=move || session.with(Session::is_authenticated)
                fallback=|| {
                    view! {
                        <span class="nav-bar__links">
                            <a href="/login">"Iniciar sesión"</a>
                            <a href="/registro">"Registrarse"</a>
                        </span>
                    }
                }
            >
                <span class="nav-bar__links">
                    <a href="/agenda">"Agenda"</a>
                    <a href="/perfil">"Perfil"</a>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>
                        "Salir"
                    </button>
                </span>
            </Show>
        </nav>
    }
}
