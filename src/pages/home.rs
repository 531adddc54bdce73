//! Public landing page.

use leptos::prelude::*;

use crate::state::session::Session;

/// Landing page — points guests at login/registration and authenticated
/// users at their agenda.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="home-page">
            <h1>"Agenda"</h1>
            <p>"Tus contactos, disponibles desde cualquier navegador."</p>
            <Show
                when=move || session.with(Session::is_authenticated)
                fallback=|| {
                    view! {
                        <p>
                            <a href="/login">"Iniciar sesión"</a>
                            " o "
                            <a href="/registro">"crear una cuenta"</a>
                        </p>
                    }
                }
            >
                <p>
                    <a href="/agenda">"Ir a mi agenda"</a>
                </p>
            </Show>
        </div>
    }
}
