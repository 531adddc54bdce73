//! Profile page showing the stored user record.

use leptos::prelude::*;

use crate::state::session::Session;

/// Profile page — renders the persisted user profile. The session can be
/// torn down while the page is showing, so the missing-user case still
/// renders.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="profile-page">
            <h1>"Perfil"</h1>
            {move || {
                session.with(|s| s.user().cloned()).map_or_else(
                    || view! { <p>"Sesión no disponible."</p> }.into_any(),
                    |user| {
                        view! {
                            <dl>
                                <dt>"Usuario"</dt>
                                <dd>{user.nombre_de_usuario}</dd>
                                <dt>"Id"</dt>
                                <dd>{user.id}</dd>
                            </dl>
                        }
                        .into_any()
                    },
                )
            }}
        </div>
    }
}
