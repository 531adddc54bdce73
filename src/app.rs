//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    agenda::AgendaPage, contact_create::ContactCreatePage, contact_edit::ContactEditPage,
    home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::routes::Guard;
use crate::state::contacts::ContactsState;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Restores the persisted session, provides the shared state contexts, and
/// sets up client-side routing with a guard wrapped around every view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::restore());
    let contacts = RwSignal::new(ContactsState::default());

    provide_context(session);
    provide_context(contacts);

    view! {
        <Stylesheet id="leptos" href="/pkg/agenda-web.css"/>
        <Title text="Agenda"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Guard path="/"><HomePage/></Guard> }
                    />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <Guard path="/login"><LoginPage/></Guard> }
                    />
                    <Route
                        path=StaticSegment("registro")
                        view=|| view! { <Guard path="/registro"><RegisterPage/></Guard> }
                    />
                    <Route
                        path=StaticSegment("agenda")
                        view=|| view! { <Guard path="/agenda"><AgendaPage/></Guard> }
                    />
                    <Route
                        path=(StaticSegment("agenda"), StaticSegment("crear"))
                        view=|| view! { <Guard path="/agenda/crear"><ContactCreatePage/></Guard> }
                    />
                    <Route
                        path=(
                            StaticSegment("agenda"),
                            StaticSegment("editar"),
                            ParamSegment("id"),
                        )
                        view=|| view! { <Guard path="/agenda/editar/:id"><ContactEditPage/></Guard> }
                    />
                    <Route
                        path=StaticSegment("perfil")
                        view=|| view! { <Guard path="/perfil"><ProfilePage/></Guard> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
