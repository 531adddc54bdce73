//! Agenda page: the contact list with create/edit/delete actions.

use leptos::prelude::*;

use crate::state::contacts::ContactsState;
use crate::state::session::Session;

/// Contact list page. Fetches the list on mount; deletions update the
/// shared state in place so the list never refetches just to shrink.
#[component]
pub fn AgendaPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let contacts = expect_context::<RwSignal<ContactsState>>();

    #[cfg(feature = "hydrate")]
    {
        contacts.update(|c| c.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::contacts::list(session).await {
                Ok(items) => contacts.update(|c| c.set_loaded(items)),
                Err(msg) => contacts.update(|c| c.set_failed(msg)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    let on_delete = move |id: i64| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::contacts::delete(session, id).await {
                Ok(()) => contacts.update(|c| c.remove(id)),
                Err(msg) => contacts.update(|c| c.set_failed(msg)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    view! {
        <div class="agenda-page">
            <header class="agenda-page__header">
                <h1>"Mis contactos"</h1>
                <a class="btn btn--primary" href="/agenda/crear">
                    "+ Nuevo contacto"
                </a>
            </header>

            {move || contacts.with(|c| c.error.clone()).map(|msg| {
                view! { <p class="form-error">{msg}</p> }
            })}

            <Show
                when=move || !contacts.with(|c| c.loading)
                fallback=|| view! { <p>"Cargando contactos..."</p> }
            >
                <ul class="agenda-page__list">
                    <For
                        each=move || contacts.with(|c| c.items.clone())
                        key=|contact| contact.id
                        let:contact
                    >
                        <li class="agenda-page__item">
                            <span class="agenda-page__name">{contact.nombre.clone()}</span>
                            <span class="agenda-page__phone">{contact.telefono.clone()}</span>
                            {contact.email.clone().map(|email| {
                                view! { <span class="agenda-page__email">{email}</span> }
                            })}
                            <a href=format!("/agenda/editar/{}", contact.id)>"Editar"</a>
                            <button on:click=move |_| on_delete(contact.id)>"Eliminar"</button>
                        </li>
                    </For>
                </ul>
            </Show>
        </div>
    }
}
