//! Edit-contact page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::contact_form::ContactForm;
use crate::state::session::Session;

/// Edit form for an existing contact, loaded by the `:id` route parameter.
#[component]
pub fn ContactEditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let params = use_params_map();
    let id = params.with_untracked(|p| p.get("id").and_then(|v| v.parse::<i64>().ok()));

    let nombre = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);
    let loading = RwSignal::new(true);

    // Prefill the form from the backend copy.
    #[cfg(feature = "hydrate")]
    {
        match id {
            Some(id) => leptos::task::spawn_local(async move {
                match crate::net::contacts::get(session, id).await {
                    Ok(contact) => {
                        nombre.set(contact.nombre);
                        telefono.set(contact.telefono);
                        email.set(contact.email.unwrap_or_default());
                    }
                    Err(msg) => error.set(Some(msg)),
                }
                loading.set(false);
            }),
            None => {
                error.set(Some("Contacto no encontrado".to_owned()));
                loading.set(false);
            }
        }
    }

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let Some(id) = id else {
                return;
            };
            let navigate = navigate.clone();
            let input = crate::net::types::ContactInput {
                nombre: nombre.get().trim().to_owned(),
                telefono: telefono.get().trim().to_owned(),
                email: Some(email.get().trim().to_owned()).filter(|e| !e.is_empty()),
            };
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::contacts::update(session, id, &input).await {
                    Ok(payload) if payload.success => {
                        navigate(
                            crate::routes::AGENDA_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Ok(payload) => {
                        error.set(Some(payload.message.unwrap_or_else(|| {
                            "No se pudo guardar el contacto".to_owned()
                        })));
                    }
                    Err(msg) => error.set(Some(msg)),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (session, id);
    });

    view! {
        <div class="contact-page">
            <h1>"Editar contacto"</h1>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p>"Cargando contacto..."</p> }
            >
                <ContactForm
                    nombre=nombre
                    telefono=telefono
                    email=email
                    error=error
                    pending=pending
                    submit_label="Guardar"
                    on_submit=on_submit
                />
            </Show>
            <a href="/agenda">"Volver a la agenda"</a>
        </div>
    }
}
