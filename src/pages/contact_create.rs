//! Create-contact page.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::state::session::Session;

/// New-contact form; returns to the agenda once the backend confirms.
#[component]
pub fn ContactCreatePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let nombre = RwSignal::new(String::new());
    let telefono = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let input = crate::net::types::ContactInput {
                nombre: nombre.get().trim().to_owned(),
                telefono: telefono.get().trim().to_owned(),
                email: Some(email.get().trim().to_owned()).filter(|e| !e.is_empty()),
            };
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::contacts::create(session, &input).await {
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
        let _ = session;
    });

    view! {
        <div class="contact-page">
            <h1>"Nuevo contacto"</h1>
            <ContactForm
                nombre=nombre
                telefono=telefono
                email=email
                error=error
                pending=pending
                submit_label="Crear"
                on_submit=on_submit
            />
            <a href="/agenda">"Volver a la agenda"</a>
        </div>
    }
}
