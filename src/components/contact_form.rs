//! Shared contact form used by the create and edit pages.

use leptos::prelude::*;

/// Contact fields form. The parent owns the field signals and performs the
/// network call from `on_submit`; this component only validates that the
/// required fields are present.
#[component]
pub fn ContactForm(
    nombre: RwSignal<String>,
    telefono: RwSignal<String>,
    email: RwSignal<String>,
    error: RwSignal<Option<String>>,
    pending: RwSignal<bool>,
    submit_label: &'static str,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if nombre.get().trim().is_empty() || telefono.get().trim().is_empty() {
            error.set(Some("Nombre y teléfono son obligatorios".to_owned()));
            return;
        }
        on_submit.run(());
    };

    view! {
        <form class="contact-form" on:submit=submit>
            <label>
                "Nombre"
                <input
                    type="text"
                    prop:value=move || nombre.get()
                    on:input=move |ev| nombre.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Teléfono"
                <input
                    type="tel"
                    prop:value=move || telefono.get()
                    on:input=move |ev| telefono.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" disabled=move || pending.get()>
                {submit_label}
            </button>
        </form>
    }
}
