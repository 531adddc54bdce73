//! Login page with username/password form.

use leptos::prelude::*;

use crate::state::session::Session;

/// Login page — submits credentials to the session store and navigates to
/// the agenda on success. Failures render the store's recovered message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.trim().is_empty() || pass.is_empty() {
            error.set(Some("Usuario y contraseña son obligatorios".to_owned()));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            pending.set(true);
            error.set(None);
            leptos::task::spawn_local(async move {
                match crate::state::session::login(session, user.trim(), &pass).await {
                    Ok(()) => {
                        navigate(
                            crate::routes::AGENDA_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(msg) => error.set(Some(msg)),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session, pass);
        }
    };

    view! {
        <div class="login-page">
            <h1>"Iniciar sesión"</h1>
            <form on:submit=submit>
                <label>
                    "Usuario"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Contraseña"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                <button type="submit" disabled=move || pending.get()>
                    "Entrar"
                </button>
            </form>
            <p>
                "¿Sin cuenta? "
                <a href="/registro">"Regístrate"</a>
            </p>
        </div>
    }
}
