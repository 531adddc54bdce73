//! Registration page.
//!
//! Registration never logs the user in; on success we send them to the
//! login page to authenticate with their new account.

use leptos::prelude::*;

use crate::state::session::Session;

/// Registration page with username/password form.
#[component]
pub fn RegisterPage() -> impl IntoView {
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
                match crate::state::session::register(session, user.trim(), &pass).await {
                    Ok(payload) if payload.success => {
                        navigate(
                            crate::routes::LOGIN_PATH,
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Ok(payload) => {
                        error.set(Some(payload.message.unwrap_or_else(|| {
                            "No se pudo completar el registro".to_owned()
                        })));
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
        <div class="register-page">
            <h1>"Crear cuenta"</h1>
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
                    "Registrarse"
                </button>
            </form>
            <p>
                "¿Ya tienes cuenta? "
                <a href="/login">"Inicia sesión"</a>
            </p>
        </div>
    }
}
