//! Route table and navigation guard.
//!
//! Every route carries an access tag; the `Guard` component re-evaluates
//! the tag against the live session before rendering its view, so each
//! transition attempt ends in exactly one of: allow, redirect to `/login`,
//! or redirect to `/agenda`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;

pub const LOGIN_PATH: &str = "/login";
pub const AGENDA_PATH: &str = "/agenda";

/// Per-route access requirement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Reachable regardless of authentication state.
    Public,
    /// Only for authenticated sessions; others are sent to the login page.
    RequiresAuth,
    /// Only while logged out (login/registration); authenticated sessions
    /// are sent to the agenda.
    RequiresGuest,
}

/// A routed path and its access requirement.
pub struct RouteDef {
    pub path: &'static str,
    pub access: RouteAccess,
}

/// The application's route table. `app.rs` mirrors these paths in the
/// router; the guard looks access tags up here.
pub const ROUTES: &[RouteDef] = &[
    RouteDef { path: "/", access: RouteAccess::Public },
    RouteDef { path: "/login", access: RouteAccess::RequiresGuest },
    RouteDef { path: "/registro", access: RouteAccess::RequiresGuest },
    RouteDef { path: "/agenda", access: RouteAccess::RequiresAuth },
    RouteDef { path: "/agenda/crear", access: RouteAccess::RequiresAuth },
    RouteDef { path: "/agenda/editar/:id", access: RouteAccess::RequiresAuth },
    RouteDef { path: "/perfil", access: RouteAccess::RequiresAuth },
];

/// Access tag for a route path. Unknown paths are public; they fall through
/// to the router's not-found view without interference.
pub fn access_for(path: &str) -> RouteAccess {
    ROUTES
        .iter()
        .find(|r| r.path == path)
        .map_or(RouteAccess::Public, |r| r.access)
}

/// Result of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

/// The guard's decision rules, in priority order.
pub fn evaluate(access: RouteAccess, authenticated: bool) -> GuardOutcome {
    match access {
        RouteAccess::RequiresAuth if !authenticated => GuardOutcome::Redirect(LOGIN_PATH),
        RouteAccess::RequiresGuest if authenticated => GuardOutcome::Redirect(AGENDA_PATH),
        RouteAccess::Public | RouteAccess::RequiresAuth | RouteAccess::RequiresGuest => {
            GuardOutcome::Allow
        }
    }
}

/// Wraps a routed view and enforces its access tag.
///
/// Reads the session reactively, so a logout while a protected view is
/// showing redirects immediately.
#[component]
pub fn Guard(path: &'static str, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let access = access_for(path);

    move || match evaluate(access, session.with(Session::is_authenticated)) {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
    }
}
