use super::*;

// =============================================================
// Guard decision matrix
// =============================================================

#[test]
fn public_routes_always_allow() {
    assert_eq!(evaluate(RouteAccess::Public, false), GuardOutcome::Allow);
    assert_eq!(evaluate(RouteAccess::Public, true), GuardOutcome::Allow);
}

#[test]
fn auth_routes_redirect_guests_to_login() {
    assert_eq!(
        evaluate(RouteAccess::RequiresAuth, false),
        GuardOutcome::Redirect(LOGIN_PATH)
    );
}

#[test]
fn auth_routes_allow_authenticated_sessions() {
    assert_eq!(evaluate(RouteAccess::RequiresAuth, true), GuardOutcome::Allow);
}

#[test]
fn guest_routes_redirect_authenticated_sessions_to_agenda() {
    assert_eq!(
        evaluate(RouteAccess::RequiresGuest, true),
        GuardOutcome::Redirect(AGENDA_PATH)
    );
}

#[test]
fn guest_routes_allow_guests() {
    assert_eq!(evaluate(RouteAccess::RequiresGuest, false), GuardOutcome::Allow);
}

// =============================================================
// Route table
// =============================================================

#[test]
fn route_table_tags_match_the_application() {
    assert_eq!(access_for("/"), RouteAccess::Public);
    assert_eq!(access_for("/login"), RouteAccess::RequiresGuest);
    assert_eq!(access_for("/registro"), RouteAccess::RequiresGuest);
    assert_eq!(access_for("/agenda"), RouteAccess::RequiresAuth);
    assert_eq!(access_for("/agenda/crear"), RouteAccess::RequiresAuth);
    assert_eq!(access_for("/agenda/editar/:id"), RouteAccess::RequiresAuth);
    assert_eq!(access_for("/perfil"), RouteAccess::RequiresAuth);
}

#[test]
fn unknown_paths_are_public() {
    assert_eq!(access_for("/no-such-route"), RouteAccess::Public);
}

#[test]
fn every_route_evaluation_is_total() {
    for route in ROUTES {
        for authenticated in [false, true] {
            // Every (route, session) pair lands in exactly one branch.
            match evaluate(route.access, authenticated) {
                GuardOutcome::Allow => {}
                GuardOutcome::Redirect(to) => {
                    assert!(to == LOGIN_PATH || to == AGENDA_PATH, "{to}");
                }
            }
        }
    }
}
