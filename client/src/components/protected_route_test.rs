use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::storage::MemoryStore;

fn logged_in() -> AuthState {
    AuthState {
        session: Some(Session { token: "old".into(), user_id: "1".into(), role: Role::Customer }),
        loading: false,
    }
}

#[test]
fn token_swap_keeps_render_decision_without_rerunning_dependents() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(logged_in());
    let decision = guard_decision(AppRoute::UpdateUser, auth);
    let renders = Arc::new(AtomicUsize::new(0));
    let page = Memo::new({
        let renders = renders.clone();
        move |_| {
            renders.fetch_add(1, Ordering::Relaxed);
            decision.get()
        }
    });

    assert_eq!(page.get(), RouteDecision::Render);
    auth.update(|a| a.replace_token("new".into(), &MemoryStore::new()));

    assert_eq!(page.get(), RouteDecision::Render);
    assert_eq!(auth.get_untracked().token(), Some("new"));
    assert_eq!(renders.load(Ordering::Relaxed), 1);
}

#[test]
fn logout_changes_decision_to_redirect() {
    let owner = Owner::new();
    owner.set();

    let auth = RwSignal::new(logged_in());
    let decision = guard_decision(AppRoute::Dashboard, auth);
    assert_eq!(decision.get(), RouteDecision::Render);

    auth.update(|a| a.logout(&MemoryStore::new()));

    assert_eq!(decision.get(), RouteDecision::Redirect("/login"));
}
