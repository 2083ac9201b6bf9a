//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{sidebar::Sidebar, theme_toggle::ThemeToggle, user_badge::UserBadge};
use crate::pages::{overview::OverviewPage, settings::SettingsPage};
use crate::state::{Disposer, ThemeState, User, UserStore};
use crate::types::{UserMenuAction, default_navigation};

/// Root application component.
///
/// Bridges `ThemeState` and `UserStore` into signals shared through context.
/// Signal writes flow back into `ThemeState`, so DOM, storage, and window
/// listeners see clicks made inside the app. Both bridges are detached when
/// `App` is unmounted.
#[component]
pub fn App(state: ThemeState, users: UserStore) -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(state.get());
    let theme_bridge = state.subscribe(move |t| {
        if theme.get_untracked() != t {
            theme.set(t);
        }
    });
    Effect::new(move |_| {
        let t = theme.get();
        if state.get() != t {
            state.set(t);
        }
    });

    let user = RwSignal::new(users.get());
    let user_bridge = users.subscribe(move |u: &User| user.set(u.clone()));

    let bridges = StoredValue::new_local(Disposer::all(vec![theme_bridge, user_bridge]));
    on_cleanup(move || bridges.update_value(Disposer::dispose));

    let on_user_action = Callback::new(|action: UserMenuAction| {
        log::info!("user menu: {}", action.action);
    });

    provide_context(theme);
    provide_context(user);

    view! {
        <Title text="Dashboard"/>

        <Router>
            <div class="app-layout">
                <Sidebar items=default_navigation()/>
                <main class="content">
                    <header class="topbar">
                        <span class="topbar__spacer"></span>
                        <ThemeToggle/>
                        <UserBadge on_action=on_user_action/>
                    </header>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=OverviewPage/>
                        <Route path=StaticSegment("settings") view=SettingsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
