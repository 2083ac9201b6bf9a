//! Current user avatar, name, role, presence, and the user menu.

use leptos::prelude::*;

use crate::state::User;
use crate::types::{UserMenuAction, default_user_menu};

#[component]
pub fn UserBadge(on_action: Callback<UserMenuAction>) -> impl IntoView {
    let user = expect_context::<RwSignal<User>>();
    let menu_open = RwSignal::new(false);

    let avatar = move || {
        let u = user.get();
        match u.avatar.clone() {
            Some(src) => view! { <img class="user-badge__avatar" src=src alt=u.name/> }.into_any(),
            None => view! { <span class="user-badge__initials">{u.initials()}</span> }.into_any(),
        }
    };
    let status_class = move || {
        format!(
            "user-badge__status user-badge__status--{}",
            user.get().status.to_string().to_lowercase()
        )
    };

    let entries = default_user_menu()
        .into_iter()
        .map(|(label, action)| {
            view! {
                <li>
                    <button
                        class="user-badge__menu-item"
                        on:click=move |_| {
                            menu_open.set(false);
                            on_action.run(action.clone());
                        }
                    >
                        {label}
                    </button>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="user-badge">
            <button class="user-badge__trigger" on:click=move |_| menu_open.update(|open| *open = !*open)>
                {avatar}
                <span class="user-badge__name">{move || user.get().name}</span>
                <span class="user-badge__role">{move || user.get().role.to_string()}</span>
                <span class=status_class title=move || user.get().status.to_string()></span>
            </button>
            <ul class=move || {
                if menu_open.get() { "user-badge__menu user-badge__menu--open" } else { "user-badge__menu" }
            }>
                {entries}
            </ul>
        </div>
    }
}
