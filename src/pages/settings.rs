//! Appearance settings with explicit dark/light selection.

use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::state::Theme;
use crate::types::Breadcrumb;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <div class="page settings-page">
            <Breadcrumbs trail=vec![Breadcrumb::link("Overview", "/"), Breadcrumb::current("Settings")]/>
            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="theme-options">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            let class = move || {
                                if theme.get() == option {
                                    "btn theme-option theme-option--active"
                                } else {
                                    "btn theme-option"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| theme.set(option)>
                                    {option.as_str()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
