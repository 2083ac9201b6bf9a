//! Landing page summarising the active theme and signed-in user.

use leptos::prelude::*;

use crate::components::breadcrumbs::Breadcrumbs;
use crate::state::{Theme, User};
use crate::types::Breadcrumb;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();
    let user = expect_context::<RwSignal<User>>();

    view! {
        <div class="page overview-page">
            <Breadcrumbs trail=vec![Breadcrumb::current("Overview")]/>
            <h2>{move || format!("Welcome back, {}", user.get().name)}</h2>
            <p class="overview-page__theme">
                {move || format!("Current theme: {}", theme.get())}
            </p>
        </div>
    }
}
