//! Button flipping between the dark and light themes.

use leptos::prelude::*;

use crate::state::Theme;

/// Toggle button bound to the theme signal provided by `App`.
///
/// Shows a sun while dark (click for light) and a moon while light.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    let on_click = move |_| theme.update(|t| *t = t.toggled());
    let title = move || format!("Switch to {} theme", theme.get().toggled());

    view! {
        <button class="btn theme-toggle" on:click=on_click title=title>
            {move || if theme.get().is_dark() { "\u{2600}" } else { "\u{263E}" }}
        </button>
    }
}
