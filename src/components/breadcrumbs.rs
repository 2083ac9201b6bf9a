//! Breadcrumb trail for the page header.

use leptos::prelude::*;

use crate::types::Breadcrumb;

/// Renders `trail` left to right. The last entry, and any entry without a
/// URL, is plain text; the rest are links.
#[component]
pub fn Breadcrumbs(trail: Vec<Breadcrumb>) -> impl IntoView {
    let last = trail.len().saturating_sub(1);

    view! {
        <ol class="breadcrumbs">
            {trail
                .into_iter()
                .enumerate()
                .map(|(i, crumb)| match crumb.url {
                    Some(url) if i != last => {
                        view! {
                            <li class="breadcrumbs__item">
                                <a href=url>{crumb.label}</a>
                            </li>
                        }
                        .into_any()
                    }
                    _ => {
                        view! {
                            <li class="breadcrumbs__item breadcrumbs__item--current">{crumb.label}</li>
                        }
                        .into_any()
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
    }
}
