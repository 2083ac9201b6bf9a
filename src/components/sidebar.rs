//! Sidebar navigation list.

use leptos::prelude::*;

use crate::types::NavigationItem;

#[component]
pub fn Sidebar(items: Vec<NavigationItem>) -> impl IntoView {
    view! {
        <nav class="sidebar">
            <ul class="nav-list">
                {items
                    .into_iter()
                    .map(|item| {
                        let icon_class = format!("nav-icon nav-icon--{}", item.icon);
                        view! {
                            <li class="nav-item" data-nav-id=item.id>
                                <a href=item.url class="nav-link">
                                    <span class=icon_class></span>
                                    {item.label}
                                    {item.badge.map(|badge| view! { <span class="nav-badge">{badge}</span> })}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}
