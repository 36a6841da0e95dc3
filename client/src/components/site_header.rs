//! Page header with the product title and navigation links.

use leptos::prelude::*;
use leptos_router::components::A;

/// Header shared by every page.
#[component]
pub fn SiteHeader(title: &'static str, nav: Vec<(&'static str, &'static str)>) -> impl IntoView {
    view! {
        <header class="site-header">
            <span class="site-header__icon" aria-hidden="true">"🛡"</span>
            <h1 class="site-header__title">{title}</h1>
            <nav class="site-header__nav">
                {nav
                    .into_iter()
                    .map(|(href, label)| view! { <A href=href>{label}</A> })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
