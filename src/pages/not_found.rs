use leptos::prelude::*;
use leptos_router::components::A;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<main class="page not-found">
			<h1>"Page not found"</h1>
			<p class="muted">"That pathway doesn't exist."</p>
			<A href="/">"Back to Engineering Pathways"</A>
		</main>
	}
}
