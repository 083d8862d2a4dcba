//! Leptos client-side app for exploring Arcadia's dual-degree engineering
//! pathways: routes, logging setup and the dataset bootstrap.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, error, info};

// Modules
mod browse;
mod components;
mod data;
mod pages;
mod pathways;
mod store;

// Top-Level pages
use crate::pages::comparison::Comparison;
use crate::pages::home::Home;
use crate::pages::miller_demo::MillerDemo;
use crate::pages::not_found::NotFound;
use crate::pathways::Pathways;
use crate::store::PathwayStore;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

#[component]
fn LoadError(message: String) -> impl IntoView {
	view! {
		<main class="page load-error">
			<h1>"Uh oh! The pathway data could not be loaded."</h1>
			<pre>{message}</pre>
		</main>
	}
}

/// Loads the bundled dataset, then routes between the pathway pages.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	let body = match Pathways::bundled() {
		Ok(pathways) => {
			provide_context(PathwayStore::new(pathways));
			view! {
				<Router>
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Home />
						<Route path=path!("/comparison") view=Comparison />
						<Route path=path!("/miller-demo") view=MillerDemo />
					</Routes>
				</Router>
			}
			.into_any()
		}
		Err(err) => {
			error!("Failed to load pathway data: {err:#}");
			view! { <LoadError message=format!("{err:#}") /> }.into_any()
		}
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Arcadia University Engineering Pathways" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		{body}
	}
}
