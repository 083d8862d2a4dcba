use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::miller_columns::MillerColumns;

#[component]
pub fn MillerDemo() -> impl IntoView {
	view! {
		<main class="page">
			<Header />
			<section class="card notice">
				<h2>"🔄 Miller Columns Interface"</h2>
				<p>"Select a university, choose a program, then view its requirements."</p>
			</section>
			<MillerColumns />
		</main>
	}
}
