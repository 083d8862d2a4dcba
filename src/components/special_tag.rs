use leptos::prelude::*;

use crate::browse::tooltips::{TagKind, feature_tags, tooltip};
use crate::data::University;

/// Small labelled badge; the tooltip shows on hover.
#[component]
pub fn SpecialTag(
	kind: TagKind,
	#[prop(into)] text: String,
	#[prop(into)] tooltip: String,
) -> impl IntoView {
	let icon = kind.icon();
	view! {
		<span class=kind.css_class() title=tooltip>
			{(!icon.is_empty()).then(|| view! { <span class="tag-icon">{icon}</span> })}
			{text}
		</span>
	}
}

#[component]
pub fn FeatureTags(university: University) -> impl IntoView {
	feature_tags(&university)
		.into_iter()
		.map(|(kind, text)| {
			let tip = tooltip(kind, &university);
			view! { <SpecialTag kind=kind text=text tooltip=tip /> }
		})
		.collect_view()
}
