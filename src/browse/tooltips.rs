use crate::data::University;

pub const MAJOR_TOOLTIP: &str =
	"These are the typical Arcadia majors for students pursuing this dual degree path.";

pub const GUARANTEED_ADMISSION_TOOLTIP: &str = "If students satisfy the course and GPA requirements, they are automatically admitted. Other universities require application even after meeting requirements.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
	GuaranteedAdmission,
	ProgramType,
	Coop,
	Major,
}

impl TagKind {
	pub fn css_class(self) -> &'static str {
		match self {
			TagKind::GuaranteedAdmission => "tag tag-admission",
			TagKind::ProgramType => "tag tag-structure",
			TagKind::Coop => "tag tag-coop",
			TagKind::Major => "tag tag-major",
		}
	}

	pub fn icon(self) -> &'static str {
		match self {
			TagKind::GuaranteedAdmission => "✓",
			TagKind::ProgramType => "🎓",
			TagKind::Coop => "💼",
			TagKind::Major => "",
		}
	}

	/// Label shown on the tag itself.
	pub fn short_text(self, text: &str) -> String {
		match self {
			TagKind::GuaranteedAdmission => "Auto Admit".into(),
			_ => text.into(),
		}
	}
}

fn program_type_description(program_type: &str) -> Option<&'static str> {
	Some(match program_type {
		"3+2" => "3 years at Arcadia + 2 years at partner university\n(Reduced AUCs apply - only 10)",
		"4+2" => "4 years at Arcadia + 2 years at partner university\n(All AUCs apply - 20+)",
		"4+3" => "4 years at Arcadia + 3 years at partner university\n(All AUCs apply - 20+)",
		"3+3" => "3 years at Arcadia + 3 years at partner university\n(Reduced AUCs apply - only 10)",
		"2+1+1+1" => "2 years at Arcadia + 1 year at partner\n+ 1 year at Arcadia + 1 final year at partner\n(All AUCs apply - 20+)",
		_ => return None,
	})
}

/// Explain one or more program structures joined with `" & "`.
pub fn program_type_tooltip(program_types: &str) -> String {
	let descriptions: Vec<&str> = program_types
		.split(" & ")
		.filter_map(|t| program_type_description(t.trim()))
		.collect();
	match descriptions.as_slice() {
		[] => program_types.to_string(),
		[single] => single.to_string(),
		many => many
			.iter()
			.map(|d| format!("• {d}"))
			.collect::<Vec<_>>()
			.join("\n\n"),
	}
}

pub fn coop_tooltip(university: &University) -> &'static str {
	if university.name == "Drexel University" {
		"Includes 1 co-op (practicum) year out of the 3 years at Drexel. Co-op provides hands-on work experience at companies."
	} else {
		"Co-op (cooperative education) provides hands-on work experience at companies during studies."
	}
}

/// Tooltip text for a tag on a university's comparison card.
pub fn tooltip(kind: TagKind, university: &University) -> String {
	match kind {
		TagKind::Major => MAJOR_TOOLTIP.into(),
		TagKind::GuaranteedAdmission => GUARANTEED_ADMISSION_TOOLTIP.into(),
		TagKind::ProgramType => {
			program_type_tooltip(&university.special_features.program_types.join(" & "))
		}
		TagKind::Coop => coop_tooltip(university).into(),
	}
}

/// Feature tags for a university card: label text plus kind, in display order.
pub fn feature_tags(university: &University) -> Vec<(TagKind, String)> {
	let features = &university.special_features;
	let mut tags = Vec::new();
	if features.guaranteed_admission {
		tags.push((
			TagKind::GuaranteedAdmission,
			TagKind::GuaranteedAdmission.short_text("Guaranteed"),
		));
	}
	if !features.program_types.is_empty() {
		tags.push((TagKind::ProgramType, features.program_types.join(" & ")));
	}
	if features.coop_required {
		tags.push((TagKind::Coop, "Co-op".into()));
	}
	tags
}
