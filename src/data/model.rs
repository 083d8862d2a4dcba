use serde::Deserialize;

/// An Arcadia major a student can pursue before transferring.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Major {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(default)]
	pub courses: Vec<String>,
	#[serde(default)]
	pub degree_types: Option<Vec<String>>,
}

/// An engineering program offered by a partner university.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
	pub id: String,
	pub name: String,
	#[serde(rename = "arcadiaMajorIds")]
	pub major_ids: Vec<String>,
	#[serde(default)]
	pub requirements: Vec<String>,
}

/// GPA requirement as published, e.g. `"3.25"`, `"N/A"` or
/// `"3.00 (3.50 for Bioengineering)"`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Gpa(pub String);

impl Gpa {
	/// Leading numeric threshold, `None` when no GPA is specified.
	pub fn threshold(&self) -> Option<f64> {
		let text = self.0.trim();
		let end = text
			.char_indices()
			.find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
			.map(|(i, _)| i)
			.unwrap_or(text.len());
		text[..end].parse().ok()
	}

	pub fn is_specified(&self) -> bool {
		self.0.trim() != "N/A"
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UniversityRequirements {
	pub gpa: Gpa,
	pub notes: String,
}

/// Flags shown as tags on comparison cards.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecialFeatures {
	pub guaranteed_admission: bool,
	/// Structures such as `"3+2"` or `"4+2"`.
	pub program_types: Vec<String>,
	pub coop_required: bool,
	pub degree_info: Option<String>,
	pub unique_structure: Option<String>,
}

/// A partner university and the programs it owns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct University {
	pub id: String,
	pub name: String,
	pub programs: Vec<Program>,
	pub requirements: UniversityRequirements,
	#[serde(default)]
	pub special_features: SpecialFeatures,
}

impl University {
	pub fn program(&self, program_id: &str) -> Option<&Program> {
		self.programs.iter().find(|p| p.id == program_id)
	}
}
