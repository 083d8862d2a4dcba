use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Course {
	pub code: String,
	pub name: String,
	pub credits: u32,
	#[serde(default)]
	pub note: Option<String>,
}

/// "Choose `select_count` of the following" block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseOption {
	pub select_count: u32,
	pub courses: Vec<Course>,
	#[serde(default)]
	pub note: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementCategory {
	pub id: String,
	pub name: String,
	pub description: String,
	#[serde(default)]
	pub total_credits: Option<u32>,
	#[serde(default)]
	pub courses: Vec<Course>,
	#[serde(default)]
	pub course_options: Vec<CourseOption>,
	#[serde(default)]
	pub note: Option<String>,
}

/// An Arcadia University Curriculum (AUC) category.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AucCategory {
	pub code: String,
	pub name: String,
}

/// Courses every dual-degree student completes at Arcadia.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreEngineeringRequirements {
	pub categories: Vec<RequirementCategory>,
	pub total_technical_credits: u32,
	pub non_technical_credits: u32,
	pub transfer_requirements: String,
	pub major_requirements: String,
	#[serde(default)]
	pub auc_categories: Vec<AucCategory>,
}

impl PreEngineeringRequirements {
	pub fn total_credits(&self) -> u32 {
		self.total_technical_credits + self.non_technical_credits
	}
}

impl CourseOption {
	pub fn prompt(&self) -> String {
		let plural = if self.select_count > 1 { "s" } else { "" };
		format!("Choose {} course{} from:", self.select_count, plural)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn option_prompt_pluralizes() {
		let mut option = CourseOption {
			select_count: 1,
			courses: Vec::new(),
			note: None,
		};
		assert_eq!(option.prompt(), "Choose 1 course from:");
		option.select_count = 2;
		assert_eq!(option.prompt(), "Choose 2 courses from:");
	}
}
