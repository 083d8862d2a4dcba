use crate::data::{Dataset, Major, Program, University};

/// Drill-down selection: university, then one of its programs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MillerSelection {
	pub university_id: Option<String>,
	pub program_id: Option<String>,
}

impl MillerSelection {
	/// Picking a university resets the program column.
	pub fn select_university(&self, university_id: &str) -> Self {
		Self {
			university_id: Some(university_id.to_string()),
			program_id: None,
		}
	}

	pub fn select_program(&self, program_id: &str) -> Self {
		Self {
			program_id: Some(program_id.to_string()),
			..self.clone()
		}
	}

	pub fn university<'a>(&self, dataset: &'a Dataset) -> Option<&'a University> {
		dataset.university(self.university_id.as_deref()?)
	}

	/// The selected program, provided it belongs to the selected university.
	pub fn program<'a>(&self, dataset: &'a Dataset) -> Option<&'a Program> {
		self.university(dataset)?.program(self.program_id.as_deref()?)
	}
}

fn contains(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

/// Universities whose name, or any program name, matches the term.
pub fn filter_universities<'a>(dataset: &'a Dataset, term: &str) -> Vec<&'a University> {
	let needle = term.to_lowercase();
	dataset
		.universities()
		.iter()
		.filter(|u| {
			needle.is_empty()
				|| contains(&u.name, &needle)
				|| u.programs.iter().any(|p| contains(&p.name, &needle))
		})
		.collect()
}

/// Programs of `university` whose name, or any related major's name,
/// matches the term.
pub fn filter_programs<'a>(dataset: &Dataset, university: &'a University, term: &str) -> Vec<&'a Program> {
	let needle = term.to_lowercase();
	university
		.programs
		.iter()
		.filter(|p| {
			needle.is_empty()
				|| contains(&p.name, &needle)
				|| dataset
					.majors_for(p)
					.iter()
					.any(|m| contains(&m.name, &needle))
		})
		.collect()
}

pub fn matching_majors<'a>(dataset: &'a Dataset, program: &Program) -> Vec<&'a Major> {
	dataset.majors_for(program)
}
