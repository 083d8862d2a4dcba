use crate::data::{Dataset, Program, University};

pub const MAX_COMPARED: usize = 3;

/// One program picked for comparison.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgramPick {
	pub university_id: String,
	pub program_id: String,
}

impl ProgramPick {
	pub fn new(university_id: &str, program_id: &str) -> Self {
		Self {
			university_id: university_id.to_string(),
			program_id: program_id.to_string(),
		}
	}

	pub fn resolve<'a>(&self, dataset: &'a Dataset) -> Option<(&'a University, &'a Program)> {
		let university = dataset.university(&self.university_id)?;
		Some((university, university.program(&self.program_id)?))
	}
}

/// Which card gets which badge; `None` when every value is equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonMetrics {
	pub lowest_gpa: Option<usize>,
	pub highest_gpa: Option<usize>,
	pub fewest_requirements: Option<usize>,
	pub most_requirements: Option<usize>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonSet {
	picks: Vec<ProgramPick>,
}

impl ComparisonSet {
	pub fn picks(&self) -> &[ProgramPick] {
		&self.picks
	}

	pub fn len(&self) -> usize {
		self.picks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.picks.is_empty()
	}

	pub fn is_full(&self) -> bool {
		self.picks.len() >= MAX_COMPARED
	}

	pub fn contains(&self, pick: &ProgramPick) -> bool {
		self.picks.contains(pick)
	}

	/// Returns false when the set is full or already holds the pick.
	pub fn add(&mut self, pick: ProgramPick) -> bool {
		if self.is_full() || self.contains(&pick) {
			return false;
		}
		self.picks.push(pick);
		true
	}

	pub fn remove(&mut self, index: usize) {
		if index < self.picks.len() {
			self.picks.remove(index);
		}
	}

	pub fn clear(&mut self) {
		self.picks.clear();
	}

	pub fn metrics(&self, dataset: &Dataset) -> ComparisonMetrics {
		let resolved: Vec<(usize, &University, &Program)> = self
			.picks
			.iter()
			.enumerate()
			.filter_map(|(i, pick)| pick.resolve(dataset).map(|(u, p)| (i, u, p)))
			.collect();

		let gpas: Vec<(usize, f64)> = resolved
			.iter()
			.filter_map(|(i, u, _)| u.requirements.gpa.threshold().map(|g| (*i, g)))
			.collect();
		let (lowest_gpa, highest_gpa) = extremes(&gpas);

		let counts: Vec<(usize, f64)> = resolved
			.iter()
			.map(|(i, _, p)| (*i, p.requirements.len() as f64))
			.collect();
		let (fewest_requirements, most_requirements) = extremes(&counts);

		ComparisonMetrics {
			lowest_gpa,
			highest_gpa,
			fewest_requirements,
			most_requirements,
		}
	}
}

/// Index of the first minimum and the first maximum, unless all are equal.
fn extremes(values: &[(usize, f64)]) -> (Option<usize>, Option<usize>) {
	let mut min: Option<(usize, f64)> = None;
	let mut max: Option<(usize, f64)> = None;
	for &(i, v) in values {
		if min.is_none_or(|(_, m)| v < m) {
			min = Some((i, v));
		}
		if max.is_none_or(|(_, m)| v > m) {
			max = Some((i, v));
		}
	}
	match (min, max) {
		(Some((lo, lv)), Some((hi, hv))) if lv != hv => (Some(lo), Some(hi)),
		_ => (None, None),
	}
}

/// Programs for the selector, filtered by program or university name and
/// grouped by university in dataset order.
pub fn search_options<'a>(dataset: &'a Dataset, term: &str) -> Vec<(&'a University, Vec<&'a Program>)> {
	let needle = term.to_lowercase();
	dataset
		.universities()
		.iter()
		.filter_map(|university| {
			let university_matches = university.name.to_lowercase().contains(&needle);
			let programs: Vec<&Program> = university
				.programs
				.iter()
				.filter(|p| university_matches || p.name.to_lowercase().contains(&needle))
				.collect();
			(!programs.is_empty()).then_some((university, programs))
		})
		.collect()
}
