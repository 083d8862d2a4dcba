//! Static dataset of majors, partner universities and their programs.
//!
//! The dataset ships inside the binary as JSON and is validated once at
//! startup. Nothing mutates it afterwards.

use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;

mod model;
mod requirements;

pub use model::{Major, Program, University};
pub use requirements::{
	AucCategory, Course, CourseOption, PreEngineeringRequirements, RequirementCategory,
};

const PATHWAYS_JSON: &str = include_str!("engineering_paths.json");
const REQUIREMENTS_JSON: &str = include_str!("pre_engineering.json");

#[derive(Deserialize)]
struct PathwaysFile {
	majors: Vec<Major>,
	universities: Vec<University>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
	majors: Vec<Major>,
	universities: Vec<University>,
	requirements: PreEngineeringRequirements,
}

impl Dataset {
	/// Validate and assemble a dataset.
	///
	/// Majors, universities and programs share one id namespace because they
	/// become nodes of the same graph.
	pub fn new(
		majors: Vec<Major>,
		universities: Vec<University>,
		requirements: PreEngineeringRequirements,
	) -> Result<Self> {
		let mut ids = HashSet::new();
		let mut claim = |id: &str, what: &str| -> Result<()> {
			if id.trim().is_empty() {
				bail!("{what} has an empty id");
			}
			if !ids.insert(id.to_string()) {
				bail!("duplicate id `{id}` ({what})");
			}
			Ok(())
		};

		for major in &majors {
			claim(&major.id, "major")?;
		}
		for university in &universities {
			claim(&university.id, "university")?;
			for program in &university.programs {
				claim(&program.id, "program")
					.with_context(|| format!("in university `{}`", university.id))?;
			}
		}

		let major_ids: HashSet<&str> = majors.iter().map(|m| m.id.as_str()).collect();
		for university in &universities {
			for program in &university.programs {
				for major_id in &program.major_ids {
					if !major_ids.contains(major_id.as_str()) {
						bail!(
							"program `{}` at `{}` references unknown major `{}`",
							program.id,
							university.id,
							major_id
						);
					}
				}
			}
		}

		Ok(Self {
			majors,
			universities,
			requirements,
		})
	}

	/// Parse a dataset from its JSON representations.
	pub fn from_json(pathways: &str, requirements: &str) -> Result<Self> {
		let file: PathwaysFile =
			serde_json::from_str(pathways).context("parsing pathways dataset")?;
		let requirements: PreEngineeringRequirements =
			serde_json::from_str(requirements).context("parsing pre-engineering requirements")?;
		Self::new(file.majors, file.universities, requirements)
	}

	/// The dataset compiled into the site.
	pub fn bundled() -> Result<Self> {
		let dataset = Self::from_json(PATHWAYS_JSON, REQUIREMENTS_JSON)?;
		info!(
			"Loaded {} majors and {} partner universities ({} programs)",
			dataset.majors.len(),
			dataset.universities.len(),
			dataset.program_count()
		);
		Ok(dataset)
	}

	pub fn majors(&self) -> &[Major] {
		&self.majors
	}

	pub fn universities(&self) -> &[University] {
		&self.universities
	}

	pub fn requirements(&self) -> &PreEngineeringRequirements {
		&self.requirements
	}

	pub fn major(&self, id: &str) -> Option<&Major> {
		self.majors.iter().find(|m| m.id == id)
	}

	pub fn university(&self, id: &str) -> Option<&University> {
		self.universities.iter().find(|u| u.id == id)
	}

	/// Look up a program together with the university that owns it.
	pub fn program(&self, id: &str) -> Option<(&University, &Program)> {
		self.universities
			.iter()
			.find_map(|u| u.program(id).map(|p| (u, p)))
	}

	pub fn program_count(&self) -> usize {
		self.universities.iter().map(|u| u.programs.len()).sum()
	}

	/// Majors a program accepts, in dataset order.
	pub fn majors_for(&self, program: &Program) -> Vec<&Major> {
		self.majors
			.iter()
			.filter(|m| program.major_ids.contains(&m.id))
			.collect()
	}
}

#[cfg(test)]
pub(crate) mod fixtures {
	//! Small hand-built datasets for unit tests.

	use super::model::{Gpa, SpecialFeatures, UniversityRequirements};
	use super::*;

	pub fn major(id: &str, name: &str) -> Major {
		Major {
			id: id.into(),
			name: name.into(),
			description: format!("About {name}"),
			courses: Vec::new(),
			degree_types: None,
		}
	}

	pub fn program(id: &str, name: &str, majors: &[&str]) -> Program {
		Program {
			id: id.into(),
			name: name.into(),
			major_ids: majors.iter().map(|m| m.to_string()).collect(),
			requirements: Vec::new(),
		}
	}

	pub fn university(id: &str, name: &str, gpa: &str, programs: Vec<Program>) -> University {
		University {
			id: id.into(),
			name: name.into(),
			programs,
			requirements: UniversityRequirements {
				gpa: Gpa(gpa.into()),
				notes: String::new(),
			},
			special_features: SpecialFeatures::default(),
		}
	}

	pub fn empty_requirements() -> PreEngineeringRequirements {
		PreEngineeringRequirements {
			categories: Vec::new(),
			total_technical_credits: 0,
			non_technical_credits: 0,
			transfer_requirements: String::new(),
			major_requirements: String::new(),
			auc_categories: Vec::new(),
		}
	}

	/// Two universities:
	/// `drexel` with chemical (chemistry, mathematics), computer
	/// (computer-science, mathematics) and civil (mathematics);
	/// `pitt` with industrial (mathematics).
	pub fn sample() -> Dataset {
		let mut chemistry = major("chemistry", "Chemistry");
		chemistry.courses = vec!["CH 201 Organic Chemistry I".into()];
		Dataset::new(
			vec![
				major("mathematics", "Mathematics"),
				major("computer-science", "Computer Science"),
				chemistry,
			],
			vec![
				university(
					"drexel",
					"Drexel University",
					"N/A",
					vec![
						program("chemical", "Chemical Engineering", &["chemistry", "mathematics"]),
						program("computer", "Computer Engineering", &["computer-science", "mathematics"]),
						program("civil", "Civil Engineering", &["mathematics"]),
					],
				),
				university(
					"pitt",
					"University of Pittsburgh",
					"3.00",
					vec![program("industrial", "Industrial Engineering", &["mathematics"])],
				),
			],
			empty_requirements(),
		)
		.unwrap()
	}
}

#[cfg(test)]
mod tests {
	use super::fixtures::*;
	use super::*;

	#[test]
	fn bundled_dataset_loads() {
		let dataset = Dataset::bundled().unwrap();
		assert!(!dataset.majors().is_empty());
		assert!(dataset.university("drexel-university").is_some());
		assert!(dataset.program("chemical-pitt").is_some());
		assert!(dataset.requirements().total_credits() > 0);
	}

	#[test]
	fn rejects_unknown_major_reference() {
		let err = Dataset::new(
			vec![major("mathematics", "Mathematics")],
			vec![university(
				"u",
				"U",
				"N/A",
				vec![program("p", "P", &["mathematics", "physics"])],
			)],
			empty_requirements(),
		)
		.unwrap_err();
		assert!(err.to_string().contains("unknown major `physics`"));
	}

	#[test]
	fn rejects_duplicate_ids_across_kinds() {
		let err = Dataset::new(
			vec![major("civil", "Civil")],
			vec![university(
				"u",
				"U",
				"N/A",
				vec![program("civil", "Civil Engineering", &["civil"])],
			)],
			empty_requirements(),
		)
		.unwrap_err();
		assert!(format!("{err:#}").contains("duplicate id `civil`"));
	}

	#[test]
	fn rejects_empty_id() {
		assert!(Dataset::new(vec![major(" ", "Blank")], Vec::new(), empty_requirements()).is_err());
	}

	#[test]
	fn reports_malformed_json() {
		let err = Dataset::from_json("{ \"majors\": 3 }", REQUIREMENTS_JSON).unwrap_err();
		assert!(err.to_string().contains("parsing pathways dataset"));
	}

	#[test]
	fn program_lookup_returns_owner() {
		let dataset = sample();
		let (university, program) = dataset.program("industrial").unwrap();
		assert_eq!(university.id, "pitt");
		assert_eq!(program.name, "Industrial Engineering");
		let names: Vec<_> = dataset
			.majors_for(program)
			.iter()
			.map(|m| m.id.as_str())
			.collect();
		assert_eq!(names, vec!["mathematics"]);
	}
}
