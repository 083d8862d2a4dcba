//! Links into Arcadia's self-service course search.

use std::fmt;

const SELF_SERVICE_SEARCH: &str = "https://selfservice.arcadia.edu/SelfService/Search/Section";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term {
	Fall,
	Spring,
}

impl fmt::Display for Term {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Term::Fall => "FALL",
			Term::Spring => "SPRING",
		})
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Semester {
	pub term: Term,
	pub year: i32,
}

impl Semester {
	/// `2025%2FFALL`
	fn period_param(self) -> String {
		format!("{}%2F{}", self.year, self.term)
	}
}

/// Semester students register for next.
///
/// Mar 7 to Oct 15 is the fall of the same year, Oct 16 onwards the spring
/// of the next year, and before Mar 7 the spring of the same year.
pub fn next_semester(year: i32, month: u32, day: u32) -> Semester {
	let date = month * 100 + day;
	match date {
		307..=1015 => Semester {
			term: Term::Fall,
			year,
		},
		1016.. => Semester {
			term: Term::Spring,
			year: year + 1,
		},
		_ => Semester {
			term: Term::Spring,
			year,
		},
	}
}

/// Today's date from the browser clock as (year, month, day).
pub fn today() -> (i32, u32, u32) {
	let now = js_sys::Date::new_0();
	(
		now.get_full_year() as i32,
		now.get_month() + 1,
		now.get_date(),
	)
}

/// `"MA 201 Calculus I"` gives `"MA201"`; strings that don't start with a
/// subject and number give `None`.
pub fn extract_course_code(course: &str) -> Option<String> {
	if course.starts_with(char::is_whitespace) {
		return None;
	}
	let mut parts = course.split_whitespace();
	let subject = parts.next()?;
	let number = parts.next()?;
	if subject.is_empty() || !subject.chars().all(|c| c.is_ascii_uppercase()) {
		return None;
	}

	let digits = number.chars().take_while(|c| c.is_ascii_digit()).count();
	if digits == 0 {
		return None;
	}
	let suffix = number[digits..]
		.chars()
		.next()
		.filter(|c| c.is_ascii_uppercase());
	let mut code = format!("{subject}{}", &number[..digits]);
	code.extend(suffix);
	Some(code)
}

pub fn course_url(course_code: &str, semester: Semester) -> String {
	format!(
		"{SELF_SERVICE_SEARCH}?&eventId={course_code}&period={}",
		semester.period_param()
	)
}

/// Self-service general education ids for each AUC code.
fn auc_general_ed_ids(code: &str) -> &'static [u32] {
	match code {
		"GE/GR" => &[23, 24],
		"IL" => &[50],
		"SC" => &[36],
		"CE" => &[1],
		"CL" => &[5],
		"SS" => &[44],
		"NPL" => &[27],
		"W" => &[66],
		"QRM" => &[34],
		"CABR" => &[217],
		_ => &[],
	}
}

/// Search URLs for an AUC code; `GE/GR` has two, unknown codes none.
pub fn auc_urls(auc_code: &str, semester: Semester) -> Vec<String> {
	auc_general_ed_ids(auc_code)
		.iter()
		.map(|id| {
			format!(
				"{SELF_SERVICE_SEARCH}?&period={}&generalEd={id}",
				semester.period_param()
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn semester_boundaries() {
		let fall = |year| Semester {
			term: Term::Fall,
			year,
		};
		let spring = |year| Semester {
			term: Term::Spring,
			year,
		};
		assert_eq!(next_semester(2025, 1, 1), spring(2025));
		assert_eq!(next_semester(2025, 3, 6), spring(2025));
		assert_eq!(next_semester(2025, 3, 7), fall(2025));
		assert_eq!(next_semester(2025, 10, 15), fall(2025));
		assert_eq!(next_semester(2025, 10, 16), spring(2026));
		assert_eq!(next_semester(2025, 12, 31), spring(2026));
	}

	#[test]
	fn course_codes() {
		assert_eq!(extract_course_code("MA 201 Calculus I").as_deref(), Some("MA201"));
		assert_eq!(extract_course_code("CS 101L Lab").as_deref(), Some("CS101L"));
		assert_eq!(extract_course_code("Two Mathematics electives"), None);
		assert_eq!(extract_course_code("MA"), None);
		assert_eq!(extract_course_code("  MA 201 Calculus I"), None);
		assert_eq!(extract_course_code("MA  201").as_deref(), Some("MA201"));
	}

	#[test]
	fn urls_carry_period() {
		let semester = next_semester(2025, 5, 1);
		assert_eq!(
			course_url("MA201", semester),
			"https://selfservice.arcadia.edu/SelfService/Search/Section?&eventId=MA201&period=2025%2FFALL"
		);
		let urls = auc_urls("GE/GR", semester);
		assert_eq!(urls.len(), 2);
		assert!(urls[1].ends_with("&generalEd=24"));
		assert!(auc_urls("XX", semester).is_empty());
	}
}
