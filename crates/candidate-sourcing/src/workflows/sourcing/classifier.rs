use super::domain::{EducationRecord, VisaStatus};

const US_COUNTRY_MARKERS: [&str; 2] = ["united states", "usa"];

/// Graduates at least this many years out are presumed citizens or permanent residents.
pub const SETTLED_YEARS: i32 = 10;
/// Graduates at most this many years out are presumed on post-study work authorization.
pub const RECENT_GRADUATE_YEARS: i32 = 3;

/// Earliest evaluation year accepted from callers.
pub const MIN_AS_OF_YEAR: i32 = 1900;
/// Latest evaluation year accepted from callers.
pub const MAX_AS_OF_YEAR: i32 = 2200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("as_of_year {0} is outside {min}..={max}", min = MIN_AS_OF_YEAR, max = MAX_AS_OF_YEAR)]
pub struct UnsupportedYear(pub i32);

/// Accept a caller-supplied evaluation year.
pub fn check_as_of_year(year: i32) -> Result<i32, UnsupportedYear> {
    if (MIN_AS_OF_YEAR..=MAX_AS_OF_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(UnsupportedYear(year))
    }
}

pub fn is_us_country(country: &str) -> bool {
    let country = country.to_lowercase();
    US_COUNTRY_MARKERS
        .iter()
        .any(|marker| country.contains(marker))
}

/// Infer a work-authorization bucket from education history as of `as_of_year`.
///
/// Only the last US record in reporting order decides the outcome. Histories without a US
/// record, and US records whose end year could not be read, fall into
/// [`VisaStatus::ForeignH1b`].
pub fn infer(education: &[EducationRecord], as_of_year: i32) -> VisaStatus {
    let Some(latest_us) = education
        .iter()
        .rev()
        .find(|record| is_us_country(&record.country))
    else {
        return VisaStatus::ForeignH1b;
    };

    let Some(grad_year) = latest_us.end_year else {
        return VisaStatus::ForeignH1b;
    };

    let years_since_grad = as_of_year.saturating_sub(grad_year);
    if years_since_grad >= SETTLED_YEARS {
        VisaStatus::CitizenOrGc
    } else if years_since_grad <= RECENT_GRADUATE_YEARS {
        VisaStatus::OptStem
    } else {
        VisaStatus::H1b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AS_OF: i32 = 2024;

    fn us(year: i32) -> EducationRecord {
        EducationRecord::new("United States", Some(year))
    }

    #[test]
    fn no_us_record_is_foreign() {
        let history = vec![
            EducationRecord::new("India", Some(2010)),
            EducationRecord::new("Germany", Some(2001)),
        ];
        assert_eq!(infer(&history, AS_OF), VisaStatus::ForeignH1b);
    }

    #[test]
    fn empty_history_is_foreign() {
        assert_eq!(infer(&[], AS_OF), VisaStatus::ForeignH1b);
    }

    #[test]
    fn citizen_boundary_is_inclusive() {
        assert_eq!(infer(&[us(AS_OF - 10)], AS_OF), VisaStatus::CitizenOrGc);
        assert_eq!(infer(&[us(AS_OF - 9)], AS_OF), VisaStatus::H1b);
    }

    #[test]
    fn recent_graduate_boundary_is_inclusive() {
        assert_eq!(infer(&[us(AS_OF - 3)], AS_OF), VisaStatus::OptStem);
        assert_eq!(infer(&[us(AS_OF - 4)], AS_OF), VisaStatus::H1b);
    }

    #[test]
    fn future_graduation_counts_as_recent() {
        assert_eq!(infer(&[us(AS_OF + 1)], AS_OF), VisaStatus::OptStem);
    }

    #[test]
    fn last_us_record_decides() {
        let history = vec![us(2005), EducationRecord::new("Canada", Some(2008)), us(2022)];
        assert_eq!(infer(&history, AS_OF), VisaStatus::OptStem);
    }

    #[test]
    fn us_match_is_case_insensitive_substring() {
        assert!(is_us_country("UNITED STATES"));
        assert!(is_us_country("united states of america"));
        assert!(is_us_country("USA"));
        assert!(!is_us_country("US"));
        assert!(!is_us_country("United Kingdom"));
    }

    #[test]
    fn unreadable_year_on_deciding_record_is_foreign() {
        let history = vec![us(2000), EducationRecord::from_reported("usa", Some("n/a"))];
        assert_eq!(infer(&history, AS_OF), VisaStatus::ForeignH1b);
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert_eq!(infer(&[us(2020)], i32::MIN), VisaStatus::OptStem);
        assert_eq!(infer(&[us(i32::MIN)], i32::MAX), VisaStatus::CitizenOrGc);
    }

    #[test]
    fn as_of_year_range_is_inclusive() {
        assert_eq!(check_as_of_year(MIN_AS_OF_YEAR), Ok(MIN_AS_OF_YEAR));
        assert_eq!(check_as_of_year(MAX_AS_OF_YEAR), Ok(MAX_AS_OF_YEAR));
        assert_eq!(check_as_of_year(i32::MIN), Err(UnsupportedYear(i32::MIN)));
        assert!(check_as_of_year(24000)
            .expect_err("far future rejected")
            .to_string()
            .contains("1900..=2200"));
    }

    #[test]
    fn mixed_history_example() {
        let history = vec![
            EducationRecord::from_reported("China", Some("2018")),
            EducationRecord::from_reported("United States", Some("2020")),
        ];
        assert_eq!(infer(&history, AS_OF), VisaStatus::H1b);
    }

    #[test]
    fn settled_graduate_example() {
        let history = vec![EducationRecord::from_reported("United States", Some("2012"))];
        assert_eq!(infer(&history, AS_OF), VisaStatus::CitizenOrGc);
    }
}
