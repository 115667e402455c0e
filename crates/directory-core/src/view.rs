//! View Model
//!
//! Derives the displayed rows from the store: search filter, then sort.
//! Nothing is cached; every call recomputes from the records it is given.

use std::cmp::Ordering;

use crate::domain::{Employee, SortDirection, SortField, SortSpec};

/// Transient list settings, not persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort: SortSpec,
}

/// Records whose name, role or email contains `term`, ignoring case.
/// Phone numbers are not searched. An empty term matches everything.
pub fn filter<'a>(records: &'a [Employee], term: &str) -> impl Iterator<Item = &'a Employee> + 'a {
    let needle = term.to_lowercase();
    records.iter().filter(move |e| matches(e, &needle))
}

fn matches(employee: &Employee, needle: &str) -> bool {
    [&employee.name, &employee.role, &employee.email]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
}

/// Stable sort on the lowercased field value.
///
/// Descending reverses the comparison rather than the output, so records
/// with equal keys keep their input order either way.
pub fn sort<'a>(records: impl IntoIterator<Item = &'a Employee>, spec: SortSpec) -> Vec<&'a Employee> {
    let mut keyed: Vec<(String, &Employee)> = records
        .into_iter()
        .map(|e| (spec.field.value(e).to_lowercase(), e))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, spec.direction));
    keyed.into_iter().map(|(_, e)| e).collect()
}

fn compare(a: &str, b: &str, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => a.cmp(b),
        SortDirection::Desc => b.cmp(a),
    }
}

/// Filtered and sorted rows, ready for display
pub fn project(records: &[Employee], view: &ViewState) -> Vec<Employee> {
    sort(filter(records, &view.search_term), view.sort)
        .into_iter()
        .cloned()
        .collect()
}

/// Result count line shown above the table
pub fn summary(count: usize, term: &str) -> String {
    let noun = if count == 1 { "employee" } else { "employees" };
    if term.is_empty() {
        format!("{} {} found", count, noun)
    } else {
        format!("{} {} found matching \"{}\"", count, noun, term)
    }
}

/// Sort indicator for a column header
pub fn sort_indicator(spec: SortSpec, field: SortField) -> &'static str {
    if spec.field != field {
        return "";
    }
    match spec.direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{EmployeeDraft, EmployeeId};
    use crate::repository::seed_employees;

    fn employee(id: u64, name: &str, role: &str, email: &str, phone: &str) -> Employee {
        Employee::from_draft(EmployeeId(id), EmployeeDraft::new(name, role, email, phone))
    }

    fn ids<'a>(rows: impl IntoIterator<Item = &'a Employee>) -> Vec<u64> {
        rows.into_iter().map(|e| e.id.0).collect()
    }

    #[test]
    fn test_filter_empty_term_returns_all_in_order() {
        let records = seed_employees();
        assert_eq!(ids(filter(&records, "")), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let records = seed_employees();
        let hits: Vec<&Employee> = filter(&records, "KIM").collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "David Kim");
    }

    #[test]
    fn test_filter_matches_role_and_email() {
        let records = seed_employees();
        assert_eq!(ids(filter(&records, "manager")), vec![2, 5]);
        assert_eq!(ids(filter(&records, "emily.rod")), vec![3]);
    }

    #[test]
    fn test_filter_ignores_phone() {
        let records = seed_employees();
        assert_eq!(filter(&records, "555").count(), 0);
    }

    #[test]
    fn test_filter_only_returns_matches() {
        let records = seed_employees();
        for term in ["an", "ENG", "company", "zzz", "e"] {
            let needle = term.to_lowercase();
            for e in filter(&records, term) {
                assert!(
                    e.name.to_lowercase().contains(&needle)
                        || e.role.to_lowercase().contains(&needle)
                        || e.email.to_lowercase().contains(&needle)
                );
            }
        }
    }

    #[test]
    fn test_sort_is_permutation_in_order() {
        let records = seed_employees();
        for field in SortField::ALL {
            for direction in [SortDirection::Asc, SortDirection::Desc] {
                let sorted = sort(&records, SortSpec::new(field, direction));
                let mut got = ids(sorted.iter().copied());
                got.sort();
                assert_eq!(got, vec![1, 2, 3, 4, 5, 6]);

                for pair in sorted.windows(2) {
                    let a = field.value(pair[0]).to_lowercase();
                    let b = field.value(pair[1]).to_lowercase();
                    match direction {
                        SortDirection::Asc => assert!(a <= b),
                        SortDirection::Desc => assert!(a >= b),
                    }
                }
            }
        }
    }

    #[test]
    fn test_sort_ignores_case() {
        let records = vec![
            employee(1, "bob", "", "", ""),
            employee(2, "Alice", "", "", ""),
            employee(3, "carol", "", "", ""),
        ];
        let sorted = sort(&records, SortSpec::default());
        assert_eq!(ids(sorted), vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_keeps_ties_in_input_order() {
        let records = vec![
            employee(1, "Ann", "QA", "", ""),
            employee(2, "Bo", "qa", "", ""),
            employee(3, "Cy", "Dev", "", ""),
            employee(4, "Di", "QA", "", ""),
        ];
        let asc = sort(&records, SortSpec::new(SortField::Role, SortDirection::Asc));
        assert_eq!(ids(asc), vec![3, 1, 2, 4]);
        let desc = sort(&records, SortSpec::new(SortField::Role, SortDirection::Desc));
        assert_eq!(ids(desc), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_project_filters_then_sorts() {
        let records = seed_employees();
        let view = ViewState {
            search_term: "engineer".to_string(),
            sort: SortSpec::new(SortField::Name, SortDirection::Desc),
        };
        let rows = project(&records, &view);
        let names: Vec<&str> = rows.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Sarah Johnson", "David Kim"]);
    }

    #[test]
    fn test_summary() {
        assert_eq!(summary(1, ""), "1 employee found");
        assert_eq!(summary(0, ""), "0 employees found");
        assert_eq!(summary(2, "eng"), "2 employees found matching \"eng\"");
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::new(SortField::Role, SortDirection::Desc);
        assert_eq!(sort_indicator(spec, SortField::Role), "▼");
        assert_eq!(sort_indicator(spec, SortField::Name), "");
    }
}
