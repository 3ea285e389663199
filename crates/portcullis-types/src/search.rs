//! Free-text search shared by all resource kinds.
//!
//! A resource matches a list of search terms when every term is found,
//! case-insensitively, as a substring of at least one of its field values.

use crate::resource::Searchable;

/// Case-insensitive substring test.
pub fn contains_fold(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(&term.to_lowercase())
}

/// Returns true if every search value matches some field value.
///
/// A search value that matches no field can still be accepted by
/// `custom_match`. An empty `search_vals` always matches.
pub fn match_search(
    field_vals: &[String],
    search_vals: &[String],
    custom_match: Option<&dyn Fn(&str) -> bool>,
) -> bool {
    search_vals.iter().all(|term| {
        field_vals.iter().any(|field| contains_fold(field, term))
            || custom_match.is_some_and(|matcher| matcher(term))
    })
}

/// Resources that match every term, in input order.
pub fn filter_by_search<'a, R: Searchable>(resources: &'a [R], terms: &[String]) -> Vec<&'a R> {
    resources
        .iter()
        .filter(|resource| resource.match_search(terms))
        .collect()
}
