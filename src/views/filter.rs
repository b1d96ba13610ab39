use crate::models::Company;

/// Companies whose name or floor contains `text`, ignoring case.
/// An empty (or blank) search keeps every company, in stored order.
pub fn filter_companies<'a>(companies: &'a [Company], text: &str) -> Vec<&'a Company> {
    let needle = text.trim();
    companies.iter().filter(|c| c.matches(needle)).collect()
}
