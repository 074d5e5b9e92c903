//! Filter predicate assembly for the find operation.

use domain::models::ClientFilter;

/// A parameterized WHERE clause plus its bind values, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPredicate {
    pub clause: String,
    pub params: Vec<String>,
}

/// Builds the conjunctive predicate for a filter set.
///
/// Field order is fixed (first_name, last_name, email, phone_number) so the
/// emitted clause and placeholder numbering are reproducible. Values are
/// never interpolated into the clause text; they come back as bind
/// parameters in placeholder order. Returns `None` for an empty filter.
pub fn build_filter(filter: &ClientFilter) -> Option<FilterPredicate> {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    if let Some(first_name) = &filter.first_name {
        params.push(first_name.clone());
        conditions.push(format!("c.first_name = ${}", params.len()));
    }
    if let Some(last_name) = &filter.last_name {
        params.push(last_name.clone());
        conditions.push(format!("c.last_name = ${}", params.len()));
    }
    if let Some(email) = &filter.email {
        params.push(email.clone());
        conditions.push(format!("c.email = ${}", params.len()));
    }
    if let Some(phone_number) = &filter.phone_number {
        params.push(phone_number.clone());
        conditions.push(format!("p.phone_number = ${}", params.len()));
    }

    if conditions.is_empty() {
        return None;
    }

    Some(FilterPredicate {
        clause: conditions.join(" AND "),
        params,
    })
}
