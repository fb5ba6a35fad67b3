use syn::{Generics, Ident, WhereClause, WherePredicate};

/// The item's where clause extended with `bounds`, or `None` when both are empty.
pub fn bounded_where_clause(generics: &Generics, bounds: &[WherePredicate]) -> Option<WhereClause> {
    let mut generics = generics.clone();
    if !bounds.is_empty() {
        generics
            .make_where_clause()
            .predicates
            .extend(bounds.iter().cloned());
    }
    generics.where_clause
}

/// Field name as written by the user, without a raw-identifier prefix.
pub fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
