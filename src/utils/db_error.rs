//! Classification of database errors.

/// Returns true if `e` is a unique-constraint violation (SQLSTATE 23505).
///
/// When `constraint` is given, the violation must also name that constraint.
pub fn is_unique_violation(e: &sqlx::Error, constraint: Option<&str>) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    match constraint {
        Some(name) => db_err.constraint() == Some(name),
        None => true,
    }
}
