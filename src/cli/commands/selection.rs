//! Narrowing the package table with `--only` / `--skip`.

use crate::error::{DepsureError, Result};
use crate::installer::PackageTable;

/// Apply `--only` and `--skip` to a table, preserving list order.
///
/// Names that are not in the table are rejected so a typo cannot turn a
/// run into a silent no-op.
pub fn select(mut table: PackageTable, only: &[String], skip: &[String]) -> Result<PackageTable> {
    for name in only.iter().chain(skip) {
        if !table.contains(name) {
            return Err(DepsureError::UnknownPackage { name: name.clone() });
        }
    }

    if !only.is_empty() {
        table.retain(|r| only.contains(&r.name));
    }
    table.retain(|r| !skip.contains(&r.name));

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(table: &PackageTable) -> Vec<&str> {
        table.requests.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn no_filters_keeps_everything() {
        let table = PackageTable::from_names(["a", "b", "c"]);
        let selected = select(table, &[], &[]).unwrap();
        assert_eq!(names(&selected), vec!["a", "b", "c"]);
    }

    #[test]
    fn only_keeps_table_order() {
        let table = PackageTable::from_names(["a", "b", "c"]);
        let selected = select(table, &["c".into(), "a".into()], &[]).unwrap();
        assert_eq!(names(&selected), vec!["a", "c"]);
    }

    #[test]
    fn skip_removes_every_duplicate() {
        let table = PackageTable::from_names(["django", "b", "django"]);
        let selected = select(table, &[], &["django".into()]).unwrap();
        assert_eq!(names(&selected), vec!["b"]);
    }

    #[test]
    fn unknown_name_is_error() {
        let table = PackageTable::from_names(["a"]);
        let err = select(table, &["z".into()], &[]).unwrap_err();
        assert!(matches!(err, DepsureError::UnknownPackage { ref name } if name == "z"));
    }
}
