//! Import partitioning for the generated file header.

use crate::descriptor::ImportSpec;

/// Split imports into (standard, external), keeping relative order in each.
///
/// Duplicates are passed through untouched: the header emits exactly what the
/// descriptor builder asked for.
pub fn partition(imports: &[ImportSpec]) -> (Vec<&ImportSpec>, Vec<&ImportSpec>) {
    imports.iter().partition(|spec| spec.standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(group: &[&ImportSpec]) -> Vec<String> {
        group.iter().map(|s| s.path.clone()).collect()
    }

    #[test]
    fn test_partition_preserves_order() {
        let imports = vec![
            ImportSpec::std("A"),
            ImportSpec::external("X"),
            ImportSpec::std("B"),
            ImportSpec::external("Y"),
        ];
        let (std_group, ext_group) = partition(&imports);
        assert_eq!(paths(&std_group), ["A", "B"]);
        assert_eq!(paths(&ext_group), ["X", "Y"]);
    }

    #[test]
    fn test_partition_keeps_duplicates() {
        let imports = vec![
            ImportSpec::external("X"),
            ImportSpec::external("X"),
            ImportSpec::std("A"),
        ];
        let (std_group, ext_group) = partition(&imports);
        assert_eq!(paths(&std_group), ["A"]);
        assert_eq!(paths(&ext_group), ["X", "X"]);
    }

    #[test]
    fn test_partition_empty() {
        let (std_group, ext_group) = partition(&[]);
        assert!(std_group.is_empty());
        assert!(ext_group.is_empty());
    }
}
