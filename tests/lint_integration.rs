//! Integration tests for the --lint feature

use tplexpand::{expand_with_config, expand_with_lint, ExpandConfig, LintCategory};

#[test]
fn test_true_positives_all_categories() {
    let source = include_str!("fixtures/lint-positives.tpl");
    let config = ExpandConfig::new().with_lint(true);
    let (out, warnings) = expand_with_lint(source, config);

    // Output is still produced for the clean lines
    assert!(out.starts_with("- (void)testTypos {\n"));

    let categories: Vec<LintCategory> = warnings.iter().map(|w| w.category).collect();
    assert_eq!(
        categories,
        vec![
            LintCategory::UnknownTag,
            LintCategory::EmptySelection,
            LintCategory::UnresolvedPlaceholder,
        ]
    );

    let lines: Vec<usize> = warnings.iter().map(|w| w.line).collect();
    assert_eq!(lines, vec![2, 3, 4]);
}

#[test]
fn test_true_negatives_clean() {
    let source = include_str!("fixtures/lint-negatives.tpl");
    let config = ExpandConfig::new().with_lint(true);
    let (_, warnings) = expand_with_lint(source, config);

    assert!(
        warnings.is_empty(),
        "Expected no warnings for true-negatives, got: {:?}",
        warnings
            .iter()
            .map(|w| format!("{}: {}", w.category, w.message))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_lint_disabled_no_warnings() {
    let source = include_str!("fixtures/lint-positives.tpl");
    let (_, warnings) = expand_with_lint(source, ExpandConfig::new());
    assert!(warnings.is_empty(), "Lint disabled should produce no warnings");
}

#[test]
fn test_lint_does_not_change_output() {
    let source = include_str!("fixtures/lint-positives.tpl");
    let (linted, _) = expand_with_lint(source, ExpandConfig::new().with_lint(true));
    assert_eq!(linted, expand_with_config(source, ExpandConfig::new()));
}

#[test]
fn test_lint_warning_format() {
    let source = include_str!("fixtures/lint-positives.tpl");
    let (_, warnings) = expand_with_lint(source, ExpandConfig::new().with_lint(true));

    for w in &warnings {
        let cat = w.category.to_string();
        assert!(
            ["unknown-tag", "empty-selection", "unresolved-placeholder"].contains(&cat.as_str()),
            "Unexpected category: {}",
            cat
        );
        assert!(!w.message.is_empty(), "Warning message should not be empty");
        assert!(w.format(source, "lint-positives.tpl").contains(&cat));
    }
}
