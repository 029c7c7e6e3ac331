use super::*;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_default_rule_labels_chembl_as_active() {
    let rule = LabelRule::default();
    let labels = label_rows(&ids(&["CHEMBL1", "CHEMBL2", "C001", "ZINC9"]), &rule);
    assert_eq!(
        labels,
        vec![Label::Active, Label::Active, Label::Inactive, Label::Inactive]
    );
    assert_eq!(
        labels.iter().map(|l| l.as_u8()).collect::<Vec<_>>(),
        vec![1, 1, 0, 0]
    );
}

#[test]
fn test_groups_are_disjoint_and_skip_unmatched() {
    let rule = LabelRule::default();
    let names = ids(&["CHEMBL1", "C001", "ZINC9", "", "chembl5", "CHEM"]);
    let groups = assign_groups(&names, &rule);
    assert_eq!(
        groups,
        vec![
            Group::Active,
            Group::Inactive,
            Group::Unassigned,
            Group::Unassigned,
            Group::Unassigned,
            Group::Inactive,
        ]
    );

    let labels = label_rows(&names, &rule);
    for (label, group) in labels.iter().zip(groups.iter()) {
        assert_eq!(label.is_active(), *group == Group::Active);
    }
}

#[test]
fn test_labeling_is_deterministic() {
    let rule = LabelRule::default();
    let names = ids(&["CHEMBL77", " C12 ", "X"]);
    assert_eq!(label_rows(&names, &rule), label_rows(&names, &rule));
    assert_eq!(rule.group("C12 "), Group::Inactive);
}

#[test]
fn test_leading_whitespace_is_not_stripped() {
    let rule = LabelRule::default();
    assert_eq!(rule.label(" CHEMBL1"), Label::Inactive);
    assert_eq!(rule.group(" CHEMBL1"), Group::Unassigned);
    assert_eq!(rule.group(" C12"), Group::Unassigned);
    assert_eq!(rule.label("CHEMBL1 "), Label::Active);
}

#[test]
fn test_custom_predicates() {
    let rule = LabelRule {
        active: NamePredicate::StartsWithAny(vec!["ACT".to_string(), "LIG".to_string()]),
        inactive: NamePredicate::Any,
    };
    assert_eq!(rule.group("LIG_01"), Group::Active);
    assert_eq!(rule.group("DECOY_01"), Group::Inactive);
    assert_eq!(rule.group("   "), Group::Unassigned);
    assert_eq!(rule.label("   "), Label::Inactive);
}

#[test]
fn test_from_prefixes() {
    assert_eq!(NamePredicate::from_prefixes(&[]), None);
    assert_eq!(
        NamePredicate::from_prefixes(&ids(&["A"])),
        Some(NamePredicate::StartsWith("A".to_string()))
    );
    assert_eq!(
        NamePredicate::from_prefixes(&ids(&["A", "B"])),
        Some(NamePredicate::StartsWithAny(ids(&["A", "B"])))
    );
}

#[test]
fn test_predicate_json_shape() {
    let rule: LabelRule = serde_json::from_str(
        r#"{"active":{"kind":"starts_with","value":"CHEMBL"},"inactive":{"kind":"any"}}"#,
    )
    .unwrap();
    assert_eq!(rule.active, NamePredicate::StartsWith("CHEMBL".to_string()));
    assert_eq!(rule.inactive, NamePredicate::Any);
}
