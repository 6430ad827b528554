//! Catch clauses nested inside another catch's body are classified and
//! fixed independently of their enclosing clause.

use crate::common::{classify, engine};

const OUTER_GOOD_INNER_BAD: &str = r#"
class C {
    void M() {
        try { }
        catch (Exception outer) {
            logger.Error(outer, "outer handled");
            try { Retry(); }
            catch (Exception inner) { }
        }
    }
}
"#;

const OUTER_BAD_INNER_GOOD: &str = r#"
class C {
    void M() {
        try { }
        catch (Exception outer) {
            try { Retry(); }
            catch (Exception inner) { logger.Error(inner, "retry failed"); }
        }
    }
}
"#;

#[test]
fn test_inner_clause_flagged_independently() {
    let violations = classify(OUTER_GOOD_INNER_BAD);
    assert_eq!(violations.len(), 1);
    let text = &OUTER_GOOD_INNER_BAD[violations[0].span.start_byte..violations[0].span.end_byte];
    assert!(text.contains("catch (Exception inner)"));
    assert!(!text.contains("outer handled"));
}

#[test]
fn test_outer_clause_satisfied_by_inner_log_of_outer_variable() {
    // The scan covers the clause's whole subtree, so a nested log call
    // naming the outer variable would make the outer clause compliant.
    // Here the nested call names `inner`, not `outer` — only the exact
    // variable counts — yet the outer clause is still violating.
    let violations = classify(OUTER_BAD_INNER_GOOD);
    assert_eq!(violations.len(), 1);
    let text = &OUTER_BAD_INNER_GOOD[violations[0].span.start_byte..violations[0].span.end_byte];
    assert!(text.contains("catch (Exception outer)"));
}

#[test]
fn test_fixing_inner_leaves_outer_untouched() {
    let eng = engine();
    let violations = eng.classify_source(OUTER_GOOD_INNER_BAD).unwrap();
    assert_eq!(violations.len(), 1);

    let fixed = eng.fix(OUTER_GOOD_INNER_BAD, violations[0].span).unwrap();
    assert!(fixed
        .new_source
        .contains("logger.Error(inner, \"Error in method M of class C\");"));
    // Outer clause text unchanged
    assert!(fixed.new_source.contains("logger.Error(outer, \"outer handled\");"));
    assert!(eng.classify_source(&fixed.new_source).unwrap().is_empty());
}

#[test]
fn test_fixing_outer_logs_outer_variable() {
    let eng = engine();
    let violations = eng.classify_source(OUTER_BAD_INNER_GOOD).unwrap();
    let fixed = eng.fix(OUTER_BAD_INNER_GOOD, violations[0].span).unwrap();
    assert!(fixed
        .new_source
        .contains("logger.Error(outer, \"Error in method M of class C\");"));
    assert!(eng.classify_source(&fixed.new_source).unwrap().is_empty());
}
