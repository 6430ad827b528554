//! Fixing a violating clause and re-classifying always yields a clean
//! result, for every binding shape.

use crate::common::{classify, engine, fix_first};

fn assert_fix_converges(source: &str) {
    let fixed = fix_first(source);
    assert!(
        classify(&fixed.new_source).is_empty(),
        "fix did not converge for:\n{}\nrewritten:\n{}",
        source,
        fixed.new_source
    );
}

#[test]
fn test_named_catch_converges() {
    assert_fix_converges(
        "class C { void M() { try { } catch (Exception ex) { } } }",
    );
}

#[test]
fn test_bare_catch_converges() {
    assert_fix_converges("class C { void M() { try { } catch { } } }");
}

#[test]
fn test_typed_unnamed_catch_converges() {
    assert_fix_converges(
        "class C { void M() { try { } catch (System.Exception) { } } }",
    );
}

#[test]
fn test_catch_with_body_statements_converges() {
    assert_fix_converges(
        "class C { void M() { try { } catch (Exception ex) { Rollback(); throw; } } }",
    );
}

#[test]
fn test_fixing_all_violations_one_at_a_time_converges() {
    // The core fixes exactly one violation per invocation; repeating
    // the host's report-then-fix loop drains them all.
    let mut source = r#"
class C {
    void M() {
        try { } catch { }
        try { } catch (System.Exception) { }
        try { } catch (Exception ex) { }
    }
}
"#
    .to_string();

    let eng = engine();
    let mut rounds = 0;
    loop {
        let violations = eng.classify_source(&source).unwrap();
        if violations.is_empty() {
            break;
        }
        source = eng.fix(&source, violations[0].span).unwrap().new_source;
        rounds += 1;
        assert!(rounds <= 3, "fix loop failed to converge");
    }
    assert_eq!(rounds, 3);
}
