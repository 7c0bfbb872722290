//! Compile-fail tests for the CASE builder states and operand types.
//!
//! These tests verify that incomplete or misordered expressions are caught at
//! compile time.

#[test]
fn compile_fail_tests() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/compile_fail/*.rs");
}
