//! Test that a CASE without any WHEN branch cannot be serialized.

use sqlweave::prelude::*;

fn main() {
    let mut ctx = SqlContext::default();

    // ERROR: CaseInit is not a complete node
    let _ = serialize(&case(), &mut ctx);
}
