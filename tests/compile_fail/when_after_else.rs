//! Test that no WHEN branch can follow the ELSE clause.

use sqlweave::prelude::*;

fn main() {
    let x = column::<Integer>("x");

    // ERROR: `when` is only available on an open CASE
    let _ = case().when(eq(x, 1), "one").r#else("other").when(eq(x, 2), "two");
}
