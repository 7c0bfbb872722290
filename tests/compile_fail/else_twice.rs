//! Test that the ELSE clause can only be set once.

use sqlweave::prelude::*;

fn main() {
    let flag = column::<Boolean>("flag");

    // ERROR: `r#else` is only available on an open CASE
    let _ = case().when(flag, 1).r#else(0).r#else(2);
}
