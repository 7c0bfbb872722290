//! Test that comparing an INTEGER column with a TEXT literal fails to compile.

use sqlweave::prelude::*;

fn main() {
    let id = column::<Integer>("id");

    // ERROR: Integer is not Compatible<Text>
    let _ = case().when(eq(id, "one"), 1);
}
