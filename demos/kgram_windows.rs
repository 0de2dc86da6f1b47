use std::collections::HashMap;

use rollhash_rs::{Result, RollingHashBuilder};

/// Report k-grams shared by two inputs, matched by hash.
fn main() -> Result<()> {
    let left = "for (int i = 0; i < n; i++) { sum += a[i]; }";
    let right = "for (int j = 0; j < n; j++) { sum += a[j]; }";
    let k = 8;

    let builder = RollingHashBuilder::new().k(k).modulus(1_000_003);

    let mut seen: HashMap<u64, usize> = HashMap::new();
    for (pos, hash) in builder.windows(left.bytes())? {
        seen.entry(hash).or_insert(pos);
    }

    for (pos, hash) in builder.windows(right.bytes())? {
        if let Some(&other) = seen.get(&hash) {
            println!(
                "{:?} at {} matches {:?} at {}",
                &right[pos..pos + k],
                pos,
                &left[other..other + k],
                other
            );
        }
    }

    Ok(())
}
