use rollhash_rs::{Result, RollingHash};

fn main() -> Result<()> {
    let text = "the quick brown fox jumps over the lazy dog";
    let k = 5;

    println!("# RollingHash low-level API");
    let mut hasher = RollingHash::new(k)?;
    println!(
        "k = {}, base = {}, modulus = {}, max_base = {}",
        hasher.k(),
        hasher.base(),
        hasher.modulus(),
        hasher.max_base()
    );

    for (i, b) in text.bytes().enumerate() {
        let hash = hasher.next_hash(b.into());
        if hasher.is_full() {
            let start = i + 1 - k;
            println!("{:>3} {:?} {:#010x}", start, &text[start..=i], hash);
        } else {
            println!("{:>3} (warm-up)  {:#010x}", i, hash);
        }
    }

    Ok(())
}
