#![no_main]
use libfuzzer_sys::fuzz_target;

use statsketch::hll::Hll;

fuzz_target!(|data: &[u8]| {
    let (precision, keys) = match data.split_first() {
        Some((p, rest)) => (*p, rest),
        None => return,
    };
    let mut hll = match Hll::new(precision) {
        Ok(hll) => hll,
        Err(_) => return,
    };
    for key in keys.chunks(3) {
        hll.add(key);
    }
    let size = hll.size();
    assert!(size.is_finite());
});
