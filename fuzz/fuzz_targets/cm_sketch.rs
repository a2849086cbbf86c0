#![no_main]
use libfuzzer_sys::fuzz_target;

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt};
use statsketch::cm::CmSketch;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);

    // unbounded, invalid values must be rejected rather than panic
    let eps: f64 = if let Ok(res) = cursor.read_f64::<BigEndian>() {
        res
    } else {
        return;
    };
    let num_quantiles = if let Ok(res) = cursor.read_u8() {
        res % 8
    } else {
        return;
    };
    let mut quantiles = Vec::with_capacity(num_quantiles as usize);
    for _ in 0..num_quantiles {
        match cursor.read_f64::<BigEndian>() {
            Ok(q) => quantiles.push(q),
            Err(_) => return,
        }
    }

    let mut cm = match CmSketch::new(eps, &quantiles) {
        Ok(cm) => cm,
        Err(_) => return,
    };

    let mut added = 0;
    while let Ok(v) = cursor.read_f64::<BigEndian>() {
        cm.add_sample(v);
        added += 1;
    }
    cm.flush();

    assert_eq!(cm.count(), added);
    assert_eq!(cm.buffered(), 0);
    let total: u64 = cm.iter().map(|(_, width, _)| width).sum();
    assert_eq!(total, added);
    for q in quantiles {
        assert!(cm.query(q).is_some() || added == 0);
    }
});
