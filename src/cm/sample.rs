/// Index of a sample slot in the `SampleList` arena.
pub type SampleId = usize;

#[derive(Debug, Clone)]
pub struct Sample {
    pub value: f64,
    /// Number of observed values this sample stands in for.
    pub width: u64,
    /// Upper bound on rank uncertainty relative to the previous sample.
    pub delta: u64,
    pub prev: Option<SampleId>,
    pub next: Option<SampleId>,
}

impl Sample {
    pub fn new(value: f64, width: u64, delta: u64) -> Sample {
        Sample {
            value,
            width,
            delta,
            prev: None,
            next: None,
        }
    }
}
