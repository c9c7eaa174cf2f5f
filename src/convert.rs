const NS_PER_SECOND: f64 = 1e9;
const OPS_PER_MILLION: f64 = 1_000_000.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Throughput {
    pub value: f64,
    pub range: f64,
}

pub fn throughput(time_ns: f64, variance_ns: f64, operation_count: u64) -> Throughput {
    let operations = operation_count as f64;
    let per_second = operations / (time_ns / NS_PER_SECOND);

    // A duration bound at or below zero cannot be divided through; that side
    // degrades to the central throughput.
    let time_low = (time_ns - variance_ns) / NS_PER_SECOND;
    let time_high = (time_ns + variance_ns) / NS_PER_SECOND;
    let per_second_high = if time_low > 0.0 {
        operations / time_low
    } else {
        per_second
    };
    let per_second_low = if time_high > 0.0 {
        operations / time_high
    } else {
        per_second
    };

    Throughput {
        value: round2(per_second / OPS_PER_MILLION),
        range: round2((per_second_high - per_second_low) / 2.0 / OPS_PER_MILLION),
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
