use std::sync::OnceLock;

use regex::Regex;

// One libtest result line, e.g.
// test sbt_insert_100 ... bench:       2,715.35 ns/iter (+/- 958.21)
const BENCH_LINE: &str = r"test\s+(\w+)\s+\.\.\.\s+bench:\s+([\d,]+(?:\.\d+)?)\s+ns/iter\s+\(\+/-\s+([\d,]+(?:\.\d+)?)\)";

#[derive(Clone, Debug, PartialEq)]
pub struct RawMeasurement {
    pub name: String,
    pub time_ns: f64,
    pub variance_ns: f64,
}

fn bench_line_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(BENCH_LINE).expect("bench line pattern compiles"))
}

pub fn extract_measurements(report: &str) -> impl Iterator<Item = RawMeasurement> + '_ {
    bench_line_pattern().captures_iter(report).filter_map(|caps| {
        let name = caps.get(1)?.as_str().to_string();
        let time_ns = parse_numeric(caps.get(2)?.as_str())?;
        let variance_ns = parse_numeric(caps.get(3)?.as_str())?;
        Some(RawMeasurement {
            name,
            time_ns,
            variance_ns,
        })
    })
}

fn parse_numeric(token: &str) -> Option<f64> {
    token.replace(',', "").parse().ok()
}
