use ahash::AHashMap;
use serde::Serialize;

use crate::{
    classify::classify, convert::throughput, errors::BenchFmtError, extract::extract_measurements,
};

pub const THROUGHPUT_UNIT: &str = "M ops/sec";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartRecord {
    pub name: String,
    pub unit: String,
    pub value: f64,
    pub range: String,
    pub extra: String,
}

pub fn convert_report(content: &str) -> Vec<ChartRecord> {
    extract_measurements(content)
        .filter_map(|measurement| {
            let classified = classify(&measurement.name)?;
            let converted = throughput(
                measurement.time_ns,
                measurement.variance_ns,
                classified.operation_count,
            );
            Some(ChartRecord {
                name: classified.chart_name(),
                unit: THROUGHPUT_UNIT.to_string(),
                value: converted.value,
                range: format!("± {}", converted.range),
                extra: format!(
                    "{} operations in {:.2} ns/iter",
                    classified.operation_count, measurement.time_ns
                ),
            })
        })
        .collect()
}

pub fn render_document(records: &[ChartRecord]) -> Result<String, BenchFmtError> {
    serde_json::to_string_pretty(records).map_err(|err| BenchFmtError::serialize(err.to_string()))
}

pub fn category_totals(records: &[ChartRecord]) -> AHashMap<String, usize> {
    let mut totals = AHashMap::new();
    for record in records {
        let label = record
            .name
            .split(" (")
            .next()
            .unwrap_or(record.name.as_str());
        *totals.entry(label.to_string()).or_insert(0) += 1;
    }
    totals
}
