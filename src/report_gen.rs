use rand::{Rng, SeedableRng, rngs::StdRng};

#[derive(Clone, Debug)]
pub enum ReportShape {
    InsertOnly,
    InsertSearch,
    FullCycle,
    Mixed,
}

#[derive(Clone, Debug)]
pub struct ReportCase {
    pub name: String,
    pub time_ns: f64,
    pub variance_ns: f64,
}

pub fn generate_report(shape: ReportShape, count: usize, seed: u64) -> String {
    render_report(&generate_cases(shape, count, seed))
}

pub fn generate_cases(shape: ReportShape, count: usize, seed: u64) -> Vec<ReportCase> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|index| {
            let elements = 10u64.pow((index % 4) as u32 + 1);
            let time_ns = rng.gen_range(50.0..5_000_000.0);
            let variance_ns = time_ns * rng.gen_range(0.01..0.5);
            ReportCase {
                name: format!("{}_{}", case_prefix(&shape, index), elements),
                time_ns,
                variance_ns,
            }
        })
        .collect()
}

fn case_prefix(shape: &ReportShape, index: usize) -> &'static str {
    match shape {
        ReportShape::InsertOnly => "sbt_insert",
        ReportShape::InsertSearch => "sbt_insert_search",
        ReportShape::FullCycle => "sbt_full_cycle",
        ReportShape::Mixed => match index % 3 {
            0 => "sbt_insert",
            1 => "sbt_insert_search",
            _ => "sbt_full_cycle",
        },
    }
}

// Renders the libtest harness framing around the bench lines so generated
// reports carry the same non-benchmark noise a real run does.
pub fn render_report(cases: &[ReportCase]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\nrunning {} tests\n", cases.len()));
    for case in cases {
        out.push_str(&format!(
            "test {} ... bench: {} ns/iter (+/- {})\n",
            case.name,
            group_thousands(case.time_ns),
            group_thousands(case.variance_ns)
        ));
    }
    out.push_str(&format!(
        "\ntest result: ok. 0 passed; 0 failed; 0 ignored; {} measured; 0 filtered out\n",
        cases.len()
    ));
    out
}

pub fn group_thousands(value: f64) -> String {
    let text = format!("{value:.2}");
    let Some((integer, fraction)) = text.split_once('.') else {
        return text;
    };
    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::new();
    for (position, digit) in digits.iter().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }
    format!("{grouped}.{fraction}")
}
