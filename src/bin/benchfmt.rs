use std::{env, fs, process};

use benchfmt::{
    BenchFmtError,
    cli::ConverterConfig,
    report::{category_totals, convert_report, render_document},
};

fn main() {
    let args: Vec<String> = env::args().collect();
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let config = match ConverterConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            eprint!("{}", ConverterConfig::help());
            process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("conversion failed: {err}");
        process::exit(1);
    }
}

fn run(config: &ConverterConfig) -> Result<(), BenchFmtError> {
    let content = fs::read_to_string(&config.input)
        .map_err(|err| BenchFmtError::read(format!("{}: {err}", config.input.display())))?;

    let records = convert_report(&content);
    let document = render_document(&records)?;
    fs::write(&config.output, &document)
        .map_err(|err| BenchFmtError::write(format!("{}: {err}", config.output.display())))?;

    println!(
        "Converted {} benchmarks to {}",
        records.len(),
        config.output.display()
    );
    let mut totals: Vec<(String, usize)> = category_totals(&records).into_iter().collect();
    totals.sort();
    for (label, count) in &totals {
        println!("  {label}: {count}");
    }
    println!("Results: {document}");
    Ok(())
}
