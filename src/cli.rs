use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConverterConfig {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConverterConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        match args {
            [_, input, output] => Ok(Self {
                input: PathBuf::from(*input),
                output: PathBuf::from(*output),
            }),
            _ => Err(format!(
                "expected an input file and an output file, got {} arguments",
                args.len().saturating_sub(1)
            )),
        }
    }

    pub fn help() -> &'static str {
        "Usage: benchfmt <input_file> <output_file>\n"
    }
}
