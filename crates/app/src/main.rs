//! records-converter: CSV ⇄ binary ⇄ XML student record conversion.
//!
//! Three operation modes, selected by argument count and a trailing type
//! argument, matching the established command line:
//!
//! ```text
//! records-converter <csv> <bin> 1     CSV to binary
//! records-converter <xml> 2           binary to XML (source and sort key
//!                                     from setupParams.json)
//! records-converter <xml> <xsd> 3     XML structural check against XSD
//! records-converter help              usage
//! ```
//!
//! Success exits 0. Errors and a failed schema verdict exit 1.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use records_converter_core::{config, pipeline, Result};

/// Sort configuration file read by the binary→XML mode. Resolved here and
/// passed into the stage explicitly; the core holds no global state.
const SETUP_PARAMS_FILE: &str = "setupParams.json";

/// One parsed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    CsvToBinary { input: PathBuf, output: PathBuf },
    BinaryToXml { output: PathBuf },
    Validate { xml: PathBuf, xsd: PathBuf },
    Help,
    Invalid,
}

/// Map raw arguments (without the program name) to a mode.
fn parse_mode(args: &[String]) -> Mode {
    match args {
        [] => Mode::Help,
        [word] if word.as_str() == "help" => Mode::Help,
        [input, output, mode] if mode.as_str() == "1" => Mode::CsvToBinary {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
        },
        [output, mode] if mode.as_str() == "2" => Mode::BinaryToXml {
            output: PathBuf::from(output),
        },
        [xml, xsd, mode] if mode.as_str() == "3" => Mode::Validate {
            xml: PathBuf::from(xml),
            xsd: PathBuf::from(xsd),
        },
        _ => Mode::Invalid,
    }
}

fn print_usage(program_name: &str) {
    println!("Usage: {} <input_file> <output_file> <type>", program_name);
    println!("       {} <xml_file> <xsd_file> <type>", program_name);
    println!("       {} <input_file> <type>", program_name);
    println!("       {} help", program_name);
    println!("Type 1: CSV to BIN");
    println!("Type 2: BIN to XML");
    println!("Type 3: XML validation with XSD");
}

fn run(mode: Mode) -> Result<bool> {
    match mode {
        Mode::CsvToBinary { input, output } => {
            let count = pipeline::csv_to_binary(&input, &output)?;
            println!(
                "Binary file created: {} ({} records)",
                output.display(),
                count
            );
            Ok(true)
        }
        Mode::BinaryToXml { output } => {
            let config = config::load(Path::new(SETUP_PARAMS_FILE))?;
            let count = pipeline::binary_to_xml(&config, &output)?;
            println!("XML file created: {} ({} rows)", output.display(), count);
            Ok(true)
        }
        Mode::Validate { xml, xsd } => {
            println!("Validating {} with {}", xml.display(), xsd.display());
            let report = pipeline::validate_xml_file(&xml, &xsd)?;
            if report.valid {
                println!("Validation successful");
            } else {
                println!("Validation failed");
                for violation in &report.violations {
                    println!("  - {}", violation);
                }
            }
            Ok(report.valid)
        }
        // Handled by main before run() is reached
        Mode::Help | Mode::Invalid => Ok(true),
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(String::as_str)
        .unwrap_or("records-converter");

    let mode = parse_mode(args.get(1..).unwrap_or(&[]));
    match mode {
        Mode::Help => {
            print_usage(program_name);
            return ExitCode::SUCCESS;
        }
        Mode::Invalid => {
            eprintln!("Error: Invalid arguments");
            print_usage(program_name);
            return ExitCode::FAILURE;
        }
        _ => {}
    }

    match run(mode) {
        Ok(true) => ExitCode::SUCCESS,
        // Failed schema verdict: reported above, nonzero exit
        Ok(false) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
