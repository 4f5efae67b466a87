//! formflow-check - Run FormFlow page checks from the command line

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Serialize, Serializer};

use libformflow::{
    logging::LoggingConfig, AgeOutcome, Config, EmailOutcome, FormFlowController, FormFlowError,
    ParityReport,
};

#[derive(Parser, Debug)]
#[command(name = "formflow-check")]
#[command(version, about = "Run the number, email and age page checks")]
#[command(long_about = r#"Run the FormFlow page checks without the terminal UI.

EXAMPLES:
    # Generate 1..5 and report the parity of 2 and 5
    formflow-check numbers 5 --click 2 --click 5

    # Validate an email
    formflow-check email user@example.org

    # Categorize an age
    formflow-check age --name "Lan" --age 6

    # JSON output for scripting
    formflow-check --format json email abc | jq '.outcome'

EXIT CODES:
    0 - Input accepted
    1 - Error (bad configuration, output failure)
    3 - Input rejected (not a number, malformed email, invalid age)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT", global = true)]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the list 1..=N from INPUT
    Numbers {
        /// Count to generate (any text; non-integers are rejected)
        #[arg(allow_hyphen_values = true)]
        input: String,

        /// Report the parity of a listed number (repeatable)
        #[arg(long, value_name = "N", allow_negative_numbers = true)]
        click: Vec<i32>,
    },

    /// Check an email address
    Email {
        #[arg(allow_hyphen_values = true)]
        input: String,
    },

    /// Categorize an age
    Age {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, allow_hyphen_values = true)]
        age: String,
    },
}

/// Whether the checked input was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Accepted,
    Rejected,
}

#[derive(Debug, Serialize)]
#[serde(tag = "check", rename_all = "lowercase")]
enum Report {
    Numbers {
        input: String,
        valid: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        error: Option<&'static str>,
        count: usize,
        /// Upper bound of `1..=list`, serialized as the full array
        #[serde(serialize_with = "serialize_range")]
        list: i32,
        clicks: Vec<ClickReport>,
    },
    Email {
        input: String,
        valid: bool,
        outcome: EmailOutcome,
        message: &'static str,
    },
    Age {
        name: String,
        age: String,
        valid: bool,
        outcome: AgeOutcome,
        label: &'static str,
    },
}

#[derive(Debug, Serialize)]
struct ClickReport {
    #[serde(flatten)]
    report: ParityReport,
    message: String,
}

/// Serialize `1..=upto` without collecting it
fn serialize_range<S: Serializer>(upto: &i32, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(1..=*upto)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(Verdict::Accepted) => {}
        Ok(Verdict::Rejected) => std::process::exit(3),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<FormFlowError>()
                .map(FormFlowError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn run(cli: &Cli) -> Result<Verdict> {
    let config = Config::load()?;
    let mut logging = LoggingConfig::new(config.logging.format, config.logging.level.clone(), cli.verbose);
    if let Some(path) = config.log_file() {
        logging = logging.with_file(path);
    }
    logging.init()?;

    let mut flow = FormFlowController::new();
    let report = check(&mut flow, &cli.command)?;
    let verdict = verdict(&report);
    tracing::debug!(?verdict, "check finished");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.format.as_str() {
        "json" => {
            serde_json::to_writer_pretty(&mut out, &report).context("Failed to write JSON")?;
            writeln!(out)?;
        }
        _ => write_text(&mut out, &report)?,
    }
    out.flush()?;

    Ok(verdict)
}

/// Drive the controller through one page check
fn check(flow: &mut FormFlowController, command: &Command) -> Result<Report> {
    match command {
        Command::Numbers { input, click } => {
            flow.on_generate_list(input);

            let mut clicks = Vec::with_capacity(click.len());
            for &num in click {
                let report = flow.on_click_list_item(num).ok_or_else(|| {
                    FormFlowError::InvalidInput(format!("{} is not in the generated list", num))
                })?;
                let message = report.message();
                clicks.push(ClickReport { report, message });
            }

            let numbers = flow.numbers();
            Ok(Report::Numbers {
                input: input.clone(),
                valid: !numbers.is_error(),
                error: numbers.error_message(),
                count: numbers.len(),
                list: numbers.generated_list().next_back().unwrap_or(0),
                clicks,
            })
        }
        Command::Email { input } => {
            flow.on_email_change(input);
            let outcome = flow.on_check_email();
            Ok(Report::Email {
                input: input.clone(),
                valid: outcome.is_valid(),
                outcome,
                message: outcome.message(),
            })
        }
        Command::Age { name, age } => {
            flow.on_name_change(name);
            flow.on_age_change(age);
            let outcome = flow.on_check_age();
            Ok(Report::Age {
                name: name.clone(),
                age: age.clone(),
                valid: outcome != AgeOutcome::Invalid,
                outcome,
                label: outcome.label(),
            })
        }
    }
}

fn verdict(report: &Report) -> Verdict {
    let valid = match report {
        Report::Numbers { valid, .. } | Report::Email { valid, .. } | Report::Age { valid, .. } => {
            *valid
        }
    };
    if valid {
        Verdict::Accepted
    } else {
        Verdict::Rejected
    }
}

fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    match report {
        Report::Numbers {
            error, list, clicks, ..
        } => {
            if let Some(error) = error {
                writeln!(out, "{}", error)?;
            }
            for num in 1..=*list {
                writeln!(out, "{}", num)?;
            }
            for click in clicks {
                writeln!(out, "{}", click.message)?;
            }
        }
        Report::Email { message, .. } => writeln!(out, "{}", message)?,
        Report::Age {
            name, age, label, ..
        } => {
            writeln!(out, "Name: {}", name)?;
            writeln!(out, "Age: {}", age)?;
            writeln!(out, "Category: {}", label)?;
        }
    }
    Ok(())
}
