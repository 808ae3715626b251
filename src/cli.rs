use casa_enquiry::config::AppConfig;
use casa_enquiry::enquiry::{BhkType, EnquiryRequest, PackageType};
use casa_enquiry::error::AppError;
use casa_enquiry::telemetry;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "casa-enquiry",
    about = "Normalize Casamanduva estimate enquiries from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize one enquiry JSON object and print the typed record
    Normalize(NormalizeArgs),
    /// List the BHK and package tokens the normalizer accepts
    Tokens,
}

#[derive(Args, Debug, Default)]
struct NormalizeArgs {
    /// Read the enquiry from this file instead of stdin
    #[arg(long, short)]
    input: Option<PathBuf>,
    /// Pretty-print the normalized JSON
    #[arg(long)]
    pretty: bool,
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(environment = config.environment.label(), "enquiry tooling ready");

    match cli.command {
        Command::Normalize(args) => {
            let rendered = normalize_source(args.input.as_deref(), args.pretty)?;
            println!("{rendered}");
            Ok(())
        }
        Command::Tokens => {
            println!("{}", render_tokens());
            Ok(())
        }
    }
}

fn normalize_source(input: Option<&Path>, pretty: bool) -> Result<String, AppError> {
    match input {
        Some(path) => {
            info!(path = %path.display(), "normalizing enquiry file");
            normalize_input(BufReader::new(File::open(path)?), pretty)
        }
        None => normalize_input(io::stdin().lock(), pretty),
    }
}

fn normalize_input<R: Read>(reader: R, pretty: bool) -> Result<String, AppError> {
    let enquiry = EnquiryRequest::from_reader(reader)?;
    let rendered = if pretty {
        serde_json::to_string_pretty(&enquiry)
    } else {
        serde_json::to_string(&enquiry)
    };
    rendered.map_err(AppError::Output)
}

fn render_tokens() -> String {
    let mut lines = vec!["bhkType (case-insensitive)".to_string()];
    for bhk in BhkType::ordered() {
        let aliases: Vec<_> = BhkType::accepted_tokens()
            .filter(|token| token.parse::<BhkType>().ok() == Some(bhk))
            .collect();
        lines.push(format!("- {}: {}", bhk.label(), aliases.join(", ")));
    }

    lines.push("packageType (case-insensitive)".to_string());
    for package in PackageType::ordered() {
        lines.push(format!("- {}: {}", package.label(), package.as_str()));
    }

    lines.join("\n")
}
