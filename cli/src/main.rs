mod output;

use clap::{Arg, ArgAction, ArgMatches, Command};
use heck::ToUpperCamelCase;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use streamgen_core::error::{ErrorKind, Level, StreamgenErrorExt};
use streamgen_core::position::NodePosition;
use streamgen_core::{ControllerGenerator, GenResult, OperatorDescriptor, TargetProfile, generate_error_report, load_descriptor};
use tracing_subscriber::EnvFilter;

use output::{FormatStyle, InspectSummary};

fn main() {
    let cli = Command::new("streamgen")
        .version("0.1.0")
        .about("Generates runtime controller classes from operator descriptors")
        .arg(
            Arg::new("verbose")
                .help("Increase log output (-v info, -vv debug, -vvv trace)")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true),
        );

    let cli = setup_cli(cli);
    let matches = cli.get_matches();

    init_logging(matches.get_count("verbose"));

    let style = FormatStyle::default();
    if let Err(e) = dispatch_commands(&matches, &style) {
        output::print_report(e.as_ref(), &style);
        std::process::exit(1);
    }
}

/// Install the stderr subscriber. `-v` flags pick the level; without them
/// `RUST_LOG` is honoured and the default is `warn`. Records from the `log`
/// macros of the core arrive through the subscriber's log bridge.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    };
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Sets up the CLI with subcommands and arguments.
fn setup_cli(cli: Command) -> Command {
    cli.subcommand_required(true)
        .subcommand(
            Command::new("build")
                .about("Generate the controller of one or more descriptors")
                .arg(
                    Arg::new("descriptors")
                        .help("Descriptor files or glob patterns")
                        .required(true)
                        .num_args(1..)
                        .value_parser(clap::value_parser!(String))
                        .index(1),
                )
                .arg(
                    Arg::new("package")
                        .help("Java package of the generated controller")
                        .short('p')
                        .long("package")
                        .required(true)
                        .value_parser(clap::value_parser!(String))
                        .value_name("PKG"),
                )
                .arg(
                    Arg::new("name")
                        .help("Operator name; defaults to the descriptor name in UpperCamelCase")
                        .short('n')
                        .long("name")
                        .value_parser(clap::value_parser!(String))
                        .value_name("NAME"),
                )
                .arg(
                    Arg::new("target")
                        .help("Target profile (JSON)")
                        .short('t')
                        .long("target")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_name("PROFILE"),
                )
                .arg(
                    Arg::new("output")
                        .help("Output directory; the controller is printed when omitted")
                        .short('o')
                        .long("output")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_name("DIR"),
                )
                .arg(
                    Arg::new("dump")
                        .help("Specify the dump stage")
                        .short('d')
                        .long("dump")
                        .value_parser(["model"])
                        .value_name("STAGE"),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Summarise a descriptor and check that it lowers")
                .arg(
                    Arg::new("descriptor")
                        .help("The descriptor file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .help("Print the summary as JSON")
                        .long("json")
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Dispatches the command based on the parsed arguments.
fn dispatch_commands(matches: &ArgMatches, style: &FormatStyle) -> GenResult<()> {
    match matches.subcommand() {
        Some(("build", sub_m)) => build(sub_m, style),
        Some(("inspect", sub_m)) => inspect(sub_m, style),
        _ => Err(CliError::boxed(ErrorKind::InvalidInput, "no valid subcommand, use --help".to_string())),
    }
}

fn build(sub_m: &ArgMatches, style: &FormatStyle) -> GenResult<()> {
    let patterns: Vec<&String> = sub_m.get_many::<String>("descriptors").into_iter().flatten().collect();
    let inputs = expand_inputs(&patterns)?;
    let package = sub_m.get_one::<String>("package").map(String::as_str).unwrap_or_default();
    let name = sub_m.get_one::<String>("name");
    let out_dir = sub_m.get_one::<PathBuf>("output");
    let dump = sub_m.get_one::<String>("dump");

    if name.is_some() && inputs.len() > 1 {
        return Err(CliError::boxed(
            ErrorKind::InvalidInput,
            "--name applies to a single descriptor".to_string(),
        ));
    }

    let target = match sub_m.get_one::<PathBuf>("target") {
        Some(path) => TargetProfile::load_from_file(path)?,
        None => TargetProfile::default(),
    };

    let pb = output::batch_progress(inputs.len());
    for path in &inputs {
        let descriptor = load_descriptor(path)?;
        let operator = match name {
            Some(n) => n.clone(),
            None => operator_name(&descriptor),
        };
        pb.set_message(operator.clone());
        debug!("{} -> {}", path.display(), operator);

        if dump.map(String::as_str) == Some("model") {
            dump_model(&descriptor, &operator, out_dir)?;
        }

        let file = ControllerGenerator::new(&descriptor, operator.as_str(), package)
            .with_target(target.clone())
            .build_file()?;

        match out_dir {
            Some(dir) => {
                let dest = dir.join(file.relative_path());
                write_file(&dest, &file.render())?;
                info!("wrote {}", dest.display());
            }
            None => print!("{}", file.render()),
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if out_dir.is_some() {
        output::print_success(&format!("generated {} controller(s)", inputs.len()), style);
    }
    Ok(())
}

fn inspect(sub_m: &ArgMatches, style: &FormatStyle) -> GenResult<()> {
    let path = sub_m
        .get_one::<PathBuf>("descriptor")
        .ok_or_else(|| CliError::boxed(ErrorKind::MissingInput, "descriptor path required".to_string()))?;
    let descriptor = load_descriptor(path)?;
    let operator = operator_name(&descriptor);

    let lowering = match ControllerGenerator::new(&descriptor, operator.as_str(), "").build() {
        Ok(_) => None,
        Err(e) => Some(generate_error_report(e.as_ref())),
    };

    if sub_m.get_flag("json") {
        let summary = InspectSummary::new(&descriptor, operator, lowering);
        let text = serde_json::to_string_pretty(&summary)
            .map_err(|e| CliError::boxed(ErrorKind::InvalidInput, e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", style.title.apply_to(format!("{} ({})", descriptor.name, operator)));
    println!("{}", output::summary_table(&descriptor));
    match lowering {
        None => println!("{}", style.success.apply_to("lowering: ok")),
        Some(report) => println!("{}", style.error.apply_to(format!("lowering: {}", report))),
    }
    Ok(())
}

fn operator_name(descriptor: &OperatorDescriptor) -> String {
    descriptor.name.to_upper_camel_case()
}

/// Expand glob patterns; plain paths are passed through unchanged.
fn expand_inputs(patterns: &[&String]) -> GenResult<Vec<PathBuf>> {
    let mut inputs = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            inputs.push(PathBuf::from(pattern.as_str()));
            continue;
        }
        let paths = glob::glob(pattern)
            .map_err(|e| CliError::boxed(ErrorKind::InvalidInput, format!("bad pattern '{}': {}", pattern, e)))?;
        let before = inputs.len();
        for entry in paths {
            let path = entry.map_err(|e| CliError::boxed(ErrorKind::MissingInput, e.to_string()))?;
            inputs.push(path);
        }
        if inputs.len() == before {
            return Err(CliError::boxed(
                ErrorKind::MissingInput,
                format!("pattern '{}' matched no descriptors", pattern),
            ));
        }
    }
    Ok(inputs)
}

fn dump_model(descriptor: &OperatorDescriptor, operator: &str, out_dir: Option<&PathBuf>) -> GenResult<()> {
    let text = serde_json::to_string_pretty(descriptor)
        .map_err(|e| CliError::boxed(ErrorKind::InvalidInput, e.to_string()))?;
    match out_dir {
        Some(dir) => write_file(&dir.join(format!("{}.model.json", operator)), &text),
        None => {
            eprintln!("{}", text);
            Ok(())
        }
    }
}

fn write_file(dest: &Path, content: &str) -> GenResult<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CliError::boxed(ErrorKind::InvalidInput, format!("create {}: {}", parent.display(), e)))?;
    }
    fs::write(dest, content)
        .map_err(|e| CliError::boxed(ErrorKind::InvalidInput, format!("write {}: {}", dest.display(), e)))
}

#[derive(Debug, Clone)]
struct CliError {
    kind: ErrorKind,
    message: String,
}

impl CliError {
    fn boxed(kind: ErrorKind, message: String) -> Box<dyn StreamgenErrorExt> {
        Box::new(CliError { kind, message })
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl StreamgenErrorExt for CliError {
    fn level(&self) -> Level {
        Level::Error
    }

    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn issuer(&self) -> String {
        "streamgen.cli".to_string()
    }

    fn position(&self) -> Option<NodePosition> {
        None
    }
}
