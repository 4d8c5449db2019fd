/// cli/src/output.rs
/// Output utilities for CLI
/// description: styled error reports, the descriptor summary table and the
/// progress bar shown while generating several controllers.

use comfy_table::{Cell, Table, presets};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use streamgen_core::descriptor::{OutputStrategy, PropertyDescriptor, StaticParameter};
use streamgen_core::{Level, OperatorDescriptor, StreamgenErrorExt, generate_error_report};

/// Styles for different output elements
pub struct FormatStyle {
    pub title: Style,
    pub info: Style,
    pub warning: Style,
    pub error: Style,
    pub success: Style,
}

impl Default for FormatStyle {
    fn default() -> Self {
        FormatStyle {
            title: Style::new().bold().underlined(),
            info: Style::new().cyan(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            success: Style::new().green().bold(),
        }
    }
}

impl FormatStyle {
    fn for_level(&self, level: Level) -> &Style {
        match level {
            Level::Info => &self.info,
            Level::Warning => &self.warning,
            Level::Error | Level::Critical => &self.error,
        }
    }
}

/// Print a one-line report for `error` to stderr.
pub fn print_report(error: &dyn StreamgenErrorExt, style: &FormatStyle) {
    let report = generate_error_report(error);
    eprintln!("{}", style.for_level(error.level()).apply_to(report));
}

pub fn print_success(message: &str, style: &FormatStyle) {
    eprintln!("{}", style.success.apply_to(message));
}

/// Progress bar for a batch of descriptors; hidden for a single input.
pub fn batch_progress(len: usize) -> ProgressBar {
    if len < 2 {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("{bar:30.cyan/blue} {pos:>3}/{len:3} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▒░");
    pb.set_style(style);
    pb
}

/// Machine-readable form of `inspect`.
#[derive(Debug, Serialize)]
pub struct InspectSummary<'a> {
    pub name: &'a str,
    pub operator: String,
    pub streams: Vec<StreamSummary<'a>>,
    pub output_strategies: Vec<&'static str>,
    pub static_parameters: Vec<ParameterSummary<'a>>,
    pub lowering: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StreamSummary<'a> {
    pub name: &'a str,
    pub path: &'a str,
    pub properties: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ParameterSummary<'a> {
    pub kind: &'static str,
    pub internal_name: &'a str,
}

impl<'a> InspectSummary<'a> {
    /// `lowering` is `None` when the controller generates, otherwise the
    /// error report.
    pub fn new(descriptor: &'a OperatorDescriptor, operator: String, lowering: Option<String>) -> Self {
        InspectSummary {
            name: &descriptor.name,
            operator,
            streams: descriptor
                .streams
                .iter()
                .map(|s| StreamSummary {
                    name: &s.name,
                    path: &s.path,
                    properties: s.properties.iter().map(PropertyDescriptor::variant_name).collect(),
                })
                .collect(),
            output_strategies: descriptor.output_strategies.iter().map(OutputStrategy::variant_name).collect(),
            static_parameters: descriptor
                .static_parameters
                .iter()
                .map(|p| ParameterSummary { kind: p.variant_name(), internal_name: p.internal_name() })
                .collect(),
            lowering,
        }
    }
}

/// Table of every lowered descriptor element.
pub fn summary_table(descriptor: &OperatorDescriptor) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["section", "#", "variant", "name", "detail"]);

    for (i, stream) in descriptor.streams.iter().enumerate() {
        table.add_row(vec![
            Cell::new("stream"),
            Cell::new(i),
            Cell::new("DataChannel"),
            Cell::new(&stream.name),
            Cell::new(format!("{} properties", stream.properties.len())),
        ]);
        for (j, property) in stream.properties.iter().enumerate() {
            let detail = match property {
                PropertyDescriptor::Primitive(p) => p.domain.clone(),
                _ => String::new(),
            };
            table.add_row(vec![
                Cell::new("  property"),
                Cell::new(j),
                Cell::new(property.variant_name()),
                Cell::new(""),
                Cell::new(detail),
            ]);
        }
    }
    for (i, strategy) in descriptor.output_strategies.iter().enumerate() {
        let detail = match strategy {
            OutputStrategy::Append(a) => format!("{} appended", a.properties.len()),
            _ => String::new(),
        };
        table.add_row(vec![
            Cell::new("output"),
            Cell::new(i),
            Cell::new(strategy.variant_name()),
            Cell::new(""),
            Cell::new(detail),
        ]);
    }
    for (i, param) in descriptor.static_parameters.iter().enumerate() {
        let detail = match param {
            StaticParameter::Mapping { maps_to, .. } => maps_to.clone(),
            StaticParameter::FreeText { value, .. } => value.clone(),
            StaticParameter::OneOf { options, .. } => options.join(", "),
        };
        table.add_row(vec![
            Cell::new("static"),
            Cell::new(i),
            Cell::new(param.variant_name()),
            Cell::new(param.internal_name()),
            Cell::new(detail),
        ]);
    }
    table
}
