// Druidic CLI
// Transliterate text from the command line or stdin into runes or tengwar

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;

use druidic_core::registry;
use druidic_core::settings::Settings;
use druidic_core::{
    LegendEntry, Script, ScriptMetadata, TransliterationRequest, TransliterationResult,
};

/// Latin text to Elder Futhark runes or Tengwar
#[derive(Parser, Debug)]
#[command(name = "druidic")]
#[command(author = "druidic contributors")]
#[command(version)]
#[command(about = "Transliterate Latin text into Elder Futhark runes or Tengwar", long_about = None)]
struct Args {
    /// Text to transliterate; read from stdin when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Target script (ELDER_FUTHARK or TENGWAR); unknown names fall back to ELDER_FUTHARK
    #[arg(short, long, value_name = "SCRIPT")]
    script: Option<String>,

    /// Print the glyph legend after the output
    #[arg(short, long)]
    legend: bool,

    /// List available scripts and exit
    #[arg(long)]
    list_scripts: bool,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

/// Everything printed for one run in TOML format
#[derive(Debug, Serialize)]
struct Report<'a> {
    script: &'a ScriptMetadata,
    result: &'a TransliterationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend: Option<&'a [LegendEntry]>,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

/// An explicit --config must load; the default file is optional.
fn load_settings(config: Option<&PathBuf>) -> Result<Settings> {
    if let Some(path) = config {
        return Settings::from_file(path)
            .with_context(|| format!("loading settings from {}", path.display()));
    }

    match Settings::load_default() {
        Ok(settings) => Ok(settings),
        Err(e) => {
            log::warn!("Could not load settings, using defaults: {}", e);
            Ok(Settings::new())
        }
    }
}

/// --script wins over the settings file, which wins over the built-in default
fn resolve_script(selector: Option<&str>, settings: &Settings) -> Script {
    match selector {
        Some(selector) => registry::resolve(selector),
        None => settings.default_script(),
    }
}

fn read_text(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading text from stdin")?;
    Ok(strip_trailing_newline(text))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn render_legend(script: Script) -> String {
    let metadata = script.metadata();
    let mut out = match metadata.font {
        Some(font) => format!("{} legend (render with {}):\n", metadata.display_name, font),
        None => format!("{} legend:\n", metadata.display_name),
    };
    for entry in registry::legend_for(script) {
        out.push_str(&format!("  {:<3} {}\n", entry.glyph(), entry.latin_hint()));
    }
    out
}

fn render_script_list() -> String {
    let mut out = String::new();
    for script in registry::scripts() {
        let metadata = script.metadata();
        out.push_str(&format!("{:<14} {}\n", script.identifier(), metadata.display_name));
        out.push_str(&format!("{:<14} {}\n", "", metadata.description));
        if let Some(font) = metadata.font {
            out.push_str(&format!("{:<14} font: {}\n", "", font));
        }
    }
    out
}

/// Everything written to stdout for one transliteration
fn render_output(
    result: &TransliterationResult,
    show_legend: bool,
    format: OutputFormat,
) -> Result<String> {
    let script = result.script();
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            if result.has_content() {
                out.push_str(result.glyph_text());
                out.push('\n');
            }
            if show_legend {
                if result.has_content() {
                    out.push('\n');
                }
                out.push_str(&render_legend(script));
            }
            Ok(out)
        }
        OutputFormat::Toml => {
            let report = Report {
                script: script.metadata(),
                result,
                legend: show_legend.then(|| registry::legend_for(script)),
            };
            toml::to_string_pretty(&report).context("rendering TOML output")
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.list_scripts {
        print!("{}", render_script_list());
        return Ok(());
    }

    let settings = load_settings(args.config.as_ref())?;
    let script = resolve_script(args.script.as_deref(), &settings);
    let text = read_text(&args.text)?;

    log::debug!("transliterating {} characters as {}", text.chars().count(), script);

    let request = settings.limit_request(TransliterationRequest::new(text, script));
    let result = settings.transliterate(&request);
    let show_legend = args.legend || settings.show_legend();

    print!("{}", render_output(&result, show_legend, args.format)?);

    Ok(())
}
