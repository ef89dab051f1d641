//! CLI for inspecting, re-serializing and resolving URLs.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use urlrec::{default_port, Components, SerializeOptions, UrlRecord};

/// Top-level CLI for urlrec.
#[derive(Debug, Parser)]
#[command(name = "urlrec")]
#[command(about = "Parse, re-serialize and resolve URLs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every component of a URL, one per line.
    Parse {
        /// URL to parse.
        url: String,
    },

    /// Print a URL containing only the selected components.
    Serialize {
        /// URL to re-serialize.
        url: String,

        /// Raw inclusion mask (0-127). Defaults to all components.
        #[arg(long, value_name = "BITS")]
        mask: Option<u32>,

        /// Components to leave out (scheme, user, pass, credentials, port, path, query, fragment).
        #[arg(long, value_delimiter = ',', value_name = "COMPONENT")]
        exclude: Vec<Components>,

        /// Print the port even when it is the scheme's default.
        #[arg(long)]
        keep_default_port: bool,

        /// Print the path as given instead of collapsing `.` and `..` segments.
        #[arg(long)]
        raw_path: bool,
    },

    /// Resolve a reference against a base URL.
    Resolve {
        /// Absolute base URL.
        base: String,

        /// Absolute or relative reference.
        reference: String,
    },

    /// Check whether each argument is a URL with a host.
    Validate {
        /// URLs to check.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Print the well-known port of a scheme.
    DefaultPort {
        /// Scheme name, e.g. `https`.
        scheme: String,
    },
}

impl Cli {
    /// Parse the process arguments and run the command against stdout.
    ///
    /// Returns `Ok(false)` when the command ran but reported a negative
    /// result, such as an invalid URL passed to `validate`.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        tracing::debug!("parsed command: {:?}", cli.command);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.command.execute(&mut out)
    }
}

impl CliCommand {
    pub fn execute(self, out: &mut impl Write) -> Result<bool> {
        match self {
            CliCommand::Parse { url } => run_parse(out, &url),
            CliCommand::Serialize {
                url,
                mask,
                exclude,
                keep_default_port,
                raw_path,
            } => {
                let mut components = match mask {
                    Some(bits) => Components::from_bits(bits)?,
                    None => Components::ALL,
                };
                for component in exclude {
                    components -= component;
                }
                let options = SerializeOptions::new()
                    .with_skip_default_port(!keep_default_port)
                    .with_canonicalize_path(!raw_path);
                run_serialize(out, &url, components, &options)
            }
            CliCommand::Resolve { base, reference } => run_resolve(out, &base, &reference),
            CliCommand::Validate { urls } => run_validate(out, &urls),
            CliCommand::DefaultPort { scheme } => run_default_port(out, &scheme),
        }
    }
}

fn run_parse(out: &mut impl Write, url: &str) -> Result<bool> {
    let record = UrlRecord::parse(url).with_context(|| format!("failed to parse {}", url))?;

    let fields = [
        ("scheme", record.scheme()),
        ("user", record.user()),
        ("pass", record.pass()),
        ("host", record.host()),
        ("path", record.path()),
        ("fragment", record.fragment()),
    ];
    for (name, value) in fields {
        writeln!(out, "{:<9}{}", name, value.unwrap_or("-"))?;
    }

    match record.port() {
        Some(port) => writeln!(out, "{:<9}{}", "port", port)?,
        None => writeln!(out, "{:<9}-", "port")?,
    }

    for (name, value) in record.query().iter() {
        writeln!(out, "{:<9}{}={}", "query", name, value)?;
    }

    Ok(true)
}

fn run_serialize(
    out: &mut impl Write,
    url: &str,
    mask: Components,
    options: &SerializeOptions,
) -> Result<bool> {
    let record = UrlRecord::parse(url).with_context(|| format!("failed to parse {}", url))?;
    writeln!(out, "{}", record.serialize_with(mask, options))?;
    Ok(true)
}

fn run_resolve(out: &mut impl Write, base: &str, reference: &str) -> Result<bool> {
    let base = UrlRecord::parse(base).with_context(|| format!("failed to parse base {}", base))?;
    let resolved = base
        .resolve(reference)
        .with_context(|| format!("failed to resolve {}", reference))?;
    writeln!(out, "{}", resolved)?;
    Ok(true)
}

fn run_validate(out: &mut impl Write, urls: &[String]) -> Result<bool> {
    let mut all_valid = true;

    for url in urls {
        let valid = UrlRecord::validate(url);
        all_valid &= valid;
        writeln!(out, "{}\t{}", if valid { "valid" } else { "invalid" }, url)?;
    }

    Ok(all_valid)
}

fn run_default_port(out: &mut impl Write, scheme: &str) -> Result<bool> {
    match default_port(scheme) {
        Some(port) => {
            writeln!(out, "{}", port)?;
            Ok(true)
        }
        None => {
            writeln!(out, "no default port for {}", scheme)?;
            Ok(false)
        }
    }
}
