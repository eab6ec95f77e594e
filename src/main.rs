//! Decode Tamagotchi "mix" text dumps to UTF-8.
//!
//! Usage:
//!   tamadecode [--config PATH] [--charset NAME]
//!              [--on-unmappable report|replace|ignore] [--json] [--list]
//!              [INPUT|-]

use std::io::{Read, Write};

use anyhow::Context;
use tamagotchi_charsets::{
    config::{Config, OutputFormat},
    error::AppError,
    registry::CharsetRegistry,
    stream::{decode_reader, Decoded, ErrorAction},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq)]
struct Args {
    config: Option<String>,
    charset: Option<String>,
    on_unmappable: Option<ErrorAction>,
    json: bool,
    list: bool,
    input: String,
}

fn parse_action(value: &str) -> anyhow::Result<ErrorAction> {
    match value {
        "report" => Ok(ErrorAction::Report),
        "replace" => Ok(ErrorAction::Replace),
        "ignore" => Ok(ErrorAction::Ignore),
        other => anyhow::bail!("unknown action: {other}"),
    }
}

/// `config_path` is the fallback from `CONFIG_PATH`; `--config` wins.
fn parse_args_from<I>(args: I, config_path: Option<String>) -> anyhow::Result<Args>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = Args {
        config: config_path,
        charset: None,
        on_unmappable: None,
        json: false,
        list: false,
        input: "-".into(),
    };

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--config" => parsed.config = Some(args.next().context("--config needs a value")?),
            "--charset" => parsed.charset = Some(args.next().context("--charset needs a value")?),
            "--on-unmappable" => {
                let value = args.next().context("--on-unmappable needs a value")?;
                parsed.on_unmappable = Some(parse_action(&value)?);
            }
            "--json" => parsed.json = true,
            "--list" => parsed.list = true,
            other if other.starts_with("--") => anyhow::bail!("unknown flag: {other}"),
            other => parsed.input = other.to_string(),
        }
    }

    Ok(parsed)
}

/// Load the config file, if any, then apply flag overrides on top.
fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    };
    if let Some(charset) = &args.charset {
        config.decoder.charset = charset.clone();
    }
    if let Some(action) = args.on_unmappable {
        config.decoder.on_unmappable = action;
    }
    if args.json {
        config.output.format = OutputFormat::Json;
    }
    Ok(config)
}

fn list_charsets<W: Write>(registry: &CharsetRegistry, out: &mut W) -> std::io::Result<()> {
    for charset in registry.charsets() {
        let mode = if charset.can_encode() { "decode/encode" } else { "decode-only" };
        writeln!(out, "{} {} ({mode})", charset.name(), charset.aliases().join(" "))?;
    }
    Ok(())
}

fn open_input(path: &str) -> anyhow::Result<Box<dyn Read>> {
    if path == "-" {
        return Ok(Box::new(std::io::stdin().lock()));
    }
    let file = std::fs::File::open(path).with_context(|| format!("opening {path}"))?;
    Ok(Box::new(file))
}

fn write_decoded<W: Write>(
    out: &mut W,
    decoded: &Decoded,
    format: OutputFormat,
) -> Result<(), AppError> {
    match format {
        OutputFormat::Text => out.write_all(decoded.text.as_bytes())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, decoded)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = parse_args_from(std::env::args().skip(1), std::env::var("CONFIG_PATH").ok())?;
    let registry = CharsetRegistry::with_builtin();
    let mut stdout = std::io::stdout().lock();

    if args.list {
        list_charsets(&registry, &mut stdout)?;
        return Ok(());
    }

    let config = load_config(&args)?;
    let charset = registry.resolve(&config.decoder.charset)?;
    let reader = open_input(&args.input)?;

    tracing::info!(charset = charset.name(), input = %args.input, "decoding");
    let decoded = decode_reader(
        charset.as_ref(),
        reader,
        config.decoder.chunk_size,
        &config.decoder.decode_options(),
    )
    .with_context(|| format!("decoding {}", args.input))?;

    if !decoded.unmappable.is_empty() {
        tracing::warn!(count = decoded.unmappable.len(), "input contained unmappable pairs");
    }

    write_decoded(&mut stdout, &decoded, config.output.format)?;

    Ok(())
}
