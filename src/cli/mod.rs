//! CLI module for transcoder-rs
//!
//! This module handles command line argument parsing and dispatch.

mod formatter;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use transcoder::{alias, Transcoder, TranscoderConfig};

use formatter::{AliasRow, ResolveRow};

#[derive(Parser, Debug)]
#[command(name = "transcoder-rs")]
#[command(version, about = "Resolve charset aliases and decode text to UTF-8")]
#[command(long_about = "transcoder-rs maps the charset names found in mail and HTTP \
    headers onto canonical names and decodes text into UTF-8.\n\n\
    Examples:\n  \
    $ transcoder-rs resolve latin1 ks_c_5601-1987\n  \
    $ transcoder-rs decode --charset shift_jis message.txt\n  \
    $ cat body.bin | transcoder-rs decode -c cp1251\n  \
    $ transcoder-rs aliases ISO-8859-1")]
pub struct Cli {
    /// Show debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the canonical name for each charset name
    Resolve {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,

        /// Output JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode FILE (or piped stdin) from CHARSET and write UTF-8 to stdout
    Decode {
        /// Declared charset of the input
        #[arg(short, long, value_name = "CHARSET")]
        charset: String,

        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Replace malformed sequences with U+FFFD instead of failing
        #[arg(long)]
        lossy: bool,
    },

    /// List the alias table, or the aliases of one canonical name
    Aliases {
        #[arg(value_name = "CANONICAL")]
        canonical: Option<String>,

        /// Output JSON
        #[arg(short, long)]
        json: bool,
    },
}

impl Cli {
    pub fn run(&self, mut config: TranscoderConfig) -> Result<()> {
        let use_color = atty::is(atty::Stream::Stdout);

        match &self.command {
            Command::Resolve { names, json } => {
                let transcoder = Transcoder::from_config(&config);
                let rows = resolve_rows(&transcoder, names);
                let output = if *json {
                    formatter::format_json(&rows)?
                } else {
                    formatter::format_resolve(&rows, use_color)
                };
                println!("{}", output);
            }
            Command::Decode { charset, file, lossy } => {
                if *lossy {
                    config.codec.lossy = true;
                }
                let transcoder = Transcoder::from_config(&config);
                let input = read_input(file.as_ref())?;
                let text = transcoder.decode(&input, charset)?;
                let mut stdout = io::stdout();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
            Command::Aliases { canonical, json } => {
                let rows = alias_rows(canonical.as_deref());
                if rows.is_empty() {
                    if let Some(canonical) = canonical {
                        bail!("No aliases map to \"{}\"", canonical);
                    }
                }
                let output = if *json {
                    formatter::format_json(&rows)?
                } else {
                    formatter::format_aliases(&rows, use_color)
                };
                println!("{}", output);
            }
        }

        Ok(())
    }
}

fn resolve_rows(transcoder: &Transcoder, names: &[String]) -> Vec<ResolveRow> {
    names
        .iter()
        .map(|name| {
            let canonical = transcoder.resolve_alias(name);
            ResolveRow {
                name: name.clone(),
                canonical: canonical.to_string(),
                aliased: canonical != name.as_str(),
                supported: transcoder.supports(name),
            }
        })
        .collect()
}

fn alias_rows(canonical: Option<&str>) -> Vec<AliasRow> {
    alias::aliases()
        .filter(|(_, target)| canonical.is_none_or(|c| c == *target))
        .map(|(alias, canonical)| AliasRow {
            alias: alias.to_string(),
            canonical: canonical.to_string(),
        })
        .collect()
}

/// Read the whole input from a file, or from stdin when it is piped
fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    if let Some(path) = file {
        return fs::read(path).with_context(|| format!("Failed to read {:?}", path));
    }

    if atty::is(atty::Stream::Stdin) {
        bail!("No input: pass a FILE or pipe data on stdin");
    }

    let mut buffer = Vec::new();
    io::stdin()
        .lock()
        .read_to_end(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
