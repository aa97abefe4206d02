//! `shopvar classify`: decode JSON documents and report which records are
//! default-variant products.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shopvar_core::{classify, MatchPath, ShopifyProduct, ShopifyVariant, Subject, Verdict};
use thiserror::Error;

use crate::config::OutputFormat;

/// Label used for documents read from stdin.
const STDIN: &str = "-";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON in {origin}: {source}")]
    Deserialize {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{origin}: no value at JSON pointer \"{pointer}\"")]
    MissingPointer { origin: String, pointer: String },

    #[error("{origin}: --each needs an array or a products response")]
    NotACollection { origin: String },
}

#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// RFC 6901 pointer selecting the part of each document to classify.
    pub pointer: Option<String>,
    /// Classify each element of the selected array instead of the array.
    pub each: bool,
    /// Decode into the typed REST model before classifying.
    pub typed: bool,
    pub format: OutputFormat,
}

/// Result for one classified record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub source: String,
    /// Position within the selected array when `--each` is used.
    pub index: Option<usize>,
    pub default_variant: bool,
    pub path: Option<MatchPath>,
}

/// Reads every input (stdin when `paths` is empty), classifies it and
/// writes the results to `out`.
///
/// # Errors
///
/// Fails on the first unreadable file, invalid document or unresolvable
/// pointer.
pub fn run(
    paths: &[PathBuf],
    options: &ClassifyOptions,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let sources: Vec<String> = if paths.is_empty() {
        vec![STDIN.to_string()]
    } else {
        paths.iter().map(|p| p.display().to_string()).collect()
    };

    let mut outcomes = Vec::new();
    for source in &sources {
        let document = if source == STDIN {
            read_document(source, io::stdin().lock())?
        } else {
            let file = File::open(source).with_context(|| format!("failed to open {source}"))?;
            read_document(source, BufReader::new(file))?
        };
        outcomes.extend(classify_document(source, &document, options)?);
    }

    let matched = outcomes.iter().filter(|o| o.default_variant).count();
    tracing::info!(
        sources = sources.len(),
        records = outcomes.len(),
        matched,
        "classification complete"
    );

    let labelled = sources.len() > 1 || options.each;
    write_outcomes(out, &outcomes, options.format, labelled).context("failed to write results")
}

/// Decodes one JSON document.
///
/// # Errors
///
/// Returns [`InputError::Deserialize`] when `reader` does not hold valid
/// JSON.
pub fn read_document(origin: &str, reader: impl Read) -> Result<Value, InputError> {
    serde_json::from_reader(reader).map_err(|source| InputError::Deserialize {
        origin: origin.to_owned(),
        source,
    })
}

/// Classifies the records selected from `document` by `options`.
///
/// # Errors
///
/// Returns [`InputError`] when the pointer does not resolve, `--each` is
/// used on something that is not a collection, or `--typed` decoding fails.
pub fn classify_document(
    origin: &str,
    document: &Value,
    options: &ClassifyOptions,
) -> Result<Vec<Outcome>, InputError> {
    let selected = match options.pointer.as_deref() {
        Some(pointer) => document
            .pointer(pointer)
            .ok_or_else(|| InputError::MissingPointer {
                origin: origin.to_owned(),
                pointer: pointer.to_owned(),
            })?,
        None => document,
    };

    let records: Vec<(Option<usize>, &Value)> = if options.each {
        elements(selected)
            .ok_or_else(|| InputError::NotACollection {
                origin: origin.to_owned(),
            })?
            .iter()
            .enumerate()
            .map(|(index, record)| (Some(index), record))
            .collect()
    } else {
        vec![(None, selected)]
    };

    records
        .into_iter()
        .map(|(index, record)| {
            let verdict = classify_record(origin, record, options.typed)?;
            tracing::debug!(
                origin,
                ?index,
                matched = verdict.matched,
                path = ?verdict.path,
                "classified record"
            );
            Ok(Outcome {
                source: origin.to_owned(),
                index,
                default_variant: verdict.matched,
                path: verdict.path,
            })
        })
        .collect()
}

/// The records `--each` iterates: a bare array, or the `products` array of
/// a `products.json` response.
fn elements(value: &Value) -> Option<&Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => map.get("products").and_then(Value::as_array),
        _ => None,
    }
}

fn classify_record(origin: &str, record: &Value, typed: bool) -> Result<Verdict, InputError> {
    if !typed {
        return Ok(classify(record));
    }

    let typed_error = |source| InputError::Deserialize {
        origin: origin.to_owned(),
        source,
    };
    if record.get("variants").is_some() {
        let product = ShopifyProduct::deserialize(record).map_err(typed_error)?;
        Ok(classify(Subject::object(&product)))
    } else {
        let variant = ShopifyVariant::deserialize(record).map_err(typed_error)?;
        Ok(classify(Subject::object(&variant)))
    }
}

/// Writes one line per outcome.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_outcomes(
    out: &mut impl Write,
    outcomes: &[Outcome],
    format: OutputFormat,
    labelled: bool,
) -> io::Result<()> {
    for outcome in outcomes {
        match format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, outcome)?;
                writeln!(out)?;
            }
            OutputFormat::Text if labelled => match outcome.index {
                Some(index) => writeln!(
                    out,
                    "{}[{index}]: {}",
                    outcome.source, outcome.default_variant
                )?,
                None => writeln!(out, "{}: {}", outcome.source, outcome.default_variant)?,
            },
            OutputFormat::Text => writeln!(out, "{}", outcome.default_variant)?,
        }
    }
    out.flush()
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod tests;
