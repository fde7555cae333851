use std::ffi::OsStr;
use std::io::Write;

use approx::{escape, parse_duration, Duration, Units};
use serde::Serialize;
use thousands::Separable;
use tracing::debug;

use crate::{errors::CliError, settings::Settings};

/// The outcome for one input of `approx parse`. `input` is escaped the same
/// way as the input inside `error`.
#[derive(Debug, PartialEq, Serialize)]
pub struct ParseReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nanoseconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approx: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParseReport {
    pub fn new(input: &OsStr, units: Units) -> Self {
        let mut report = ParseReport {
            input: escape(input.as_encoded_bytes()),
            nanoseconds: None,
            duration: None,
            approx: None,
            error: None,
        };
        match parse_duration(input.as_encoded_bytes()) {
            Ok(d) => {
                report.nanoseconds = Some(d.as_nanoseconds());
                report.duration = Some(d.to_string());
                report.approx = Some(d.approx(units).to_string());
            }
            Err(err) => report.error = Some(err.to_string()),
        }
        report
    }

    fn write_text(&self, out: &mut impl Write) -> std::io::Result<()> {
        match (&self.nanoseconds, &self.error) {
            (Some(nanoseconds), _) => {
                writeln!(out, "{}", self.input)?;
                writeln!(out, "  nanoseconds: {}", nanoseconds.separate_with_commas())?;
                if let Some(duration) = &self.duration {
                    writeln!(out, "  duration:    {duration}")?;
                }
                if let Some(approx) = &self.approx {
                    writeln!(out, "  approx:      {approx}")?;
                }
                Ok(())
            }
            (None, Some(error)) => writeln!(out, "{error}"),
            (None, None) => Ok(()),
        }
    }
}

/// The outcome for one input of `approx format`.
#[derive(Debug, PartialEq, Serialize)]
pub struct FormatReport {
    pub nanoseconds: i64,
    pub approx: String,
}

pub fn parse(
    inputs: &[std::ffi::OsString],
    json: bool,
    units: Units,
    out: &mut impl Write,
) -> Result<(), CliError> {
    debug!("parsing {} inputs with units {units}", inputs.len());
    let mut failed = 0;
    for input in inputs {
        let report = ParseReport::new(input, units);
        if let Some(error) = &report.error {
            // Already written to `out`; stderr only gets it when debugging.
            debug!("{error}");
            failed += 1;
        }
        if json {
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        } else {
            report.write_text(out)?;
        }
    }

    match failed {
        0 => Ok(()),
        failed => Err(CliError::Rejected {
            failed,
            total: inputs.len(),
        }),
    }
}

pub fn format(
    nanoseconds: &[i64],
    json: bool,
    units: Units,
    out: &mut impl Write,
) -> Result<(), CliError> {
    debug!("formatting {} values with units {units}", nanoseconds.len());
    for &ns in nanoseconds {
        let approx = Duration::from_nanoseconds(ns).approx(units);
        if json {
            let report = FormatReport {
                nanoseconds: ns,
                approx: approx.to_string(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{approx}")?;
        }
    }
    Ok(())
}

pub fn config(settings: &Settings, save: bool, out: &mut impl Write) -> Result<(), CliError> {
    if save {
        let path = settings.write()?;
        debug!("settings written to {}", path.display());
    }
    match Settings::path() {
        Some(path) => writeln!(out, "# {}", path.display())?,
        None => writeln!(out, "# no configuration directory")?,
    }
    let text = toml::to_string_pretty(settings).map_err(crate::settings::SettingsError::from)?;
    write!(out, "{text}")?;
    Ok(())
}
