//! Compiler configuration.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a compilation hands back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// The encoded words.
    #[default]
    Bytecode,
    /// The assembly listing.
    Assembly,
    /// The encoded words, destined for a device transport.
    Device,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Bytecode => "bytecode",
            OutputFormat::Assembly => "assembly",
            OutputFormat::Device => "device",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown output format '{0}' (expected bytecode, assembly, usb or device)")]
pub struct ParseOutputFormatError(pub String);

impl FromStr for OutputFormat {
    type Err = ParseOutputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bytecode" => Ok(OutputFormat::Bytecode),
            "assembly" => Ok(OutputFormat::Assembly),
            "usb" | "device" => Ok(OutputFormat::Device),
            _ => Err(ParseOutputFormatError(s.to_string())),
        }
    }
}

/// Configuration for a [`Compiler`](crate::Compiler).
///
/// ```
/// use crumble_compiler::{CompilerConfig, OutputFormat};
///
/// let config = CompilerConfig::new()
///     .with_format(OutputFormat::Device)
///     .with_assembly(false)
///     .build();
/// assert_eq!(config.format(), OutputFormat::Device);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilerConfig {
    format: OutputFormat,
    record_assembly: bool,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerConfig {
    /// Bytecode output with the assembly listing recorded.
    pub fn new() -> Self {
        Self {
            format: OutputFormat::Bytecode,
            record_assembly: true,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Whether to record the assembly listing alongside the words.
    ///
    /// Ignored for [`OutputFormat::Assembly`], which always records it.
    pub fn with_assembly(mut self, record: bool) -> Self {
        self.record_assembly = record;
        self
    }

    pub fn build(self) -> Self {
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn records_assembly(&self) -> bool {
        self.record_assembly || self.format == OutputFormat::Assembly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_formats() {
        assert_eq!("bytecode".parse::<OutputFormat>(), Ok(OutputFormat::Bytecode));
        assert_eq!("Assembly".parse::<OutputFormat>(), Ok(OutputFormat::Assembly));
        assert_eq!("usb".parse::<OutputFormat>(), Ok(OutputFormat::Device));
        assert_eq!("device".parse::<OutputFormat>(), Ok(OutputFormat::Device));
        assert_eq!(
            "hex".parse::<OutputFormat>(),
            Err(ParseOutputFormatError("hex".to_string()))
        );
    }

    #[test]
    fn defaults() {
        let config = CompilerConfig::default();
        assert_eq!(config.format(), OutputFormat::Bytecode);
        assert!(config.records_assembly());
    }

    #[test]
    fn assembly_format_forces_listing() {
        let config = CompilerConfig::new()
            .with_format(OutputFormat::Assembly)
            .with_assembly(false)
            .build();
        assert!(config.records_assembly());

        let config = CompilerConfig::new().with_assembly(false).build();
        assert!(!config.records_assembly());
    }
}
