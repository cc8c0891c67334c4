//! Delivering compiled programs to a controller.
//!
//! Hardware links implement [`Transport`]. A `Vec<u16>` is itself a
//! transport that collects the words, which is what tests and dry runs use.

use std::io;

use thiserror::Error;
use tracing::debug;

use crumble_ast::Module;
use crumble_compiler::{CompiledProgram, Compiler, CompilerConfig, OutputFormat};

use crate::error::Result;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("device not connected")]
    NotConnected,

    #[error("device rejected the program: {0}")]
    Rejected(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A sink that delivers program words to a device.
pub trait Transport {
    fn send(&mut self, words: &[u16]) -> std::result::Result<(), TransportError>;
}

impl Transport for Vec<u16> {
    fn send(&mut self, words: &[u16]) -> std::result::Result<(), TransportError> {
        self.extend_from_slice(words);
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, words: &[u16]) -> std::result::Result<(), TransportError> {
        (**self).send(words)
    }
}

/// Compile `module` for a device and hand the words to `transport`.
///
/// Returns the program that was sent. Nothing is sent if compilation fails.
#[cfg_attr(feature = "profiling", profiling::function)]
pub fn upload<T: Transport>(module: &Module<'_>, mut transport: T) -> Result<CompiledProgram> {
    let config = CompilerConfig::new()
        .with_format(OutputFormat::Device)
        .with_assembly(false)
        .build();
    let program = Compiler::new(config).compile_module(module)?.program;

    debug!(words = program.len(), "uploading program");
    transport.send(program.words())?;
    Ok(program)
}
