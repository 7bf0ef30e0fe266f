use std::fmt;

use target_lexicon::Triple;

use crate::error::AssembleError;

/// Target selection for an assembler backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblerConfig {
    /// Target triple instructions are encoded for.
    pub triple: Triple,
    /// CPU model within the target, `generic` when unspecified.
    pub cpu:    String,
}

impl AssemblerConfig {
    /// Creates a configuration for `triple` and `cpu`.
    #[must_use]
    pub fn new(triple: Triple, cpu: impl Into<String>) -> Self {
        Self { triple,
               cpu: cpu.into() }
    }
}

/// The host triple with the generic CPU model.
impl Default for AssemblerConfig {
    fn default() -> Self {
        Self::new(Triple::host(), "generic")
    }
}

impl fmt::Display for AssemblerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.triple, self.cpu)
    }
}

/// Turns one line of assembly into machine code.
///
/// Implementations keep whatever per-target state they need between lines.
/// The session only ever hands them lines that are not builtin commands.
pub trait Assembler {
    /// Assembles `line`, returning the encoded bytes.
    ///
    /// # Errors
    /// Returns the backend's complaint and the column it refers to.
    fn assemble(&mut self, line: &str) -> Result<Vec<u8>, AssembleError>;

    /// The target this assembler encodes for.
    fn config(&self) -> &AssemblerConfig;
}

/// An assembler for targets without a code generation backend.
///
/// Every line is rejected, so the session still runs builtin commands for
/// any target.
///
/// # Example
/// ```
/// use asmrepl::assembler::{Assembler, AssemblerConfig, UnsupportedAssembler};
///
/// let mut assembler = UnsupportedAssembler::new(AssemblerConfig::default());
/// let err = assembler.assemble("nop").unwrap_err();
///
/// assert!(err.message.starts_with("no code generation backend for target"));
/// assert_eq!(err.column, 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnsupportedAssembler {
    config: AssemblerConfig,
}

impl UnsupportedAssembler {
    /// Creates the assembler for `config`.
    #[must_use]
    pub const fn new(config: AssemblerConfig) -> Self {
        Self { config }
    }
}

impl Assembler for UnsupportedAssembler {
    fn assemble(&mut self, _line: &str) -> Result<Vec<u8>, AssembleError> {
        Err(AssembleError::new(format!("no code generation backend for target `{}`",
                                       self.config.triple),
                               0))
    }

    fn config(&self) -> &AssemblerConfig {
        &self.config
    }
}

/// Formats machine code the way the session prints it: two lowercase hex
/// digits per byte, separated by spaces.
///
/// ```
/// use asmrepl::assembler::format_bytes;
///
/// assert_eq!(format_bytes(&[0x48, 0x89, 0xc3]), "48 89 c3");
/// assert_eq!(format_bytes(&[]), "");
/// ```
#[must_use]
pub fn format_bytes(bytes: &[u8]) -> String {
    bytes.iter()
         .map(|byte| format!("{byte:02x}"))
         .collect::<Vec<_>>()
         .join(" ")
}
