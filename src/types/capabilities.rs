//! Runtime capabilities resolved once at startup

/// What the hosting runtime supports
///
/// Decides defaults that depend on the platform rather than on configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeCapabilities {
    /// Whether injectors can be generated at runtime
    pub dynamic_codegen: bool,
}

impl RuntimeCapabilities {
    /// Create capabilities with an explicit codegen flag
    pub fn new(dynamic_codegen: bool) -> Self {
        Self { dynamic_codegen }
    }

    /// Capabilities of a runtime without dynamic code generation
    pub fn without_codegen() -> Self {
        Self::new(false)
    }
}

impl Default for RuntimeCapabilities {
    fn default() -> Self {
        Self {
            dynamic_codegen: true,
        }
    }
}
