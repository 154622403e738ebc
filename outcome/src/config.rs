//! Build-time configuration of the misuse path.
//!
//! The values are fixed by cargo features of this crate. They are collected
//! here so the rest of the crate and downstream code branch on a constant
//! rather than scattering `cfg!` checks.

/// Resolved build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Emit a diagnostic before leaving the misuse path (`no-prints` unset).
    pub print_diagnostics: bool,
    /// Exit the process on misuse. Requires `std` and `no-exit` unset;
    /// otherwise the default handler halts.
    pub exit_process: bool,
}

/// Configuration this crate was built with.
pub const CONFIG: Config = Config {
    print_diagnostics: cfg!(not(feature = "no-prints")),
    exit_process: cfg!(all(feature = "std", not(feature = "no-exit"))),
};

/// Exit status used when the default handler terminates the process.
pub const EXIT_FAILURE: i32 = 1;
