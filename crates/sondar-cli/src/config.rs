//! CLI configuration

use serde::{Deserialize, Serialize};
use sondar::{Extractor, OpaquePolicy, ProbeConfig};
use std::time::Duration;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Per-probe timeout in milliseconds
    pub timeout_ms: u64,
    /// Probes in flight at once within a category
    pub jobs: usize,
    /// Cap on extracted hyperlinks
    pub link_limit: usize,
    /// Count non-introspectable responses as failures
    pub strict_opaque: bool,
    /// Skip the meta-tag audit
    pub skip_meta: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Normal,
            color: ColorChoice::Auto,
            timeout_ms: 10_000,
            jobs: 1,
            link_limit: sondar::DEFAULT_LINK_LIMIT,
            strict_opaque: false,
            skip_meta: false,
        }
    }
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Set the per-probe timeout in milliseconds
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the in-flight probe bound
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Set the hyperlink cap
    #[must_use]
    pub const fn with_link_limit(mut self, limit: usize) -> Self {
        self.link_limit = limit;
        self
    }

    /// Set strict classification of non-introspectable responses
    #[must_use]
    pub const fn with_strict_opaque(mut self, strict: bool) -> Self {
        self.strict_opaque = strict;
        self
    }

    /// Skip the meta-tag audit
    #[must_use]
    pub const fn with_skip_meta(mut self, skip: bool) -> Self {
        self.skip_meta = skip;
        self
    }

    /// Probe configuration derived from these settings
    #[must_use]
    pub fn probe_config(&self) -> ProbeConfig {
        let policy = if self.strict_opaque {
            OpaquePolicy::Strict
        } else {
            OpaquePolicy::Lenient
        };
        ProbeConfig::new()
            .with_timeout(Duration::from_millis(self.timeout_ms))
            .with_opaque_policy(policy)
            .with_concurrency(self.jobs)
    }

    /// Extractor derived from these settings
    #[must_use]
    pub fn extractor(&self) -> Extractor {
        Extractor::new().with_link_limit(self.link_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod verbosity_tests {
        use super::*;

        #[test]
        fn test_default_verbosity() {
            assert_eq!(Verbosity::default(), Verbosity::Normal);
        }

        #[test]
        fn test_is_quiet() {
            assert!(Verbosity::Quiet.is_quiet());
            assert!(!Verbosity::Normal.is_quiet());
        }

        #[test]
        fn test_is_verbose() {
            assert!(!Verbosity::Normal.is_verbose());
            assert!(Verbosity::Verbose.is_verbose());
            assert!(Verbosity::Debug.is_verbose());
        }
    }

    mod color_choice_tests {
        use super::*;

        #[test]
        fn test_default_color() {
            assert_eq!(ColorChoice::default(), ColorChoice::Auto);
        }

        #[test]
        fn test_should_color_always() {
            assert!(ColorChoice::Always.should_color());
        }

        #[test]
        fn test_should_color_never() {
            assert!(!ColorChoice::Never.should_color());
        }
    }

    mod cli_config_tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let config = CliConfig::default();
            assert_eq!(config.timeout_ms, 10_000);
            assert_eq!(config.jobs, 1);
            assert_eq!(config.link_limit, 20);
            assert!(!config.strict_opaque);
            assert!(!config.skip_meta);
        }

        #[test]
        fn test_chained_builders() {
            let config = CliConfig::new()
                .with_verbosity(Verbosity::Verbose)
                .with_color(ColorChoice::Never)
                .with_timeout_ms(500)
                .with_jobs(4)
                .with_link_limit(5)
                .with_strict_opaque(true)
                .with_skip_meta(true);
            assert_eq!(config.verbosity, Verbosity::Verbose);
            assert_eq!(config.color, ColorChoice::Never);
            assert_eq!(config.timeout_ms, 500);
            assert_eq!(config.jobs, 4);
            assert_eq!(config.link_limit, 5);
            assert!(config.strict_opaque);
            assert!(config.skip_meta);
        }

        #[test]
        fn test_jobs_clamped() {
            let config = CliConfig::new().with_jobs(0);
            assert_eq!(config.jobs, 1);
        }

        #[test]
        fn test_probe_config_derivation() {
            let config = CliConfig::new()
                .with_timeout_ms(250)
                .with_jobs(3)
                .with_strict_opaque(true);
            let probe = config.probe_config();
            assert_eq!(probe.timeout, Duration::from_millis(250));
            assert_eq!(probe.concurrency, 3);
            assert_eq!(probe.opaque_policy, OpaquePolicy::Strict);
        }

        #[test]
        fn test_serialize_roundtrip() {
            let config = CliConfig::new().with_strict_opaque(true);
            let json = serde_json::to_string(&config).unwrap();
            assert!(json.contains("strict_opaque"));
            let back: CliConfig = serde_json::from_str(&json).unwrap();
            assert!(back.strict_opaque);
        }
    }
}
