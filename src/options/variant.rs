//! Feature bundle ("spin") and chip architecture variants.

use std::fmt;

/// Which optional components are bundled into the uberjar.
///
/// Python bundling is not encouraged on ARM, and PMML bundling pulls in
/// AGPL-licensed code.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Spin {
    /// Neither Python nor PMML
    Minimal,
    /// Python support only
    Python,
    /// PMML support only
    Pmml,
    /// Python and PMML
    #[default]
    All,
}

impl Spin {
    pub fn as_str(self) -> &'static str {
        match self {
            Spin::Minimal => "minimal",
            Spin::Python => "python",
            Spin::Pmml => "pmml",
            Spin::All => "all",
        }
    }

    /// Whether the `python` Maven profile is activated.
    pub fn includes_python(self) -> bool {
        matches!(self, Spin::Python | Spin::All)
    }

    /// Whether the `pmml` Maven profile is activated.
    pub fn includes_pmml(self) -> bool {
        matches!(self, Spin::Pmml | Spin::All)
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Chip architecture the native backends are built for.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum Chip {
    #[default]
    Cpu,
    /// CUDA
    Gpu,
    Arm,
}

impl Chip {
    pub fn as_str(self) -> &'static str {
        match self {
            Chip::Cpu => "cpu",
            Chip::Gpu => "gpu",
            Chip::Arm => "arm",
        }
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn spin_profiles() {
        assert!(Spin::All.includes_python() && Spin::All.includes_pmml());
        assert!(Spin::Python.includes_python() && !Spin::Python.includes_pmml());
        assert!(!Spin::Pmml.includes_python() && Spin::Pmml.includes_pmml());
        assert!(!Spin::Minimal.includes_python() && !Spin::Minimal.includes_pmml());
    }

    #[test]
    fn defaults() {
        assert_eq!(Spin::default(), Spin::All);
        assert_eq!(Chip::default(), Chip::Cpu);
    }

    #[test]
    fn clap_names_match_display() {
        for spin in Spin::value_variants() {
            assert_eq!(spin.to_possible_value().unwrap().get_name(), spin.as_str());
        }
        for chip in Chip::value_variants() {
            assert_eq!(chip.to_possible_value().unwrap().get_name(), chip.as_str());
        }
    }
}
