//! Maven command line assembly.
//!
//! Token order matters: the uberjar build activates profiles based on the
//! order in which `-P` and `-D` flags appear.

use crate::options::{BuildOptions, Chip};
use std::fmt;
use std::path::MAIN_SEPARATOR;

/// File name of the Maven wrapper script in the source tree.
pub const WRAPPER_NAME: &str = "mvnw";

/// Flags passed to every build, in order.
pub const BASE_FLAGS: [&str; 4] = [
    "-Puberjar,tensorflow",
    "clean",
    "install",
    "-Dmaven.test.skip=true",
];

/// An external build tool invocation as an ordered list of tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    /// Assembles the Maven invocation for `options`.
    ///
    /// ```
    /// use konduit_build_jar::builder::BuildCommand;
    /// use konduit_build_jar::options::{BuildOptionsBuilder, Chip, Platform, Spin};
    ///
    /// let options = BuildOptionsBuilder::new()
    ///     .os(Platform::LinuxX86_64)
    ///     .spin(Spin::Python)
    ///     .chip(Chip::Gpu)
    ///     .build()
    ///     .unwrap();
    /// let command = BuildCommand::from_options(&options);
    /// assert_eq!(
    ///     command.args(),
    ///     [
    ///         "-Puberjar,tensorflow", "clean", "install", "-Dmaven.test.skip=true",
    ///         "-Djavacpp.platform=linux-x86_64", "-Dchip=gpu", "-Pgpu,intel",
    ///         "-Ppython", "-Dspin.version=python",
    ///     ]
    /// );
    /// ```
    pub fn from_options(options: &BuildOptions) -> Self {
        let program = format!(
            "{}{}{}",
            options.source().display(),
            MAIN_SEPARATOR,
            WRAPPER_NAME
        );

        let mut args: Vec<String> = BASE_FLAGS.iter().map(|s| s.to_string()).collect();
        args.push(format!("-Djavacpp.platform={}", options.os()));
        args.push(format!("-Dchip={}", options.chip()));

        if options.chip() == Chip::Gpu {
            args.push("-Pgpu,intel".to_string());
        }

        let spin = options.spin();
        if spin.includes_python() {
            args.push("-Ppython".to_string());
        }
        if spin.includes_pmml() {
            args.push("-Ppmml".to_string());
        }

        args.push(format!("-Dspin.version={}", spin));

        Self { program, args }
    }

    /// The wrapper token, `<source><separator>mvnw`.
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Program followed by arguments.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str))
    }
}

impl fmt::Display for BuildCommand {
    /// Space-joined tokens, as printed by `--show_build_command`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.tokens().collect();
        f.write_str(&joined.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{BuildOptionsBuilder, Platform, Spin};
    use clap::ValueEnum;

    fn command(os: Platform, spin: Spin, chip: Chip) -> BuildCommand {
        let options = BuildOptionsBuilder::new()
            .os(os)
            .spin(spin)
            .chip(chip)
            .source("/repo")
            .build()
            .unwrap();
        BuildCommand::from_options(&options)
    }

    fn position(tokens: &[&str], token: &str) -> usize {
        let found: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == token)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(found.len(), 1, "{token} should appear exactly once in {tokens:?}");
        found[0]
    }

    #[test]
    fn every_combination_keeps_define_order() {
        for &os in Platform::value_variants() {
            for &spin in Spin::value_variants() {
                for &chip in Chip::value_variants() {
                    let cmd = command(os, spin, chip);
                    let tokens: Vec<&str> = cmd.tokens().collect();

                    assert_eq!(&tokens[1..5], &BASE_FLAGS);
                    let platform = position(&tokens, &format!("-Djavacpp.platform={os}"));
                    let chip_define = position(&tokens, &format!("-Dchip={chip}"));
                    let spin_define = position(&tokens, &format!("-Dspin.version={spin}"));

                    assert_eq!(platform, 5);
                    assert_eq!(chip_define, 6);
                    assert_eq!(spin_define, tokens.len() - 1);
                }
            }
        }
    }

    #[test]
    fn gpu_profile_only_for_gpu_chip() {
        for &chip in Chip::value_variants() {
            let cmd = command(Platform::LinuxX86_64, Spin::Minimal, chip);
            let has_gpu = cmd.args().iter().any(|a| a == "-Pgpu,intel");
            assert_eq!(has_gpu, chip == Chip::Gpu, "chip {chip}");
        }
    }

    #[test]
    fn spin_selects_profiles() {
        let cases = [
            (Spin::All, true, true),
            (Spin::Python, true, false),
            (Spin::Pmml, false, true),
            (Spin::Minimal, false, false),
        ];
        for (spin, python, pmml) in cases {
            let cmd = command(Platform::WindowsX86_64, spin, Chip::Cpu);
            assert_eq!(cmd.args().iter().any(|a| a == "-Ppython"), python, "{spin}");
            assert_eq!(cmd.args().iter().any(|a| a == "-Ppmml"), pmml, "{spin}");
        }
    }

    #[test]
    fn all_profiles_in_order() {
        let cmd = command(Platform::LinuxX86_64, Spin::All, Chip::Gpu);
        assert_eq!(
            &cmd.args()[6..],
            ["-Pgpu,intel", "-Ppython", "-Ppmml", "-Dspin.version=all"]
        );
    }

    #[test]
    fn program_is_wrapper_under_source() {
        let cmd = command(Platform::LinuxX86_64, Spin::All, Chip::Cpu);
        assert_eq!(cmd.program(), format!("/repo{MAIN_SEPARATOR}mvnw"));
    }

    #[test]
    fn display_joins_with_spaces() {
        let cmd = command(Platform::LinuxArmhf, Spin::Minimal, Chip::Arm);
        assert_eq!(
            cmd.to_string(),
            format!(
                "/repo{MAIN_SEPARATOR}mvnw -Puberjar,tensorflow clean install -Dmaven.test.skip=true \
                 -Djavacpp.platform=linux-armhf -Dchip=arm -Dspin.version=minimal"
            )
        );
    }
}
