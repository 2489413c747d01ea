//! Validate command.

use std::path::Path;

use tracing::info;

use crate::cli::output::{self, Mark};
use crate::core::validation::{EnvironmentValidator, ValidationReport, ValidationRules};
use crate::error::{EnvError, Error, Result};

/// Validate `env_file` and print the report.
///
/// Fails with `EnvError::NotFound` for a missing file and
/// `Error::ValidationFailed` for an invalid one, so the process exits
/// non-zero.
pub fn execute(env_file: &Path, rules: ValidationRules) -> Result<()> {
    info!(path = %env_file.display(), "validating env file");

    let report = EnvironmentValidator::new(rules).validate(env_file)?;
    print_report(&report, env_file);

    if report.is_valid() {
        Ok(())
    } else if !report.file_exists {
        // Reported once, by the caller, with a hint to generate one.
        Err(EnvError::NotFound(env_file.display().to_string()).into())
    } else {
        let problems = report.missing_required.len() + report.empty_values.len();
        Err(Error::ValidationFailed(format!(
            "{} required secret{} missing or empty",
            problems,
            if problems == 1 { "" } else { "s" }
        )))
    }
}

/// Print a validation report.
pub fn print_report(report: &ValidationReport, env_file: &Path) {
    output::section("Environment Validation");

    if !report.file_exists {
        output::rule();
        return;
    }

    output::success(&format!("{} file exists", output::path(env_file.display())));

    output::findings(Mark::Fail, "Missing required secrets:", &report.missing_required);
    output::findings(Mark::Warn, "Empty required secrets:", &report.empty_values);
    output::findings(Mark::Warn, "Weak secrets detected:", &report.weak_secrets);
    if !report.weak_secrets.is_empty() {
        output::hint(&format!("run {}", output::cmd("envseal rotate")));
    }
    output::findings(Mark::Note, "Optional secrets not set:", &report.unset_optional);

    if report.is_valid() {
        output::blank();
        output::success("All validations passed!");
    }

    output::rule();
}
