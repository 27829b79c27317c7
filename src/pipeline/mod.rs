//! Pipeline orchestration for assessments.
//!
//! Shared load → assess → report logic used by the CLI command handlers.

mod load;
mod output;
mod report_stage;

pub use load::{load_answer_sheet, load_answers, load_catalogue, read_input, LoadedAnswers};
pub use output::{should_use_color, write_output, OutputTarget};
pub use report_stage::{output_report, render_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success: no configured gate tripped
    pub const SUCCESS: i32 = 0;
    /// Overall score is below `--min-score`
    pub const BELOW_THRESHOLD: i32 = 1;
    /// Critical questions answered non-compliant with `--fail-on-critical`
    pub const CRITICAL_GAPS: i32 = 2;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::BELOW_THRESHOLD, 1);
        assert_eq!(exit_codes::CRITICAL_GAPS, 2);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
