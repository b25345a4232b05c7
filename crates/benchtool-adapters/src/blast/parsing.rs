//! BLAST output classification

use crate::traits::ToolStatus;
use tracing::trace;

pub const UNSAFE_MARKER: &str = "Error found! The system is unsafe :-(";
pub const SAFE_MARKER: &str = "No error found.  The system is safe :-)";
pub const OUT_OF_MEMORY_MARKER: &str = "Fatal error: out of memory.";
pub const EXCEPTION_MARKER: &str = "Fatal error: exception Sys_error(\"Broken pipe\")";
pub const GREMLINS_MARKER: &str = "Ack! The gremlins again!: Sys_error(\"Broken pipe\")";

/// Exit code BLAST uses for fatal errors
pub const FATAL_EXIT_CODE: i32 = 2;

/// Classify a finished BLAST run from its exit code and combined output.
///
/// Every line is checked; the last line that matches a rule decides the
/// result, `Unknown` when none does. `exit_signal` and `is_timeout` do not
/// take part in the decision.
pub fn classify(
    exit_code: i32,
    _exit_signal: Option<i32>,
    output: &str,
    _is_timeout: bool,
) -> ToolStatus {
    let mut status = ToolStatus::Unknown;
    for line in output.split(|c: char| c == '\n' || c == '\r') {
        if let Some(matched) = classify_line(exit_code, line) {
            trace!("BLAST line {:?} -> {}", line, matched);
            status = matched;
        }
    }
    status
}

/// Status for a single line, first matching rule wins
fn classify_line(exit_code: i32, line: &str) -> Option<ToolStatus> {
    let fatal = exit_code == FATAL_EXIT_CODE;
    if line.starts_with(UNSAFE_MARKER) {
        Some(ToolStatus::Unsafe)
    } else if line.starts_with(SAFE_MARKER) {
        Some(ToolStatus::Safe)
    } else if fatal && line.starts_with(OUT_OF_MEMORY_MARKER) {
        Some(ToolStatus::OutOfMemory)
    } else if fatal && line.starts_with(EXCEPTION_MARKER) {
        Some(ToolStatus::Exception)
    } else if fatal && line.starts_with(GREMLINS_MARKER) {
        Some(ToolStatus::Timeout)
    } else {
        None
    }
}

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    #[kani::proof]
    fn proof_empty_output_is_unknown() {
        let code: i32 = kani::any();
        kani::assert(
            classify(code, None, "", false) == ToolStatus::Unknown,
            "Empty output should be Unknown",
        );
    }

    #[kani::proof]
    fn proof_fatal_rules_need_exit_code_two() {
        let code: i32 = kani::any();
        kani::assume(code != FATAL_EXIT_CODE);
        kani::assert(
            classify_line(code, OUT_OF_MEMORY_MARKER).is_none(),
            "Out of memory requires exit code 2",
        );
        kani::assert(
            classify_line(code, EXCEPTION_MARKER).is_none(),
            "Exception requires exit code 2",
        );
        kani::assert(
            classify_line(code, GREMLINS_MARKER).is_none(),
            "Timeout requires exit code 2",
        );
    }

    #[kani::proof]
    fn proof_verdict_lines_ignore_exit_code() {
        let code: i32 = kani::any();
        kani::assert(
            classify_line(code, UNSAFE_MARKER) == Some(ToolStatus::Unsafe),
            "Unsafe marker matches for any exit code",
        );
        kani::assert(
            classify_line(code, SAFE_MARKER) == Some(ToolStatus::Safe),
            "Safe marker matches for any exit code",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_safe() {
        assert_eq!(classify(0, None, SAFE_MARKER, false), ToolStatus::Safe);
    }

    #[test]
    fn test_parse_unsafe() {
        assert_eq!(classify(0, None, UNSAFE_MARKER, false), ToolStatus::Unsafe);
    }

    #[test]
    fn test_safe_marker_needs_two_spaces() {
        let output = "No error found. The system is safe :-)";
        assert_eq!(classify(0, None, output, false), ToolStatus::Unknown);
    }

    #[test]
    fn test_marker_must_start_the_line() {
        let output = format!("  {}", UNSAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Unknown);
    }

    #[test]
    fn test_marker_prefix_allows_trailing_text() {
        let output = format!("{} (2 paths explored)", SAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Safe);
    }

    #[test]
    fn test_out_of_memory_requires_exit_code_two() {
        assert_eq!(
            classify(2, None, OUT_OF_MEMORY_MARKER, false),
            ToolStatus::OutOfMemory
        );
        assert_eq!(
            classify(0, None, OUT_OF_MEMORY_MARKER, false),
            ToolStatus::Unknown
        );
        assert_eq!(
            classify(1, None, OUT_OF_MEMORY_MARKER, false),
            ToolStatus::Unknown
        );
    }

    #[test]
    fn test_broken_pipe_exception() {
        assert_eq!(
            classify(2, None, EXCEPTION_MARKER, false),
            ToolStatus::Exception
        );
        assert_eq!(classify(0, None, EXCEPTION_MARKER, false), ToolStatus::Unknown);
    }

    #[test]
    fn test_gremlins_means_timeout() {
        assert_eq!(classify(2, None, GREMLINS_MARKER, false), ToolStatus::Timeout);
        assert_eq!(classify(3, None, GREMLINS_MARKER, false), ToolStatus::Unknown);
    }

    #[test]
    fn test_last_match_wins() {
        let output = format!("{}\nchecking more\n{}\n", SAFE_MARKER, UNSAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Unsafe);

        let output = format!("{}\n{}\n", UNSAFE_MARKER, SAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Safe);
    }

    #[test]
    fn test_fatal_error_after_verdict_overrides_it() {
        let output = format!("{}\n{}", SAFE_MARKER, OUT_OF_MEMORY_MARKER);
        assert_eq!(classify(2, None, &output, false), ToolStatus::OutOfMemory);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Safe);
    }

    #[test]
    fn test_non_matching_line_keeps_previous_status() {
        let output = format!("{}\nDone.\n\n", UNSAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Unsafe);
    }

    #[test]
    fn test_crlf_and_bare_cr_line_endings() {
        let output = format!("banner\r\n{}\r\n", SAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Safe);

        let output = format!("progress\r{}", UNSAFE_MARKER);
        assert_eq!(classify(0, None, &output, false), ToolStatus::Unsafe);
    }

    #[test]
    fn test_timeout_flag_and_signal_are_ignored() {
        assert_eq!(classify(0, Some(9), "", true), ToolStatus::Unknown);
        assert_eq!(classify(0, Some(15), SAFE_MARKER, true), ToolStatus::Safe);
    }

    #[test]
    fn test_unrecognized_output_is_unknown() {
        for code in [-1, 0, 1, 2, 137] {
            assert_eq!(
                classify(code, None, "Segmentation fault\nsomething else", false),
                ToolStatus::Unknown
            );
        }
    }
}
