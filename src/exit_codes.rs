//! Exit code constants for the promptcast CLI.
//!
//! - 0: Success (every prompt published, or checked)
//! - 1: User error (bad args, invalid settings, setup failure)
//! - 2: One or more prompts failed at some stage

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid settings, or the run could not start.
pub const USER_ERROR: i32 = 1;

/// At least one prompt failed to load, render, generate, write, or upload.
pub const PROMPT_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, PROMPT_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
        assert_ne!(PROMPT_FAILURE, 0);
    }
}
