#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod constants;
pub mod math;
pub mod types;

/// Evaluates the condition and returns early with the given error when it does not hold.
#[macro_export]
macro_rules! ensure {
    ($condition:expr, $error:expr $(,)?) => {{
        if !$condition {
            return Err($error.into());
        }
    }};
}
