/// Consistency check for caller-contract bugs in the surrounding dispatch
/// layer. Always on, and worded apart from input validation errors.
macro_rules! internal_assert {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            panic!("internal assert failed: {}", format_args!($($arg)+));
        }
    };
}

pub(crate) use internal_assert;
