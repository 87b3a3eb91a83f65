use std::fmt::Display;

/// Fail-fast unwrap used by the fatal entry points. The panic message is
/// `"<msg>: <error>"` so each precondition stays distinguishable.
pub trait ExpectMsg<T, E> {
    fn expect_msg(self, msg: &str) -> T;
}

impl<T, E: Display> ExpectMsg<T, E> for Result<T, E> {
    fn expect_msg(self, msg: &str) -> T {
        match self {
            Ok(val) => val,
            Err(err) => panic!("{}: {}", msg, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ExpectMsg;
    use crate::utils::error::OpaqueError;

    #[test]
    fn passes_through_ok() {
        let r: Result<u32, OpaqueError> = Ok(7);
        assert_eq!(r.expect_msg("unused"), 7);
    }

    #[test]
    #[should_panic(expected = "op_name: expects contiguous tensor input")]
    fn prefixes_error_with_context() {
        let r: Result<u32, OpaqueError> = Err(OpaqueError::NotContiguous);
        r.expect_msg("op_name");
    }
}
