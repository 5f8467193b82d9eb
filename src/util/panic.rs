/// Runs a block and fails the test unless it panicked. An optional literal becomes the failure
/// message.
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($body:block $(, $msg:literal)?) => {{
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| $body));
        assert!(outcome.is_err() $(, $msg)?);
        log::debug!("expected panic caught at {}:{}", file!(), line!());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
