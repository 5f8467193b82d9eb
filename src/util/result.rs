use std::error::Error;

pub(crate) trait ResultExtension<T> {
    /// Unwraps an [`Ok`], or panics using the [`Display`](std::fmt::Display) text of the error as
    /// the message. Used where the std API of a collection panics, such as indexing.
    ///
    /// # Panics
    /// Panics on [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Error> ResultExtension<T> for Result<T, E> {
    #[track_caller]
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
