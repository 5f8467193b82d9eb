pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts like [`Option::unwrap`], but states that [`None`] can't occur because of an invariant
    /// upheld by the caller, rather than being an unhandled case.
    ///
    /// No panics section is documented: reaching the panic is a bug in this crate, not a misuse by
    /// the user.
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("an invariant guaranteeing Some was broken"),
        }
    }
}
