/// Returns true if `n` is prime, using trial division by 2, 3 and then numbers of the form 6k ± 1
/// up to the square root of `n`.
///
/// # Examples
/// ```
/// # use basic_collections::collections::hash::table::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(1));
/// assert!(!is_prime(25));
/// ```
pub const fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;
    // i <= n / i avoids overflowing i * i.
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }

    true
}

/// Returns the smallest prime number which is greater than or equal to `n`. The result is at least
/// 2, so `next_prime(0)` and `next_prime(1)` are both 2.
///
/// # Panics
/// Panics if there is no prime in `n..=usize::MAX`.
///
/// # Examples
/// ```
/// # use basic_collections::collections::hash::table::next_prime;
/// assert_eq!(next_prime(0), 2);
/// assert_eq!(next_prime(4), 5);
/// assert_eq!(next_prime(11), 11);
/// assert_eq!(next_prime(22), 23);
/// ```
pub const fn next_prime(n: usize) -> usize {
    if n <= 2 {
        return 2;
    }

    // Every prime after 2 is odd.
    let mut candidate = n | 1;
    while !is_prime(candidate) {
        candidate = match candidate.checked_add(2) {
            Some(next) => next,
            None => panic!("Capacity overflow!"),
        };
    }

    candidate
}
