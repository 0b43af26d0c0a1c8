// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Predicate-driven search over slices.
//!
//! Linear scans that return the first (or last) element satisfying a
//! predicate, with a caller-supplied default when nothing qualifies. The
//! iteration order of [`get_first_true_by`] is a strategy hook, not a
//! performance feature.

/// Get the first element for which `predicate` returns `true`, else
/// `default`.
///
/// # Examples
///
/// ```
/// use bedrock::get_first_true;
///
/// assert_eq!(*get_first_true(&[1, 2, 3], &-1, |x| *x > 1), 2);
/// assert_eq!(*get_first_true(&[1, 2, 3], &-1, |x| *x > 5), -1);
/// ```
pub fn get_first_true<'a, T, P>(items: &'a [T], default: &'a T, predicate: P) -> &'a T
where
    P: Fn(&T) -> bool,
{
    get_first_true_by(items, default, predicate, |items| items.iter())
}

/// [`get_first_true`] with a caller-chosen iteration order.
///
/// `order` decides which element counts as "first". [`get_last_true`] is
/// this function with a reversed walk; a caller with stranger needs can
/// supply any walk over the slice.
pub fn get_first_true_by<'a, T, P, I>(
    items: &'a [T],
    default: &'a T,
    predicate: P,
    order: impl Fn(&'a [T]) -> I,
) -> &'a T
where
    P: Fn(&T) -> bool,
    I: Iterator<Item = &'a T>,
{
    order(items).find(|&item| predicate(item)).unwrap_or(default)
}

/// Get the last element for which `predicate` returns `true`, else
/// `default`.
///
/// Defined as [`get_first_true_by`] over the reversed walk.
///
/// ```
/// use bedrock::get_last_true;
///
/// assert_eq!(*get_last_true(&[1, 2, 3], &-1, |_| true), 3);
/// assert_eq!(*get_last_true(&[1, 2, 3], &-1, |_| false), -1);
/// ```
pub fn get_last_true<'a, T, P>(items: &'a [T], default: &'a T, predicate: P) -> &'a T
where
    P: Fn(&T) -> bool,
{
    get_first_true_by(items, default, predicate, |items| items.iter().rev())
}

/// Fallible-predicate form of [`get_first_true`].
///
/// The scan stops at the first predicate error and returns it unwrapped.
///
/// # Errors
///
/// Whatever the predicate raised.
///
/// ```
/// use bedrock::try_get_first_true;
///
/// let ids = ["17", "0x0", "23"];
/// let first_odd = try_get_first_true(&ids, &"none", |s| {
///     Ok::<_, std::num::ParseIntError>(s.parse::<u32>()? % 2 == 1)
/// });
/// assert_eq!(first_odd.unwrap(), &"17");
///
/// let unparsable = try_get_first_true(&ids, &"none", |s| {
///     Ok::<_, std::num::ParseIntError>(s.parse::<u32>()? % 2 == 0)
/// });
/// assert!(unparsable.is_err());
/// ```
pub fn try_get_first_true<'a, T, E, P>(
    items: &'a [T],
    default: &'a T,
    predicate: P,
) -> Result<&'a T, E>
where
    P: Fn(&T) -> Result<bool, E>,
{
    for item in items {
        if predicate(item)? {
            return Ok(item);
        }
    }
    Ok(default)
}

/// Fallible-predicate form of [`get_last_true`].
pub fn try_get_last_true<'a, T, E, P>(
    items: &'a [T],
    default: &'a T,
    predicate: P,
) -> Result<&'a T, E>
where
    P: Fn(&T) -> Result<bool, E>,
{
    for item in items.iter().rev() {
        if predicate(item)? {
            return Ok(item);
        }
    }
    Ok(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_true_returns_first_match() {
        assert_eq!(*get_first_true(&[1, 2, 3], &-1, |_| true), 1);
        assert_eq!(*get_first_true(&[1, 2, 3], &-1, |x| *x > 1), 2);
    }

    #[test]
    fn test_first_true_returns_default_when_no_match() {
        assert_eq!(*get_first_true(&[1, 2, 3], &-1, |_| false), -1);
        assert_eq!(*get_first_true(&[], &-1, |_: &i32| true), -1);
    }

    #[test]
    fn test_last_true_returns_last_match() {
        assert_eq!(*get_last_true(&[1, 2, 3], &-1, |_| true), 3);
        assert_eq!(*get_last_true(&[1, 2, 3], &-1, |x| *x < 3), 2);
    }

    #[test]
    fn test_last_true_returns_default_when_no_match() {
        assert_eq!(*get_last_true(&[1, 2, 3], &-1, |_| false), -1);
        assert_eq!(*get_last_true(&[], &-1, |_: &i32| true), -1);
    }

    #[test]
    fn test_custom_order_provider() {
        // Walk only even positions: 10 and 30 are visible, 20 and 40 are not.
        let items = [10, 20, 30, 40];
        let found = get_first_true_by(&items, &0, |x| *x > 10, |s| s.iter().step_by(2));
        assert_eq!(*found, 30);
    }

    #[test]
    fn test_works_with_non_copy_elements() {
        let names = [String::from("ab"), String::from("abc")];
        let default = String::from("none");
        let found = get_first_true(&names, &default, |n| n.len() > 2);
        assert_eq!(found, "abc");
    }

    #[test]
    fn test_try_first_true_ok_paths() {
        let items = [1, 2, 3];
        let found = try_get_first_true(&items, &-1, |x| Ok::<_, ()>(*x > 1));
        assert_eq!(*found.unwrap(), 2);
        let none = try_get_first_true(&items, &-1, |_| Ok::<_, ()>(false));
        assert_eq!(*none.unwrap(), -1);
    }

    #[test]
    fn test_try_first_true_propagates_predicate_error() {
        let items = [1, 2, 3];
        let res = try_get_first_true(&items, &-1, |x| {
            if *x == 2 {
                Err("boom")
            } else {
                Ok(false)
            }
        });
        assert_eq!(res.unwrap_err(), "boom");
    }

    #[test]
    fn test_try_last_true_scans_in_reverse() {
        let items = [1, 2, 3];
        let found = try_get_last_true(&items, &-1, |x| Ok::<_, ()>(*x < 3));
        assert_eq!(*found.unwrap(), 2);

        // The reverse scan reaches 3 first, so an error on 3 wins.
        let res = try_get_last_true(&items, &-1, |x| {
            if *x == 3 {
                Err("boom")
            } else {
                Ok(true)
            }
        });
        assert_eq!(res.unwrap_err(), "boom");
    }
}
