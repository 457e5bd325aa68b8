/*!
   Assertion helpers that surface violated invariants as [`Error`]
   values instead of panicking, so that teardown still runs.
*/

use core::fmt::Debug;

use crate::error::Error;

pub fn assert_eq<T: Eq + Debug>(message: &str, left: &T, right: &T) -> Result<(), Error> {
    if left == right {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expected {:?} to equal {:?}: {}",
            left, right, message
        )))
    }
}

pub fn assert_not_eq<T: Eq + Debug>(message: &str, left: &T, right: &T) -> Result<(), Error> {
    if left != right {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expected {:?} to differ from {:?}: {}",
            left, right, message
        )))
    }
}

pub fn assert_gt<T: Ord + Debug>(message: &str, left: &T, right: &T) -> Result<(), Error> {
    if left > right {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expected {:?} to be greater than {:?}: {}",
            left, right, message
        )))
    }
}

pub fn assert_non_empty<T: Debug>(message: &str, items: &[T]) -> Result<(), Error> {
    if !items.is_empty() {
        Ok(())
    } else {
        Err(Error::assertion(format!(
            "expected at least one entry: {}",
            message
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_assertions() {
        assert!(assert_eq("same", &1, &1).is_ok());
        assert!(assert_eq("different", &1, &2).is_err());
        assert!(assert_not_eq("different", &1, &2).is_ok());
        assert!(assert_not_eq("same", &1, &1).is_err());
    }

    #[test]
    fn ordering_and_emptiness() {
        assert!(assert_gt("greater", &2, &1).is_ok());
        assert!(assert_gt("equal", &1, &1).is_err());
        assert!(assert_non_empty("has entries", &[1]).is_ok());
        assert!(assert_non_empty::<u32>("empty", &[]).is_err());
    }
}
