//! Small shared helpers.

/// Unsafe array access macro that skips bounds checking.
///
/// Indices must be proved in range by the caller; every use in this crate
/// indexes a fixed-size table with a value already reduced to the table's
/// bounds.
#[macro_export]
macro_rules! uget {
    ($arr:expr; $i:expr $(,)?) => {{
        #[allow(unused_unsafe)]
        #[allow(clippy::macro_metavars_in_unsafe)]
        unsafe {{ ($arr).get_unchecked($i) }}
    }};
    ($arr:expr; $i:expr, $($rest:expr),+ $(,)?) => {{
        let __p = {{
            #[allow(unused_unsafe)]
            #[allow(clippy::macro_metavars_in_unsafe)]
            unsafe {{ ($arr).get_unchecked($i) }}
        }};
        $crate::uget!(&*__p; $($rest),+)
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_uget_single_index() {
        let arr = [10, 20, 30];
        assert_eq!(*uget!(arr; 1), 20);
    }

    #[test]
    fn test_uget_nested_index() {
        let arr = [[1, 2], [3, 4]];
        assert_eq!(*uget!(arr; 1, 0), 3);
        assert_eq!(*uget!(arr; 0, 1), 2);
    }
}
