use crate::report::{NanReporter, SilentReporter, SlogReporter};
use num_traits::Float;
use std::borrow::Cow;

/// How NaN entries are treated by [`filter_nan_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterOptions {
    /// `false` rejects the whole sequence on the first NaN, `true` strips every NaN.
    pub remove_nan: bool,
    /// Report the position of each NaN met during the scan.
    pub verbose: bool,
}

impl FilterOptions {
    pub fn strict() -> Self {
        FilterOptions {
            remove_nan: false,
            verbose: false,
        }
    }

    pub fn lenient() -> Self {
        FilterOptions {
            remove_nan: true,
            verbose: false,
        }
    }

    pub fn verbose(self, verbose: bool) -> Self {
        FilterOptions { verbose, ..self }
    }
}

/// Drops or rejects NaN entries of `values`.
///
/// Returns `None` when a NaN is present and `remove_nan` is `false`.
/// A sequence without NaN comes back as `Cow::Borrowed` of the very same slice,
/// otherwise the retained values are returned in their original order.
/// With `verbose`, each NaN position is logged through [`crate::logging::DEFAULT`].
pub fn filter_nan<T: Float>(values: &[T], remove_nan: bool, verbose: bool) -> Option<Cow<'_, [T]>> {
    let options = FilterOptions {
        remove_nan,
        verbose,
    };
    if verbose {
        filter_nan_with(values, options, &SlogReporter::default())
    } else {
        filter_nan_with(values, options, &SilentReporter)
    }
}

/// Same as [`filter_nan`], reporting NaN positions to `reporter` instead of the default logger.
pub fn filter_nan_with<'a, T, R>(
    values: &'a [T],
    options: FilterOptions,
    reporter: &R,
) -> Option<Cow<'a, [T]>>
where
    T: Float,
    R: NanReporter + ?Sized,
{
    // Nothing is allocated until the first NaN shows up.
    let mut kept: Option<Vec<T>> = None;

    for (position, &value) in values.iter().enumerate() {
        if value.is_nan() {
            if options.verbose {
                reporter.nan_found(position);
            }
            if !options.remove_nan {
                return None;
            }
            kept.get_or_insert_with(|| {
                let mut head = Vec::with_capacity(values.len() - 1);
                head.extend_from_slice(&values[..position]);
                head
            });
        } else if let Some(kept) = kept.as_mut() {
            kept.push(value);
        }
    }

    match kept {
        None => Some(Cow::Borrowed(values)),
        Some(mut kept) => {
            kept.shrink_to_fit();
            Some(Cow::Owned(kept))
        }
    }
}
