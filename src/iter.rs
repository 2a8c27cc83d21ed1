use core::iter::FusedIterator;

type StdOption<T> = core::option::Option<T>;

/// Iterator over the zero or one values held by an [`Option`].
///
/// The iterator is single-use: once its value has been produced every
/// subsequent call to [`Iterator::next`] reports completion.
///
/// [`Option`]: crate::Option
#[derive(Debug, Clone)]
pub struct OptionIter<T> {
    value: StdOption<T>,
}

impl<T> OptionIter<T> {
    /// Construct a new option iterator.
    #[inline]
    pub(crate) fn new(value: StdOption<T>) -> Self {
        Self { value }
    }
}

impl<T> Iterator for OptionIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> StdOption<Self::Item> {
        self.value.take()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> StdOption<Self::Item> {
        let value = self.value.take()?;

        if n == 0 {
            return Some(value);
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let len = usize::from(self.value.is_some());
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for OptionIter<T> {
    #[inline]
    fn next_back(&mut self) -> StdOption<Self::Item> {
        self.value.take()
    }
}

impl<T> ExactSizeIterator for OptionIter<T> {}

impl<T> FusedIterator for OptionIter<T> {}

#[cfg(test)]
mod tests {
    use super::OptionIter;

    #[test]
    fn test_single_use() {
        let mut it = OptionIter::new(Some(1));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.len(), 0);
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn test_empty() {
        let mut it = OptionIter::<u32>::new(None);
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_nth() {
        assert_eq!(OptionIter::new(Some(1)).nth(0), Some(1));

        let mut it = OptionIter::new(Some(1));
        assert_eq!(it.nth(1), None);
        assert_eq!(it.next(), None);
    }
}
