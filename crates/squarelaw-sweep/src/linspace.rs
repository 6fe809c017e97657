//! Linearly spaced sample points.

use std::iter::FusedIterator;

/// `samples` evenly spaced values over `[start, stop]`, both ends included.
///
/// The last value is `stop` exactly rather than the accumulated
/// `start + (n-1)·step`, so the sweep always ends on its nominal endpoint.
/// A single sample yields `start`; zero samples yield nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linspace {
    start: f64,
    stop: f64,
    samples: usize,
}

impl Linspace {
    pub fn new(start: f64, stop: f64, samples: usize) -> Self {
        Self {
            start,
            stop,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples == 0
    }

    /// Spacing between adjacent samples (0 for fewer than two samples).
    pub fn step(&self) -> f64 {
        if self.samples < 2 {
            0.0
        } else {
            (self.stop - self.start) / (self.samples - 1) as f64
        }
    }

    /// Value of sample `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        if index >= self.samples {
            None
        } else if index == self.samples - 1 && self.samples > 1 {
            Some(self.stop)
        } else {
            Some(self.start + index as f64 * self.step())
        }
    }

    /// Iterate the samples. Each call starts again from the first sample.
    pub fn iter(&self) -> LinspaceIter {
        LinspaceIter {
            space: *self,
            front: 0,
            back: self.samples,
        }
    }
}

impl IntoIterator for Linspace {
    type Item = f64;
    type IntoIter = LinspaceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &Linspace {
    type Item = f64;
    type IntoIter = LinspaceIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`Linspace`].
#[derive(Debug, Clone)]
pub struct LinspaceIter {
    space: Linspace,
    front: usize,
    back: usize,
}

impl Iterator for LinspaceIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        let value = self.space.get(self.front);
        self.front += 1;
        value
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinspaceIter {
    fn next_back(&mut self) -> Option<f64> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.space.get(self.back)
    }
}

impl ExactSizeIterator for LinspaceIter {}

impl FusedIterator for LinspaceIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vds_sweep() {
        let space = Linspace::new(0.0, 2.0, 100);
        let values: Vec<f64> = space.iter().collect();

        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[99], 2.0);
        assert!((values[1] - 2.0 / 99.0).abs() < 1e-15);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_restartable() {
        let space = Linspace::new(0.0, 2.0, 100);
        let mut iter = space.iter();
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 98);

        let first: Vec<f64> = space.iter().collect();
        let second: Vec<f64> = space.into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(Linspace::new(1.5, 2.0, 1).iter().collect::<Vec<_>>(), vec![1.5]);
        assert_eq!(Linspace::new(1.5, 2.0, 1).step(), 0.0);
        assert!(Linspace::new(0.0, 2.0, 0).is_empty());
        assert_eq!(Linspace::new(0.0, 2.0, 0).iter().next(), None);
    }

    #[test]
    fn test_two_samples_are_endpoints() {
        let values: Vec<f64> = Linspace::new(-1.0, 1.0, 2).iter().collect();
        assert_eq!(values, vec![-1.0, 1.0]);
    }

    #[test]
    fn test_descending_range() {
        let values: Vec<f64> = Linspace::new(2.0, 0.0, 5).iter().collect();
        assert_eq!(values, vec![2.0, 1.5, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_reverse_iteration() {
        let space = Linspace::new(0.0, 1.0, 5);
        let forward: Vec<f64> = space.iter().collect();
        let mut backward: Vec<f64> = space.iter().rev().collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_get_out_of_range() {
        let space = Linspace::new(0.0, 2.0, 100);
        assert_eq!(space.get(99), Some(2.0));
        assert_eq!(space.get(100), None);
    }
}
