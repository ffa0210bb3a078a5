use crate::{Error, Linkage};
use std::f64::consts::TAU;

/// Evenly spaced angles.
///
/// Cloning restarts the sequence from the current position.
#[derive(Clone, Debug, PartialEq)]
pub struct Linspace {
    start: f64,
    step: f64,
    last: f64,
    n: usize,
    i: usize,
}

impl Iterator for Linspace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.i >= self.n {
            return None;
        }
        let i = self.i;
        self.i += 1;
        // The last sample lands on the end exactly
        Some(if i + 1 == self.n { self.last } else { self.start + i as f64 * self.step })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.n - self.i;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

/// `n` angles from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Linspace {
    let step = if n > 1 { (end - start) / (n - 1) as f64 } else { 0. };
    let last = if n > 1 { end } else { start };
    Linspace { start, step, last, n, i: 0 }
}

/// `n` angles over a full revolution from `start`, the end excluded.
pub fn revolution(start: f64, n: usize) -> Linspace {
    let step = if n > 0 { TAU / n as f64 } else { 0. };
    let last = start + n.saturating_sub(1) as f64 * step;
    Linspace { start, step, last, n, i: 0 }
}

/// Crank angles of a constant-speed driver at the given times.
#[derive(Clone, Debug)]
pub struct Timed<I> {
    theta0: f64,
    omega: f64,
    times: I,
}

impl<I: Iterator<Item = f64>> Iterator for Timed<I> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.times.next().map(|t| self.theta0 + self.omega * t)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.times.size_hint()
    }
}

impl<I: ExactSizeIterator<Item = f64>> ExactSizeIterator for Timed<I> {}

/// Lazy states over a sequence of crank angles.
///
/// Each sample is solved on its own, so the output only depends on the
/// angles and the mechanism. The sweep is restartable by cloning it before
/// consumption.
pub struct Sweep<'a, L, I> {
    linkage: &'a L,
    angles: I,
    omega: Option<f64>,
}

impl<L, I: Clone> Clone for Sweep<'_, L, I> {
    fn clone(&self) -> Self {
        Self { linkage: self.linkage, angles: self.angles.clone(), omega: self.omega }
    }
}

impl<'a, L, I> Sweep<'a, L, I>
where
    L: Linkage,
    I: Iterator<Item = f64>,
{
    /// Create a sweep. The velocities are solved if `omega` is provided.
    pub fn new<A>(linkage: &'a L, angles: A, omega: Option<f64>) -> Self
    where
        A: IntoIterator<IntoIter = I>,
    {
        Self { linkage, angles: angles.into_iter(), omega }
    }
}

impl<'a, L, T> Sweep<'a, L, Timed<T>>
where
    L: Linkage,
    T: Iterator<Item = f64>,
{
    /// Sweep a constant-speed driver, `θ(t) = θ0 + ω·t`, with velocities.
    pub fn timed<A>(linkage: &'a L, theta0: f64, omega: f64, times: A) -> Self
    where
        A: IntoIterator<IntoIter = T>,
    {
        let angles = Timed { theta0, omega, times: times.into_iter() };
        Self { linkage, angles, omega: Some(omega) }
    }
}

impl<L, I> Iterator for Sweep<'_, L, I>
where
    L: Linkage,
    I: Iterator<Item = f64>,
{
    type Item = L::State;

    fn next(&mut self) -> Option<Self::Item> {
        let theta = self.angles.next()?;
        Some(self.linkage.state(theta, self.omega))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.angles.size_hint()
    }
}

impl<L, I> ExactSizeIterator for Sweep<'_, L, I>
where
    L: Linkage,
    I: ExactSizeIterator<Item = f64>,
{
}

/// Collected samples over a crank angle range, for playback.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory<S> {
    start: f64,
    end: f64,
    states: Vec<S>,
}

impl<S> Trajectory<S> {
    /// Solve `n` samples from `start` to `end` (inclusive).
    pub fn new<L>(
        linkage: &L,
        start: f64,
        end: f64,
        n: usize,
        omega: Option<f64>,
    ) -> Result<Self, Error>
    where
        L: Linkage<State = S>,
    {
        if n == 0 {
            return Err(Error::EmptySweep);
        }
        let states = Sweep::new(linkage, linspace(start, end, n), omega).collect();
        Ok(Self { start, end, states })
    }

    /// Index of the sample at or just before `theta`, clamped to the range.
    pub fn index_of(&self, theta: f64) -> usize {
        let last = self.states.len() - 1;
        let span = self.end - self.start;
        if last == 0 || span == 0. {
            return 0;
        }
        let f = (theta - self.start) / span * last as f64;
        if f.is_nan() || f <= 0. {
            0
        } else {
            (f as usize).min(last)
        }
    }

    /// The sample at `theta`.
    pub fn at(&self, theta: f64) -> &S {
        &self.states[self.index_of(theta)]
    }

    /// All samples.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Angle range `[start, end]`.
    pub fn range(&self) -> [f64; 2] {
        [self.start, self.end]
    }

    /// Number of samples, never zero.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Return true if there is no sample, which never holds for a built
    /// trajectory.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Take the samples.
    pub fn into_states(self) -> Vec<S> {
        self.states
    }
}
