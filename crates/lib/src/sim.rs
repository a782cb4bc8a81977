//! A cycle-accurate instruction simulator.
//!
//! Instructions take a fixed number of cycles to complete and only modify
//! the machine state once their final cycle has been observed. The observer
//! passed to [Cpu::run] therefore always sees the state as it was *during*
//! a cycle.

/// An instruction which can be executed by a [Cpu] operating on state `S`.
pub trait Op<S> {
    /// Number of cycles the instruction takes to complete. Must be at least
    /// one.
    fn cycles(&self) -> u32;

    /// Apply the effect of the instruction once it completes.
    fn apply(&self, state: &mut S);
}

/// A processor which executes a sequence of [Op] instructions.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// struct Add(i32);
///
/// impl Op<i32> for Add {
///     fn cycles(&self) -> u32 {
///         2
///     }
///
///     fn apply(&self, x: &mut i32) {
///         *x += self.0;
///     }
/// }
///
/// let mut cpu = Cpu::new(1);
/// let mut seen = Vec::new();
///
/// cpu.run(&[Add(3), Add(-5)], |cycle, x| seen.push((cycle, *x)));
///
/// assert_eq!(seen, [(1, 1), (2, 1), (3, 4), (4, 4)]);
/// assert_eq!(cpu.cycle(), 4);
/// assert_eq!(*cpu.state(), -1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Cpu<S> {
    state: S,
    cycle: u32,
}

impl<S> Cpu<S> {
    /// Construct a processor with the given initial state. No cycles have
    /// been executed yet.
    #[inline]
    pub fn new(state: S) -> Self {
        Self { state, cycle: 0 }
    }

    /// Number of cycles executed so far.
    #[inline]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[inline]
    pub fn into_state(self) -> S {
        self.state
    }

    /// Execute a single instruction, calling `observe` with the 1-based
    /// cycle number once for every cycle it occupies.
    pub fn step<O, F>(&mut self, op: &O, mut observe: F)
    where
        O: ?Sized + Op<S>,
        F: FnMut(u32, &S),
    {
        for _ in 0..op.cycles() {
            self.cycle += 1;
            observe(self.cycle, &self.state);
        }

        op.apply(&mut self.state);
    }

    /// Execute every instruction in order.
    ///
    /// Running an empty program produces no observations.
    pub fn run<'a, I, O, F>(&mut self, ops: I, mut observe: F)
    where
        I: IntoIterator<Item = &'a O>,
        O: 'a + ?Sized + Op<S>,
        F: FnMut(u32, &S),
    {
        for op in ops {
            self.step(op, &mut observe);
        }
    }
}
