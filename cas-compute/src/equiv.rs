//! Symbolic-equivalence checks by exact evaluation at random points.
//!
//! A [`Sampler`] decides questions like "is this expression always zero?" by substituting random
//! integers for every variable and evaluating the expression exactly, as a [`Rational`]. The
//! expressions that appear in a linear-equation step are rational functions of their variables,
//! so an expression that evaluates to zero at several random points is zero everywhere, except
//! with vanishing probability.
//!
//! Points where the expression divides by zero are skipped and redrawn.
//!
//! ```
//! use cas_compute::{equiv::Sampler, tree::Node};
//!
//! let sampler = Sampler::default();
//! let zero = Node::implicit_mul(vec![Node::num("0"), Node::var("x")]);
//! assert!(sampler.is_zero(&zero));
//!
//! let one = Node::div(Node::var("x"), Node::var("x"));
//! assert!(sampler.is_one(&one));
//! ```

use crate::{primitive::{rational, rational_from_str}, tree::Node};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rug::Rational;
use std::{cmp::Ordering, collections::{BTreeSet, HashMap}};

/// An assignment of values to variables.
pub type Point<'a> = HashMap<&'a str, Rational>;

/// The reasons an expression cannot be evaluated at a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The expression divides by zero at this point.
    DivisionByZero,

    /// A variable in the expression has no value at this point.
    Unbound(String),

    /// A [`Node::Number`] does not contain a decimal number.
    Malformed(String),

    /// An equation was found inside the expression.
    Equation,
}

/// Evaluates the expression exactly at the given point.
pub fn evaluate(node: &Node, point: &Point) -> Result<Rational, EvalError> {
    match node {
        Node::Number(value) => rational_from_str(value)
            .ok_or_else(|| EvalError::Malformed(value.clone())),
        Node::Variable(name) => point.get(name.as_str())
            .cloned()
            .ok_or_else(|| EvalError::Unbound(name.clone())),
        Node::Neg { arg, .. } => Ok(-evaluate(arg, point)?),
        Node::Add(terms) => terms.iter().try_fold(Rational::new(), |sum, term| -> Result<_, EvalError> {
            Ok(sum + evaluate(term, point)?)
        }),
        Node::Mul { args, .. } => args.iter().try_fold(rational(1), |product, factor| -> Result<_, EvalError> {
            Ok(product * evaluate(factor, point)?)
        }),
        Node::Div(numerator, denominator) => {
            let numerator = evaluate(numerator, point)?;
            let denominator = evaluate(denominator, point)?;
            if denominator.cmp0() == Ordering::Equal {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(numerator / denominator)
            }
        },
        Node::Equation(..) => Err(EvalError::Equation),
    }
}

/// Options for a [`Sampler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleOptions {
    /// The number of points to evaluate an expression at. Expressions with no variables are
    /// evaluated once, regardless of this option.
    pub samples: usize,

    /// Variables are assigned integers in the range `[-bound, bound]`.
    pub bound: i64,

    /// The seed of the random number generator. The same seed always produces the same points,
    /// so the checks are deterministic.
    pub seed: u64,

    /// The number of times to redraw a point that divides by zero before giving up on it.
    pub max_attempts: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            samples: 8,
            bound: 1000,
            seed: 0x5eed,
            max_attempts: 16,
        }
    }
}

impl SampleOptions {
    /// Returns the options with every field moved into its usable range: at least one sample and
    /// one attempt per sample, and a bound of at least `1`. A negative bound is replaced by its
    /// magnitude.
    pub fn clamped(self) -> Self {
        let bound = i64::try_from(self.bound.unsigned_abs()).unwrap_or(i64::MAX);
        Self {
            samples: self.samples.max(1),
            bound: bound.max(1),
            seed: self.seed,
            max_attempts: self.max_attempts.max(1),
        }
    }
}

/// A builder for [`SampleOptions`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptionsBuilder(SampleOptions);

impl SampleOptionsBuilder {
    /// Creates a new builder with the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of points to evaluate an expression at. At least one point is always
    /// used.
    pub fn samples(mut self, samples: usize) -> Self {
        self.0.samples = samples;
        self
    }

    /// Sets the magnitude bound of the sampled integers. At least `1` is always used.
    pub fn bound(mut self, bound: i64) -> Self {
        self.0.bound = bound;
        self
    }

    /// Sets the seed of the random number generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = seed;
        self
    }

    /// Sets the number of redraws allowed for a point that divides by zero. At least one attempt
    /// is always made.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.0.max_attempts = max_attempts;
        self
    }

    /// Builds the [`SampleOptions`], clamping every field into its usable range.
    pub fn build(self) -> SampleOptions {
        self.0.clamped()
    }
}

impl From<SampleOptionsBuilder> for SampleOptions {
    fn from(builder: SampleOptionsBuilder) -> Self {
        builder.build()
    }
}

/// Decides symbolic-equivalence questions by exact evaluation at seeded random points.
///
/// See the [module-level documentation](self) for more information.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    options: SampleOptions,
}

impl Sampler {
    /// Creates a sampler with the given options. Out-of-range fields are clamped (see
    /// [`SampleOptions::clamped`]).
    pub fn new(options: impl Into<SampleOptions>) -> Self {
        Self { options: options.into().clamped() }
    }

    /// Returns the options of this sampler.
    pub fn options(&self) -> &SampleOptions {
        &self.options
    }

    /// Evaluates `f` at every sample point for the given variables, stopping early if `f` returns
    /// [`Some`].
    ///
    /// `f` receives the point, and returns [`Err`] with [`EvalError::DivisionByZero`] to have the
    /// point redrawn. Any other error stops sampling.
    ///
    /// Returns the value returned by `f` if it stopped early, otherwise the number of points at
    /// which `f` was evaluated successfully.
    fn sample<'a, T>(
        &self,
        variables: &BTreeSet<&'a str>,
        mut f: impl FnMut(&Point<'a>) -> Result<Option<T>, EvalError>,
    ) -> Result<usize, T> {
        let samples = if variables.is_empty() { 1 } else { self.options.samples };
        let mut rng = StdRng::seed_from_u64(self.options.seed);
        let mut valid = 0;

        for _ in 0..samples {
            for _ in 0..self.options.max_attempts {
                let point = variables.iter()
                    .map(|&name| {
                        let value = rng.gen_range(-self.options.bound..=self.options.bound);
                        (name, rational(value))
                    })
                    .collect::<Point>();

                match f(&point) {
                    Ok(Some(early)) => return Err(early),
                    Ok(None) => {
                        valid += 1;
                        break;
                    },
                    Err(EvalError::DivisionByZero) => continue,
                    Err(_) => return Ok(0),
                }
            }
        }

        Ok(valid)
    }

    /// Returns true if the expression evaluates to a value satisfying `predicate` at every sample
    /// point. If the expression cannot be evaluated at any point, returns false.
    fn always(&self, node: &Node, predicate: impl Fn(&Rational) -> bool) -> bool {
        let result = self.sample(&node.variables(), |point| {
            let value = evaluate(node, point)?;
            Ok((!predicate(&value)).then_some(()))
        });

        matches!(result, Ok(valid) if valid > 0)
    }

    /// Returns true if the expression is equal to zero for every value of its variables.
    pub fn is_zero(&self, node: &Node) -> bool {
        self.always(node, |value| value.cmp0() == Ordering::Equal)
    }

    /// Returns true if the expression is equal to one for every value of its variables.
    pub fn is_one(&self, node: &Node) -> bool {
        self.always(node, |value| *value == 1)
    }

    /// Returns true if the two equations have the same solutions.
    ///
    /// Writing each equation as `f = 0` (with `f = lhs - rhs`), the equations have the same
    /// solutions when one `f` is a nonzero constant multiple of the other. This is checked by
    /// requiring the ratio of the two at every sample point to be the same nonzero constant, which
    /// rejects equations that were multiplied or divided by a variable.
    ///
    /// Returns false if either node is not a [`Node::Equation`].
    pub fn same_solutions(&self, a: &Node, b: &Node) -> bool {
        let (Some((a_lhs, a_rhs)), Some((b_lhs, b_rhs))) = (a.as_equation(), b.as_equation()) else {
            return false;
        };

        let mut variables = a.variables();
        variables.extend(b.variables());

        let mut ratio: Option<Rational> = None;
        let result = self.sample(&variables, |point| {
            let f = evaluate(a_lhs, point)? - evaluate(a_rhs, point)?;
            let g = evaluate(b_lhs, point)? - evaluate(b_rhs, point)?;

            if f.cmp0() == Ordering::Equal {
                // a root of `f` must also be a root of `g`
                return Ok((g.cmp0() != Ordering::Equal).then_some(()));
            }

            let current = g / f;
            if current.cmp0() == Ordering::Equal {
                return Ok(Some(()));
            }

            if let Some(first) = &ratio {
                return Ok((*first != current).then_some(()));
            }
            ratio = Some(current);
            Ok(None)
        });

        matches!(result, Ok(valid) if valid > 0)
    }
}
