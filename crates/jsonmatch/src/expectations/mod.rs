//! Predicates over single JSON values.
//!
//! Every predicate implements [`Expectation`]. Callers rarely construct the literal-based ones
//! directly: [`build`] turns any [`Expected`] node into the matching predicate.
use std::{fmt, sync::Arc};

use serde_json::Value;

use crate::expected::Expected;

mod array_of;
mod builtin;
mod callable;
mod combinators;
mod equals;
mod hash_with_content;
mod in_range;
mod kind_of;
mod pattern;
mod size;

pub use array_of::ArrayOf;
pub use builtin::{Anything, BooleanValue, NegativeNumber, Nothing, PositiveNumber};
pub use callable::SatisfiesCallable;
pub use combinators::{AllOf, AnyOf, NullableOf};
pub use equals::Equals;
pub use hash_with_content::HashWithContent;
pub use in_range::InRange;
pub use kind_of::KindOf;
pub use pattern::MatchesPattern;
pub use size::ArrayWithSize;
pub(crate) use size::{build_size, validate_size_shape};

/// A condition a JSON value either satisfies or not.
///
/// Implement this trait to plug custom checks into an expected shape via
/// [`Expected::Expectation`]. Implementations must not rely on interior mutability: a single
/// expectation may be shared between threads and evaluated concurrently.
pub trait Expectation: Send + Sync + fmt::Debug {
    /// Whether `value` satisfies this expectation.
    fn is_satisfied_by(&self, value: &Value) -> bool;
}

/// Turn an expected node into a predicate.
///
/// Classification order:
///
/// 1. an already built expectation is returned as is;
/// 2. a pattern matches strings containing it;
/// 3. a range accepts numbers within it;
/// 4. an object literal requires the listed fields ([`HashWithContent`]);
/// 5. a callable is invoked with the value;
/// 6. a builtin marker resolves to its shared instance and a type marker to [`KindOf`];
/// 7. anything else is compared for equality.
#[must_use]
pub fn build(expected: &Expected) -> Arc<dyn Expectation> {
    match expected {
        Expected::Expectation(expectation) => Arc::clone(expectation),
        Expected::Pattern(pattern) => Arc::new(MatchesPattern::from(pattern.clone())),
        Expected::Range(range) => Arc::new(InRange::new(range.clone())),
        Expected::Object(fields) => Arc::new(HashWithContent::from_fields(fields.iter().cloned())),
        Expected::Callable(callable) => Arc::new(SatisfiesCallable::from(Arc::clone(callable))),
        Expected::Builtin(builtin) => builtin.shared(),
        Expected::Type(ty) => Arc::new(KindOf::new(*ty)),
        Expected::Null
        | Expected::Bool(_)
        | Expected::Number(_)
        | Expected::String(_)
        | Expected::Array(_) => Arc::new(Equals::new(expected.clone())),
    }
}

/// Build an expectation for every node, flattening one level of array literals.
#[must_use]
pub fn build_many<'a, I>(expected: I) -> Vec<Arc<dyn Expectation>>
where
    I: IntoIterator<Item = &'a Expected>,
{
    let mut expectations = Vec::new();
    for item in expected {
        match item {
            Expected::Array(items) => expectations.extend(items.iter().map(build)),
            _ => expectations.push(build(item)),
        }
    }
    expectations
}
