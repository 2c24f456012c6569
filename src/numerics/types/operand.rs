// src/numerics/types/operand.rs
// Run-time typed operand accepted by the `try_*` vector operations.

use super::traits::FloatingPoint;
use crate::error::{Result, VectorError};

/// An arithmetic operand whose type is only known at run time.
///
/// Hosts that dispatch on dynamic values (scripting bridges, parsed input)
/// hand one of these to `Vector2::try_add` and friends. A vector converts
/// into the variant tagged with its own kind, so a receiver accepts only a
/// scalar or a vector of its own type. Untyped lists become `Sequence`,
/// which no `try_*` operation accepts.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand<T: FloatingPoint> {
    /// A single number applied to every component.
    Scalar(T),
    /// Components of a `Vec2`, in field order.
    Vector2([T; 2]),
    /// Components of a `Vec3`, in field order.
    Vector3([T; 3]),
    /// A bare list of numbers with no vector type attached.
    Sequence(Vec<T>),
}

/// Operand after it has been checked against a vector of arity `N`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Resolved<T, const N: usize> {
    Scalar(T),
    Components([T; N]),
}

impl<T: FloatingPoint> Operand<T> {
    /// Number of components carried, or `None` for a scalar.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Vector2(_) => Some(2),
            Operand::Vector3(_) => Some(3),
            Operand::Sequence(values) => Some(values.len()),
        }
    }

    /// Short human description used in error messages.
    pub fn describe(&self) -> String {
        match self {
            Operand::Scalar(_) => "scalar".to_string(),
            Operand::Vector2(_) => "Vec2".to_string(),
            Operand::Vector3(_) => "Vec3".to_string(),
            Operand::Sequence(values) => format!("sequence of {} components", values.len()),
        }
    }

    /// Check the operand against the vector kind of arity `N` for `operation`.
    ///
    /// Only a scalar or the vector variant of the same arity passes.
    pub(crate) fn resolve<const N: usize>(
        self,
        operation: &'static str,
        expected: &'static str,
    ) -> Result<Resolved<T, N>> {
        let components = match &self {
            Operand::Scalar(value) => return Ok(Resolved::Scalar(*value)),
            Operand::Vector2(values) => <[T; N]>::try_from(&values[..]).ok(),
            Operand::Vector3(values) => <[T; N]>::try_from(&values[..]).ok(),
            Operand::Sequence(_) => None,
        };
        match components {
            Some(components) => Ok(Resolved::Components(components)),
            None => Err(VectorError::rejected(operation, expected, self.describe())),
        }
    }
}

macro_rules! impl_scalar_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand<$ty> {
                fn from(value: $ty) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_operand!(f32, f64);

impl<T: FloatingPoint> From<Vec<T>> for Operand<T> {
    fn from(values: Vec<T>) -> Self {
        Operand::Sequence(values)
    }
}

impl<T: FloatingPoint> From<&[T]> for Operand<T> {
    fn from(values: &[T]) -> Self {
        Operand::Sequence(values.to_vec())
    }
}

impl<T: FloatingPoint, const N: usize> From<[T; N]> for Operand<T> {
    fn from(values: [T; N]) -> Self {
        Operand::Sequence(values.to_vec())
    }
}
