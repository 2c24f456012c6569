// src/numerics/types/traits.rs
// FloatingPoint: the numeric primitive every vector component is built on.

use core::fmt::{Debug, Display};

/// FloatingPoint is the scalar type stored in each vector component.
///
/// It supplies the four arithmetic primitives the vectors forward to, the
/// constants needed by the constructors, and the few transcendental
/// functions used by the extended math (`length`, `polar`).
///
/// Note: division follows IEEE-754, so dividing by zero yields an infinite
/// or NaN value instead of an error.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f32::sqrt(self) }
    fn sin(self) -> Self { f32::sin(self) }
    fn cos(self) -> Self { f32::cos(self) }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn sqrt(self) -> Self { f64::sqrt(self) }
    fn sin(self) -> Self { f64::sin(self) }
    fn cos(self) -> Self { f64::cos(self) }
}
