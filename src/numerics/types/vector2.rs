// src/numerics/types/vector2.rs
// Vector2 generic implementation with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::operand::{Operand, Resolved};
use super::traits::FloatingPoint;
use crate::error::{Result, VectorError};

const EXPECTED: &str = "scalar or Vec2";

/// Vector2 is a 2D vector value type with template-able numeric type.
///
/// Arithmetic never mutates its operands: `a + b` returns a fresh vector.
/// The `*Assign` operators are the explicit in-place forms.
#[derive(Copy, Clone, PartialEq)]
pub struct Vector2<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
}

/// Short alias matching the textual form `Vec2[x, y]`.
pub type Vec2<T = f64> = Vector2<T>;

impl<T: FloatingPoint> Vector2<T> {
    /// Construct a new Vector2
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    /// Build from polar coordinates: radius `r` and angle `theta` in radians.
    pub fn polar(r: T, theta: T) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Apply `f` to every component.
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y))
    }

    /// Combine corresponding components of `self` and `other` with `f`.
    pub fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Squared Euclidean length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Euclidean length
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// `"Vec2[x, y]"`. Same text as `Display` and `Debug`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Components in field order: `[x, y]`.
    pub fn to_sequence(&self) -> [T; 2] {
        [self.x(), self.y()]
    }

    /// Named-field record `{x, y}`.
    pub fn to_mapping(&self) -> Vector2Fields<T> {
        Vector2Fields {
            x: self.x(),
            y: self.y(),
        }
    }

    /// Elementwise or scalar addition with an operand typed at run time.
    ///
    /// # Errors
    /// [`VectorError::InvalidOperand`] when the operand is neither a scalar
    /// nor a `Vec2`. Bare lists are rejected even with two elements.
    pub fn try_add(self, operand: impl Into<Operand<T>>) -> Result<Self> {
        self.try_apply(operand, "add", |a, b| a + b)
    }

    /// Run-time typed counterpart of `-`. Fails like [`Self::try_add`].
    pub fn try_sub(self, operand: impl Into<Operand<T>>) -> Result<Self> {
        self.try_apply(operand, "sub", |a, b| a - b)
    }

    /// Run-time typed counterpart of `*`. Fails like [`Self::try_add`].
    pub fn try_mul(self, operand: impl Into<Operand<T>>) -> Result<Self> {
        self.try_apply(operand, "mul", |a, b| a * b)
    }

    /// Run-time typed counterpart of `/`. Fails like [`Self::try_add`].
    /// A zero divisor produces non-finite components, not an error.
    pub fn try_div(self, operand: impl Into<Operand<T>>) -> Result<Self> {
        self.try_apply(operand, "div", |a, b| a / b)
    }

    fn try_apply(
        self,
        operand: impl Into<Operand<T>>,
        operation: &'static str,
        f: impl Fn(T, T) -> T,
    ) -> Result<Self> {
        match operand.into().resolve::<2>(operation, EXPECTED)? {
            Resolved::Scalar(s) => Ok(self.map(|c| f(c, s))),
            Resolved::Components(c) => Ok(self.zip_map(Self::from(c), f)),
        }
    }
}

impl<T: FloatingPoint> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vec2[")?;
        fmt::Display::fmt(&self.x(), f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y(), f)?;
        f.write_str("]")
    }
}

// Inspection uses the display form; there is no second representation.
impl<T: FloatingPoint> fmt::Debug for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Fixed-shape mapping form of a [`Vector2`]: keys `x` then `y`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Vector2Fields<T> {
    pub x: T,
    pub y: T,
}

impl<T: Copy> Vector2Fields<T> {
    pub const KEYS: [&'static str; 2] = ["x", "y"];

    pub fn keys(&self) -> [&'static str; 2] {
        Self::KEYS
    }

    /// `(name, value)` pairs in field order.
    pub fn entries(&self) -> [(&'static str, T); 2] {
        [("x", self.x), ("y", self.y)]
    }

    pub fn get(&self, key: &str) -> Option<T> {
        match key {
            "x" => Some(self.x),
            "y" => Some(self.y),
            _ => None,
        }
    }
}

impl<T: FloatingPoint> From<Vector2Fields<T>> for Vector2<T> {
    fn from(fields: Vector2Fields<T>) -> Self {
        Self::new(fields.x, fields.y)
    }
}

// Serialized as the plain sequence [x, y]

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Vector2<T>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

// Operators: vector with vector, elementwise

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }
}

impl<T: FloatingPoint> Mul for Vector2<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }
}

impl<T: FloatingPoint> Div for Vector2<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> MulAssign for Vector2<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: FloatingPoint> DivAssign for Vector2<T> {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

// Operators: vector with scalar, one impl set per concrete float

macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Add<$ty> for Vector2<$ty> {
                type Output = Self;

                fn add(self, rhs: $ty) -> Self {
                    self.map(|c| c + rhs)
                }
            }

            impl Sub<$ty> for Vector2<$ty> {
                type Output = Self;

                fn sub(self, rhs: $ty) -> Self {
                    self.map(|c| c - rhs)
                }
            }

            impl Mul<$ty> for Vector2<$ty> {
                type Output = Self;

                fn mul(self, rhs: $ty) -> Self {
                    self.map(|c| c * rhs)
                }
            }

            impl Div<$ty> for Vector2<$ty> {
                type Output = Self;

                fn div(self, rhs: $ty) -> Self {
                    self.map(|c| c / rhs)
                }
            }

            impl Mul<Vector2<$ty>> for $ty {
                type Output = Vector2<$ty>;

                fn mul(self, rhs: Vector2<$ty>) -> Vector2<$ty> {
                    rhs * self
                }
            }

            impl AddAssign<$ty> for Vector2<$ty> {
                fn add_assign(&mut self, rhs: $ty) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$ty> for Vector2<$ty> {
                fn sub_assign(&mut self, rhs: $ty) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$ty> for Vector2<$ty> {
                fn mul_assign(&mut self, rhs: $ty) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$ty> for Vector2<$ty> {
                fn div_assign(&mut self, rhs: $ty) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

// Conversions between Vector2<T> and tuples / arrays

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<&(T, T)> for Vector2<T> {
    fn from(tuple: &(T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<&[T; 2]> for Vector2<T> {
    fn from(array: &[T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector2<T> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self> {
        match slice {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(VectorError::rejected(
                "try_from",
                "2 components",
                format!("{} components", slice.len()),
            )),
        }
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        v.to_sequence()
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for (T, T) {
    fn from(v: &Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<&Vector2<T>> for [T; 2] {
    fn from(v: &Vector2<T>) -> Self {
        v.to_sequence()
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for Operand<T> {
    fn from(v: Vector2<T>) -> Self {
        Operand::Vector2(v.to_sequence())
    }
}
