// src/numerics/types/vector3.rs
// Vector3 generic implementation with default precision f64.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::operand::{Operand, Resolved};
use super::traits::FloatingPoint;
use crate::error::{Result, VectorError};

const EXPECTED: &str = "scalar or Vec3";

/// Vector3 is a simple 3D vector type with template-able numeric type.
#[derive(Copy, Clone, PartialEq)]
pub struct Vector3<T: FloatingPoint = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// Short alias matching the textual form `Vec3[x, y, z]`.
pub type Vec3<T = f64> = Vector3<T>;

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// Build from spherical coordinates: radius `rho`, polar angle `phi`
    /// measured from +z, and azimuth `theta` in the xy plane.
    pub fn polar(rho: T, phi: T, theta: T) -> Self {
        Self::new(
            rho * phi.sin() * theta.cos(),
            rho * phi.sin() * theta.sin(),
            rho * phi.cos(),
        )
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn z(&self) -> T {
        self.z
    }

    /// Apply `f` to every component.
    pub fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combine corresponding components of `self` and `other` with `f`.
    pub fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::new(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z))
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    /// Return the Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// `"Vec3[x, y, z]"`. Same text as `Display` and `Debug`.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Components in field order: `[x, y, z]`.
    pub fn to_sequence(&self) -> [T; 3] {
        [self.x(), self.y(), self.z()]
    }

    /// Named-field record `{x, y, z}`.
    pub fn to_mapping(&self) -> Vector3Fields<T> {
        Vector3Fields {
            x: self.x(),
            y: self.y(),
            z: self.z(),
        }
    }

    /// Elementwise or scalar addition with an operand typed at run time.
    ///
    /// # Errors
    /// [`VectorError::InvalidOperand`] when the operand is neither a scalar
    /// nor a `Vec3`. Bare lists are rejected even with three elements.
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
        match operand.into().resolve::<3>(operation, EXPECTED)? {
            Resolved::Scalar(s) => Ok(self.map(|c| f(c, s))),
            Resolved::Components(c) => Ok(self.zip_map(Self::from(c), f)),
        }
    }
}

impl<T: FloatingPoint> Default for Vector3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vec3[")?;
        fmt::Display::fmt(&self.x(), f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y(), f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z(), f)?;
        f.write_str("]")
    }
}

impl<T: FloatingPoint> fmt::Debug for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Fixed-shape mapping form of a [`Vector3`]: keys `x`, `y`, `z`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct Vector3Fields<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Vector3Fields<T> {
    pub const KEYS: [&'static str; 3] = ["x", "y", "z"];

    pub fn keys(&self) -> [&'static str; 3] {
        Self::KEYS
    }

    pub fn entries(&self) -> [(&'static str, T); 3] {
        [("x", self.x), ("y", self.y), ("z", self.z)]
    }

    pub fn get(&self, key: &str) -> Option<T> {
        match key {
            "x" => Some(self.x),
            "y" => Some(self.y),
            "z" => Some(self.z),
            _ => None,
        }
    }
}

impl<T: FloatingPoint> From<Vector3Fields<T>> for Vector3<T> {
    fn from(fields: Vector3Fields<T>) -> Self {
        Self::new(fields.x, fields.y, fields.z)
    }
}

// Conditional impls for serde

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Vector3<T>
where
    T: FloatingPoint + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

// Implement operators + - * / for Vector3<T> with Vector3<T>

impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a + b)
    }
}

impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a - b)
    }
}

impl<T: FloatingPoint> Mul for Vector3<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a * b)
    }
}

impl<T: FloatingPoint> Div for Vector3<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.zip_map(other, |a, b| a / b)
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl<T: FloatingPoint> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> MulAssign for Vector3<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = *self * other;
    }
}

impl<T: FloatingPoint> DivAssign for Vector3<T> {
    fn div_assign(&mut self, other: Self) {
        *self = *self / other;
    }
}

macro_rules! impl_scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Add<$ty> for Vector3<$ty> {
                type Output = Self;

                fn add(self, rhs: $ty) -> Self {
                    self.map(|c| c + rhs)
                }
            }

            impl Sub<$ty> for Vector3<$ty> {
                type Output = Self;

                fn sub(self, rhs: $ty) -> Self {
                    self.map(|c| c - rhs)
                }
            }

            impl Mul<$ty> for Vector3<$ty> {
                type Output = Self;

                fn mul(self, rhs: $ty) -> Self {
                    self.map(|c| c * rhs)
                }
            }

            impl Div<$ty> for Vector3<$ty> {
                type Output = Self;

                fn div(self, rhs: $ty) -> Self {
                    self.map(|c| c / rhs)
                }
            }

            impl Mul<Vector3<$ty>> for $ty {
                type Output = Vector3<$ty>;

                fn mul(self, rhs: Vector3<$ty>) -> Vector3<$ty> {
                    rhs * self
                }
            }

            impl AddAssign<$ty> for Vector3<$ty> {
                fn add_assign(&mut self, rhs: $ty) {
                    *self = *self + rhs;
                }
            }

            impl SubAssign<$ty> for Vector3<$ty> {
                fn sub_assign(&mut self, rhs: $ty) {
                    *self = *self - rhs;
                }
            }

            impl MulAssign<$ty> for Vector3<$ty> {
                fn mul_assign(&mut self, rhs: $ty) {
                    *self = *self * rhs;
                }
            }

            impl DivAssign<$ty> for Vector3<$ty> {
                fn div_assign(&mut self, rhs: $ty) {
                    *self = *self / rhs;
                }
            }
        )*
    };
}

impl_scalar_ops!(f32, f64);

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector3<T> {
    type Error = VectorError;

    fn try_from(slice: &[T]) -> Result<Self> {
        match slice {
            [x, y, z] => Ok(Self::new(*x, *y, *z)),
            _ => Err(VectorError::rejected(
                "try_from",
                "3 components",
                format!("{} components", slice.len()),
            )),
        }
    }
}

// Reverse conversions: from Vector3<T> into tuples and arrays

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        v.to_sequence()
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        v.to_sequence()
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for Operand<T> {
    fn from(v: Vector3<T>) -> Self {
        Operand::Vector3(v.to_sequence())
    }
}
