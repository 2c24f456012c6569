//! Fixed-arity numeric vector value types.
//!
//! [`Vec2`] and [`Vec3`] are `Copy` values with the usual `+ - * /`
//! operators (elementwise, or with a scalar), a single textual form
//! (`Vec2[1, 2]`) shared by `Display` and `Debug`, and plain container
//! conversions: `to_sequence()` gives `[x, y(, z)]`, `to_mapping()` gives a
//! fixed record keyed `x`, `y`(, `z`).
//!
//! ```rust
//! use vectors::{Vec2, Vec3};
//!
//! let v: Vec2 = Vec2::new(1.0, 2.0) + Vec2::new(2.0, 2.0);
//! assert_eq!(v.to_text(), "Vec2[3, 4]");
//! assert_eq!(v.length(), 5.0);
//!
//! let w: Vec3 = Vec3::new(1.0, 2.0, 3.0) * 2.0;
//! assert_eq!(w.to_sequence(), [2.0, 4.0, 6.0]);
//! assert_eq!(w.to_mapping().get("z"), Some(6.0));
//!
//! // Operands typed at run time go through the fallible `try_*` forms;
//! // a bare list is not a vector and is rejected.
//! assert!(w.try_add(vec![1.0, 2.0]).is_err());
//! ```

pub mod error;
pub mod numerics;

pub use error::{Result, VectorError};
pub use numerics::types::operand::Operand;
pub use numerics::types::traits::FloatingPoint;
pub use numerics::types::vector2::{Vec2, Vector2, Vector2Fields};
pub use numerics::types::vector3::{Vec3, Vector3, Vector3Fields};
