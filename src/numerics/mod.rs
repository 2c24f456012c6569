// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod operand;
    pub mod traits;
    pub mod vector2;
    pub mod vector3;
}
