// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod config;
pub mod error;
pub mod prelude;

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod vector;
    pub mod traits;
    pub mod fixed;
    pub mod point;
}
