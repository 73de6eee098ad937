//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `lifedeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Why: keep a tiny CLI probe to validate core crate wiring independently
    // from the dashboard UI runtime setup.
    println!("lifedeck_core ping={}", lifedeck_core::ping());
    println!("lifedeck_core version={}", lifedeck_core::core_version());
}
