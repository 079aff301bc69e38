//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `loopdeck_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use loopdeck_core::{Card, Deck};

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // Flutter/FFI runtime setup.
    println!("loopdeck_core ping={}", loopdeck_core::ping());
    println!("loopdeck_core version={}", loopdeck_core::core_version());

    let cards = [
        Card::new("demo-1", "Profile", "Datos", "#13d6b2").with_route("Profile"),
        Card::new("demo-2", "Route", "Rutas", "#810dee").with_route("Route"),
    ];
    let deck = Deck::build(&cards);
    println!(
        "loopdeck_core deck slots={} real={}",
        deck.len(),
        deck.real_count()
    );
}
