pub mod elements;
pub mod kepler;
pub mod propagator;

#[cfg(test)]
mod proptest_orbits;
