pub mod atmosphere;
pub mod blast;
pub mod crater;
pub mod scenario;
pub mod seismic;
pub mod simulator;
pub mod thermal;
