pub mod coverage;
pub mod diagnosis;
pub mod gate;
pub mod plan;
pub mod spectrum;
pub mod symptom;
