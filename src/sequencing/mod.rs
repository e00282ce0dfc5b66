pub mod division;
pub mod tempo;

pub use division::NoteDivision;
pub use tempo::TempoSync;
