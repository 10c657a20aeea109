mod assembler_state;
mod itinerary_assembler;

pub use assembler_state::{AssemblerState, VisitOutcome};
pub use itinerary_assembler::{assemble_itinerary, AssemblerContext};
