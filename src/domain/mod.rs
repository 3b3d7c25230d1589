// Domain layer: Thai lexicon, validated value types and the spelling port.
// No external dependencies beyond std/serde.

pub mod lexicon;
pub mod model;
pub mod ports;
