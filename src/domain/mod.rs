// Domain layer: report model and the adder port. No dependencies beyond std.

pub mod model;
pub mod ports;
