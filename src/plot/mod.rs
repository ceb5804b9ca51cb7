/// Chart rendering: one comparison chart per physical quantity.
pub mod comparison;
