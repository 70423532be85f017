pub mod plan;

pub use plan::print_plan;
