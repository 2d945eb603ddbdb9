// Domain layer: test cases and verdicts. No I/O here.

pub mod model;
