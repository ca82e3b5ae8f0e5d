// Generation pipeline: keyword extraction, candidate parsing, fit scoring,
// rendering, orchestration. Every stage is a pure function; the CLI layer
// owns all I/O.

pub mod candidate;
pub mod fit_scoring;
pub mod generator;
pub mod keywords;
pub mod renderer;
