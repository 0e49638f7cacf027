pub mod analyzer;
pub mod content;
pub mod explorer;
pub mod pipeline;
pub mod scheduler;
pub mod seeds;
pub mod sink;
pub mod startup;
pub mod traits;

#[cfg(test)]
pub mod testing;
