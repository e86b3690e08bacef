pub mod discovery;
pub mod processor;
pub mod renderer;
pub mod writer;
pub mod builder;
