pub mod generators;
pub mod pipeline;
pub mod renderer;
pub mod templates;

mod shell_runner;

pub use shell_runner::ShellRunner;
