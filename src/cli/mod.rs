mod args;
mod context;
pub mod prompts;

pub use args::Cli;
pub use context::Context;

use passmint::Result;

/// Run one generation request described by `args`.
pub fn run(args: Cli) -> Result<()> {
    Context::new(args).run()
}
