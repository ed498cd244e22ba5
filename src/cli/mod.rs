use anyhow::Result;

pub use args::Arguments;

pub mod args;
mod exit_code;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<u8> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(0);
    };

    let result = run::run(args)?;
    report::print(&result);

    Ok(exit_code::exit_code_from_result(&result))
}
