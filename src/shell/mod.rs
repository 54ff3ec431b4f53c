//! Process execution for lane steps.

pub mod command;

pub use command::{
    execute_streaming_args, CommandOptions, CommandResult, OutputCallback, OutputLine,
};
