//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{SubBank, plan_sub_banks, single_input};
pub use processor::{process_bank, process_tag};
