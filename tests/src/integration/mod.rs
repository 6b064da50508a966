//! Service ⇄ dashboard integration flows.

pub mod end_to_end;
