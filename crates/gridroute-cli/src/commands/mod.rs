// Module exports for CLI commands
//
// Each module handles a specific command. main.rs parses arguments and
// dispatches to these handlers, keeping the entry point focused on coordination.

pub mod route;
