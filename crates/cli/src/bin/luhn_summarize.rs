use std::process::ExitCode;

fn main() -> ExitCode {
    luhn_cli::main_entry()
}
