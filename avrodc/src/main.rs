//! `avrodc` binary.

use avrodc::cli::CommandLineInterface;

fn main() -> anyhow::Result<()> {
    let command_line_interface = CommandLineInterface::load();
    command_line_interface.init_logging();
    command_line_interface.run()
}
