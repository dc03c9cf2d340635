use std::env;

use libbloggy::{
    cli::{Command, run},
    config::registry,
    logger,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logger::init_cli_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    print!("{}", run(command, registry())?);

    Ok(())
}
