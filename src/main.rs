use anyhow::anyhow;
use dxlc::args::{Args, Command, LogLevel};
use simple_logger::SimpleLogger;

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    match args.command {
        Command::Dump(dump) => {
            init_logger(dump.log)?;
            dxlc::batch::dump(&dump.path, dump.ast, dump.symbols)
        }

        Command::Check(check) => {
            init_logger(check.log)?;
            dxlc::batch::check(&check.path)
        }
    }
}

fn init_logger(LogLevel(level): LogLevel) -> anyhow::Result<()> {
    SimpleLogger::new()
        .with_level(level)
        .init()
        .map_err(|e| anyhow!("unable to install the logger: {e}"))
}
