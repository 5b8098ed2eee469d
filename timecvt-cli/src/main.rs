mod cli;
use cli::Cli;

use std::io::{BufWriter, Write};
use std::process::exit;

#[macro_use]
extern crate log;

use env_logger::{Builder, Target};

use timecvt::prelude::render;

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let resolved = cli.time_input().resolve()?;
    let adjusted = cli.offsets().apply(resolved);

    debug!("resolved {} ({})", adjusted, adjusted.time_scale);

    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    render(
        &mut writer,
        adjusted,
        cli.week_of_year(),
        cli.output_format().map(|s| s.as_str()),
    )?;

    writer.flush()?;
    Ok(())
}

pub fn main() {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    // bad flags (and help requests) are a no-op, not a failure
    let cli = match Cli::new() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            exit(0);
        },
    };

    if let Err(e) = run(&cli) {
        error!("{}", e);
        exit(1);
    }
}
