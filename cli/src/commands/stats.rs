//! Stats command implementation.

use clap::Parser;

use super::read_input;

/// Stats command arguments.
#[derive(Parser)]
pub struct StatsCommand {
    /// Text to inspect ("-" reads stdin)
    #[arg(short, long)]
    pub input: String,

    /// Print the counts as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

use akshar_normalizer::char_stats;
use anyhow::Result as AnyhowResult;

pub fn run(cmd: StatsCommand) -> AnyhowResult<()> {
    let text = read_input(cmd.input)?;
    let stats = char_stats(&text);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    for (f, count) in stats.iter().filter(|&(_, count)| count > 0) {
        println!("  {:<26} U+{:04X}  {}", f.name(), f.as_char() as u32, count);
    }
    println!("Total: {}", stats.total());

    Ok(())
}
