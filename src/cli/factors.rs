//! Factors command - print the emission factor table

use anyhow::Result;
use console::style;
use ecostep::factors::{SOURCES, TABLE};

/// Run the factors command
pub fn run() -> Result<()> {
    println!("\n{}", style("Emission factors").bold());
    println!("{}", style("──────────────────────────────────────────────────").dim());

    let mut group = "";
    for row in TABLE {
        if row.group != group {
            group = row.group;
            println!("{}", style(group).bold());
        }
        println!("  {:<22} {:>9} {}", row.name, row.value, style(row.unit).dim());
    }

    println!("\n{}", style("Sources").bold());
    for source in SOURCES {
        println!("  - {}", source);
    }
    Ok(())
}
