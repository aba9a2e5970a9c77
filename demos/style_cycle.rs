// Copyright 2025 Cowboy AI, LLC.

//! Style cycle demo
//!
//! Builds a color/linestyle cycle, multiplies it by markers and prints the
//! per-series styles a plotting layer would receive.

use cim_cycler::{cycler, cycler_from_keywords, CyclerResult};

fn main() -> CyclerResult<()> {
    let lines = cycler_from_keywords(vec![
        ("color", vec!["tab:blue", "tab:orange", "tab:green"]),
        ("linestyle", vec!["-", "--", ":"]),
    ])?;
    let styles = (&lines * &cycler("marker", ["o", "s"]))?;

    println!("cycle: {styles}");
    println!("{} styles over keys {:?}", styles.len(), styles.keys());

    for (series, style) in styles.cycle().take(8).enumerate() {
        let rendered: Vec<String> = style.iter().map(|(k, v)| format!("{k}={v}")).collect();
        println!("series {series}: {}", rendered.join(", "));
    }

    println!("\nby key:");
    for (key, values) in styles.by_key() {
        println!("  {key}: {values:?}");
    }

    println!("\n{}", styles.slice(..2)?.html_table());
    Ok(())
}
