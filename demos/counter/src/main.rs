//! Line-driven demo of the bounded counter: `+` / `-` to step, `q` to
//! quit. The counter loops inside [0, 10].

use std::io::{BufRead, Write};

use anyhow::Result;
use statebox_hooks::{Counter, CounterOptions};

fn main() -> Result<()> {
    env_logger::init();

    let count = Counter::new(
        0,
        CounterOptions {
            lower_limit: Some(0),
            upper_limit: Some(10),
            looping: true,
            ..CounterOptions::default()
        },
    )?;

    let _guard = count.watch(|v| println!("count = {v}"));

    println!("count = {}", count.value());
    print!("> ");
    std::io::stdout().flush()?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "+" => count.increase(),
            "-" => count.decrease(),
            "q" => break,
            "" => {}
            other => log::warn!("unrecognized input: {other:?}"),
        }
        print!("> ");
        std::io::stdout().flush()?;
    }

    Ok(())
}
