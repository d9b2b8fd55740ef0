//! Echo demo: free-function handlers driven from stdin.
//!
//! Enter 0, 1 or 2 to emit the matching event; the consumer thread prints it
//! back. Anything else stops the loop.
//!
//! ```text
//! cargo run -p ember --example echo
//! ```

use ember::{DispatchTable, EventDispatcher, EventKind, Message};
use std::{
    io::{self, BufRead, Write},
    thread,
};

#[derive(Clone, Copy, Debug)]
enum Digit {
    Zero,
    One,
    Two,
}

impl Message for Digit {}

impl EventKind for Digit {
    const COUNT: usize = 3;

    fn ordinal(self) -> usize {
        self as usize
    }

    fn from_ordinal(ordinal: usize) -> Option<Self> {
        [Digit::Zero, Digit::One, Digit::Two].get(ordinal).copied()
    }
}

fn prompt() -> io::Result<()> {
    print!("Enter an integer 0-2: ");
    io::stdout().flush()
}

fn on_digit(digit: Digit) {
    println!("{}", digit.ordinal());
    // Handlers return nothing; a failed flush only delays the prompt until
    // the next newline.
    if let Err(err) = prompt() {
        eprintln!("prompt: {err}");
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = DispatchTable::<Digit, _>::from_fn(|digit| move || on_digit(digit));
    let dispatcher = EventDispatcher::<Digit>::new(64)?;

    prompt()?;
    let stats = thread::scope(|scope| {
        let consumer = scope.spawn(|| dispatcher.run(&table));

        for line in io::stdin().lock().lines() {
            let event = line
                .ok()
                .and_then(|line| line.trim().parse::<usize>().ok())
                .and_then(Digit::from_ordinal);
            match event {
                Some(digit) => dispatcher.emit(digit),
                None => break,
            }
        }
        dispatcher.stop();

        consumer.join()
    });

    match stats {
        Ok(stats) => {
            let stats = stats?;
            println!();
            println!("dispatched {} events in {} passes", stats.dispatched, stats.passes);
            Ok(())
        }
        Err(_) => Err("consumer thread panicked".into()),
    }
}
