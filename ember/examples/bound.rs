//! Bound-handler demo: methods of one receiver, plus an idle hook.
//!
//! Each digit entered is dispatched to a method on `Tally`, which prints its
//! field. After every drain pass the idle hook re-prompts. Anything other
//! than 0, 1 or 2 stops the loop.
//!
//! ```text
//! cargo run -p ember --example bound --features macros
//! ```

use ember::{DispatchTable, EventDispatcher, EventKind, Message};
use std::{
    io::{self, BufRead, Write},
    thread,
};

#[derive(Clone, Copy, Debug, Message, EventKind)]
enum Digit {
    Zero,
    One,
    Two,
}

#[derive(Debug)]
struct Tally {
    zero: u32,
    one: u32,
    two: u32,
    seen: u32,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            zero: 0,
            one: 1,
            two: 2,
            seen: 0,
        }
    }
}

impl Tally {
    fn zero(&mut self) {
        self.seen += 1;
        print!("{}", self.zero);
    }

    fn one(&mut self) {
        self.seen += 1;
        print!("{}", self.one);
    }

    fn two(&mut self) {
        self.seen += 1;
        print!("{}", self.two);
    }

    fn finish(&mut self) {
        print!("\nEnter an integer 0-2: ");
        // The idle hook returns nothing; a failed flush only delays the
        // prompt until the next newline.
        if let Err(err) = io::stdout().flush() {
            eprintln!("prompt: {err}");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let table = DispatchTable::<Digit, fn(&mut Tally)>::new([
        Tally::zero as fn(&mut Tally),
        Tally::one,
        Tally::two,
    ])?;
    let dispatcher = EventDispatcher::<Digit>::builder()
        .name("bound-demo")
        .capacity(64)
        .build()?;
    let mut tally = Tally::default();

    let outcome = thread::scope(|scope| {
        let consumer =
            scope.spawn(|| dispatcher.run(table.bind(&mut tally).with_idle(Tally::finish)));

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

    match outcome {
        Ok(stats) => {
            stats?;
            println!("\n{} events handled", tally.seen);
            Ok(())
        }
        Err(_) => Err("consumer thread panicked".into()),
    }
}
