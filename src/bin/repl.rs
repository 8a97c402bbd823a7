use clap::{Parser, ValueEnum};
use dice_table::{
    simulate, simulate_with, DieCount, MarkdownStringifier, Outcome, Page, Request, SimError,
    SimpleStringifier, Stringify,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// Fixed-width text table
    Plain,
    /// Markdown table
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "dice-table", version)]
#[command(about = "Roll 1-3 six-sided dice and tabulate the results")]
struct Args {
    /// Number of dice per roll (1-3)
    #[arg(long, short, default_value_t = 2)]
    dice: u32,

    /// Number of rolls to simulate
    #[arg(long, short, default_value_t = 10)]
    rolls: usize,

    /// Seed the generator for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// Output style
    #[arg(long, value_enum, default_value_t = Style::Plain)]
    style: Style,

    /// Keep reading "<dice> <rolls>" requests after the first run
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut page = Page::new();
    let die_count = DieCount::new(args.dice)?;
    let outcome = run(&args, die_count, args.rolls)?;
    show(&mut page, &outcome, args.style);

    if args.interactive {
        let stdin = io::stdin();
        prompt()?;
        for line in stdin.lock().lines() {
            let line = line?;
            if !line.trim().is_empty() {
                match line.parse::<Request>() {
                    Ok(req) => match run(&args, req.die_count, req.roll_count) {
                        Ok(outcome) => show(&mut page, &outcome, args.style),
                        Err(why) => eprintln!("Error: {}", why),
                    },
                    Err(why) => eprintln!("Error: {}", why),
                }
            }
            prompt()?;
        }
    }
    Ok(())
}

fn run(args: &Args, die_count: DieCount, rolls: usize) -> Result<Outcome, SimError> {
    match args.seed {
        Some(seed) => simulate_with(die_count, rolls, ChaCha8Rng::seed_from_u64(seed)),
        None => simulate(die_count, rolls),
    }
}

fn show(page: &mut Page, outcome: &Outcome, style: Style) {
    page.render(&outcome.session, outcome.stats.as_ref());
    let text = match style {
        Style::Plain => SimpleStringifier::new().stringify(page),
        Style::Markdown => MarkdownStringifier::new().stringify(page),
    };
    println!("{}", text);
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}
