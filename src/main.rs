use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rangekit::{FenwickTree, Gcd, Max, Min, SegmentTree, Sum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rangekit", about = "Drive range-query structures from a command script")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a segment tree and run `query L R` / `set I V` commands (0-indexed).
    Segment {
        /// Initial sequence, comma-separated (e.g. `1,3,5,7,9,11`).
        #[arg(long, value_delimiter = ',')]
        values: Vec<String>,
        /// Combine operator.
        #[arg(long, value_enum, default_value_t = Operator::Sum)]
        op: Operator,
        /// Command script (one command per line); stdin when omitted.
        script: Option<PathBuf>,
    },
    /// Build a Fenwick tree and run `prefix P` / `sum L R` / `add P D` commands (1-indexed).
    Fenwick {
        /// Initial sequence, comma-separated.
        #[arg(long, value_delimiter = ',')]
        values: Vec<String>,
        /// Command script (one command per line); stdin when omitted.
        script: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Operator {
    Sum,
    Min,
    Max,
    /// Unsigned values only.
    Gcd,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Segment { values, op, script } => run_segment(values, op, script)?,
        Commands::Fenwick { values, script } => run_fenwick(values, script)?,
    }

    Ok(())
}

fn run_segment(values: Vec<String>, op: Operator, script: Option<PathBuf>) -> Result<()> {
    let commands = read_script(script)?;
    match op {
        Operator::Sum => {
            let mut tree = SegmentTree::<Sum<i64>>::build(&parse_values(&values)?)
                .context("failed to build segment tree")?;
            drive_segment(&mut tree, &commands, |t, l, r| t.query(l, r), |t, i, v| t.update(i, v))
        }
        Operator::Min => {
            let mut tree = SegmentTree::<Min<i64>>::build(&parse_values(&values)?)
                .context("failed to build segment tree")?;
            drive_segment(&mut tree, &commands, |t, l, r| t.query(l, r), |t, i, v| t.update(i, v))
        }
        Operator::Max => {
            let mut tree = SegmentTree::<Max<i64>>::build(&parse_values(&values)?)
                .context("failed to build segment tree")?;
            drive_segment(&mut tree, &commands, |t, l, r| t.query(l, r), |t, i, v| t.update(i, v))
        }
        Operator::Gcd => {
            let mut tree = SegmentTree::<Gcd<u64>>::build(&parse_values::<u64>(&values)?)
                .context("failed to build segment tree")?;
            drive_segment(&mut tree, &commands, |t, l, r| t.query(l, r), |t, i, v| t.update(i, v))
        }
    }
}

/// Run `query`/`set` commands against a built segment tree, printing one
/// tab-separated result line per query.
fn drive_segment<T, V>(
    tree: &mut T,
    commands: &[String],
    query: impl Fn(&T, usize, usize) -> Result<V, rangekit::RangeQueryError>,
    set: impl Fn(&mut T, usize, V) -> Result<(), rangekit::RangeQueryError>,
) -> Result<()>
where
    V: std::fmt::Display + FromStr,
    <V as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    for (line_no, command) in commands.iter().enumerate() {
        let mut fields = command.split_whitespace();
        let verb = fields.next().unwrap_or_default();
        debug!(line = line_no + 1, %command, "segment command");
        match verb {
            "query" => {
                let (l, r) = two_args(&mut fields, line_no)?;
                let result = query(tree, l, r)
                    .with_context(|| format!("query failed on line {}", line_no + 1))?;
                println!("query\t{}\t{}\t{}", l, r, result);
            }
            "set" => {
                let i: usize = next_arg(&mut fields, line_no)?;
                let v: V = next_arg(&mut fields, line_no)?;
                set(tree, i, v)
                    .with_context(|| format!("set failed on line {}", line_no + 1))?;
            }
            other => bail!("unknown segment command '{}' on line {}", other, line_no + 1),
        }
    }
    Ok(())
}

fn run_fenwick(values: Vec<String>, script: Option<PathBuf>) -> Result<()> {
    let mut tree = FenwickTree::build(&parse_values::<i64>(&values)?)
        .context("failed to build fenwick tree")?;

    for (line_no, command) in read_script(script)?.iter().enumerate() {
        let mut fields = command.split_whitespace();
        let verb = fields.next().unwrap_or_default();
        debug!(line = line_no + 1, %command, "fenwick command");
        match verb {
            "prefix" => {
                let p: usize = next_arg(&mut fields, line_no)?;
                let result = tree
                    .query(p)
                    .with_context(|| format!("prefix failed on line {}", line_no + 1))?;
                println!("prefix\t{}\t{}", p, result);
            }
            "sum" => {
                let (l, r) = two_args(&mut fields, line_no)?;
                let result = tree
                    .range_sum(l, r)
                    .with_context(|| format!("sum failed on line {}", line_no + 1))?;
                println!("sum\t{}\t{}\t{}", l, r, result);
            }
            "add" => {
                let p: usize = next_arg(&mut fields, line_no)?;
                let d: i64 = next_arg(&mut fields, line_no)?;
                tree.update(p, d)
                    .with_context(|| format!("add failed on line {}", line_no + 1))?;
            }
            other => bail!("unknown fenwick command '{}' on line {}", other, line_no + 1),
        }
    }
    Ok(())
}

fn parse_values<T>(raw: &[String]) -> Result<Vec<T>>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    raw.iter()
        .map(|s| {
            s.trim()
                .parse::<T>()
                .with_context(|| format!("invalid value '{}'", s))
        })
        .collect()
}

fn read_script(script: Option<PathBuf>) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    match script {
        Some(path) => {
            let reader = BufReader::new(
                File::open(&path)
                    .with_context(|| format!("failed to open script {}", path.display()))?,
            );
            for line in reader.lines() {
                push_command(&mut lines, line?);
            }
        }
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            for line in input.lines() {
                push_command(&mut lines, line.to_string());
            }
        }
    }
    Ok(lines)
}

fn push_command(lines: &mut Vec<String>, line: String) {
    let trimmed = line.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('#') {
        lines.push(trimmed.to_string());
    }
}

fn next_arg<T>(fields: &mut std::str::SplitWhitespace<'_>, line_no: usize) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = fields
        .next()
        .ok_or_else(|| anyhow::anyhow!("missing argument on line {}", line_no + 1))?;
    raw.parse::<T>()
        .with_context(|| format!("invalid argument '{}' on line {}", raw, line_no + 1))
}

fn two_args(
    fields: &mut std::str::SplitWhitespace<'_>,
    line_no: usize,
) -> Result<(usize, usize)> {
    Ok((next_arg(fields, line_no)?, next_arg(fields, line_no)?))
}
