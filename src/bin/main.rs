use clap::Parser;
use maxseg::{decompose_with, render, Connectivity, Cyclic, Point, Trace};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "maxseg",
    about = "Decompose a digital curve into maximal straight segments"
)]
struct Cli {
    /// Input file: one "x y" pair per line ('#' starts a comment)
    #[arg(short, long)]
    input: PathBuf,

    /// Treat the curve as closed (cyclic)
    #[arg(long)]
    closed: bool,

    /// Adjacency model: 4 or 8
    #[arg(long, default_value = "8")]
    adjacency: u8,

    /// Also print the joint polyline as SVG path data
    #[arg(long)]
    svg: bool,

    /// Per-segment progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let text = std::fs::read_to_string(&cli.input)?;
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(x), Some(y)) = (fields.next(), fields.next()) else {
            return Err(format!("line {}: expected 'x y'", lineno + 1).into());
        };
        points.push(Point::new(x.parse()?, y.parse()?));
    }

    let conn = match cli.adjacency {
        4 => Connectivity::Four,
        8 => Connectivity::Eight,
        other => return Err(format!("unsupported adjacency {other}, expected 4 or 8").into()),
    };

    let mut trace = if cli.verbose {
        Trace::verbose()
    } else {
        Trace::silent()
    };

    let decomposition = if cli.closed {
        decompose_with(&Cyclic(&points[..]), conn, &mut trace)?
    } else {
        decompose_with(&points[..], conn, &mut trace)?
    };

    for (i, seg) in decomposition.iter().enumerate() {
        let c = seg.characteristics;
        println!(
            "segment {i}: [{}..{}]  a={} b={} mu={} omega={}",
            seg.start, seg.end, c.a, c.b, c.mu, c.omega,
        );
    }

    if cli.svg {
        let path = if cli.closed {
            render::to_bezpath(&Cyclic(&points[..]), &decomposition)
        } else {
            render::to_bezpath(&points[..], &decomposition)
        };
        println!("{}", path.to_svg());
    }

    Ok(())
}
