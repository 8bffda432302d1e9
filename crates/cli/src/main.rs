use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::report::{Reporter, TextReporter};
use trigon::Triangle;

mod report;

use report::{DemoStep, TriangleReport};

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Resolve a triangle from a partial description and report it")]
struct Cmd {
    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Digits after the decimal point in text output
    #[arg(long, default_value_t = 2, global = true)]
    precision: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Action {
    /// Three side lengths (SSS)
    Sides {
        a: f64,
        b: f64,
        c: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// Two sides and the angle between them, in degrees (SAS)
    Sas {
        side1: f64,
        side2: f64,
        angle: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// One side and the two angles at its ends, in degrees (ASA)
    Asa {
        side: f64,
        angle1: f64,
        angle2: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// Right triangle from its two legs
    Right {
        leg1: f64,
        leg2: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// Isosceles triangle from its base and leg length
    Isosceles {
        base: f64,
        leg: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// Equilateral triangle from its side
    Equilateral {
        side: f64,
        #[command(flatten)]
        then: Reconfigure,
    },
    /// Walk through the built-in examples
    Demo,
}

#[derive(Args)]
struct Reconfigure {
    /// Rebuild the triangle afterwards from two sides and two angles (same shape)
    #[arg(
        long,
        num_args = 4,
        value_names = ["SIDE1", "SIDE2", "ANGLE1", "ANGLE2"]
    )]
    reconfigure: Option<Vec<f64>>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let reporter = TextReporter {
        precision: cmd.precision,
    };
    let (mode, built, then) = match cmd.action {
        Action::Sides { a, b, c, then } => ("sides", Triangle::from_three_sides(a, b, c), then),
        Action::Sas {
            side1,
            side2,
            angle,
            then,
        } => ("sas", Triangle::from_two_sides_angle(side1, side2, angle), then),
        Action::Asa {
            side,
            angle1,
            angle2,
            then,
        } => ("asa", Triangle::from_two_angles_side(side, angle1, angle2), then),
        Action::Right { leg1, leg2, then } => ("right", Triangle::right_from_legs(leg1, leg2), then),
        Action::Isosceles { base, leg, then } => (
            "isosceles",
            Triangle::isosceles_from_base_leg(base, leg),
            then,
        ),
        Action::Equilateral { side, then } => ("equilateral", Triangle::equilateral(side), then),
        Action::Demo => return demo(cmd.format, &reporter),
    };
    let mut triangle = built.with_context(|| format!("building triangle ({mode})"))?;
    tracing::info!(mode, shape = %triangle.shape(), "built");

    if let Some(values) = then.reconfigure {
        let &[side1, side2, angle1, angle2] = values.as_slice() else {
            bail!("--reconfigure takes exactly four values, got {}", values.len());
        };
        triangle
            .reconfigure(side1, side2, angle1, angle2)
            .context("reconfiguring triangle")?;
        tracing::info!(side1, side2, angle1, angle2, "reconfigured");
    }

    emit(&triangle, cmd.format, &reporter)
}

fn emit(triangle: &Triangle, format: Format, reporter: &impl Reporter) -> Result<()> {
    match format {
        Format::Text => print!("{}", reporter.render(triangle)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&TriangleReport::from(triangle))?
        ),
    }
    Ok(())
}

fn demo(format: Format, reporter: &impl Reporter) -> Result<()> {
    tracing::info!("demo");
    print!("{}", demo_output(format, reporter)?);
    Ok(())
}

/// Titled walkthrough of the construction modes, including one rejected
/// reconfiguration that leaves the right triangle as it was.
fn demo_steps() -> Result<Vec<(&'static str, Triangle)>> {
    let mut right = Triangle::right_from_legs(3.0, 4.0)?;
    let mut triangle = Triangle::from_two_sides_angle(5.0, 6.0, 60.0)?;
    let mut steps = vec![
        ("Right triangle", right),
        ("Triangle (two sides, 60° between)", triangle),
    ];
    triangle.reconfigure(7.0, 8.0, 45.0, 60.0)?;
    steps.push((
        "Triangle (reconfigured: sides 7, 8, angles 45° and 60°)",
        triangle,
    ));
    steps.push((
        "Another triangle",
        Triangle::from_two_sides_angle(10.0, 12.0, 30.0)?,
    ));
    if let Err(err) = right.reconfigure(6.0, 8.0, 45.0, 44.9) {
        tracing::warn!(%err, "reconfiguration rejected; keeping previous values");
    }
    steps.push(("Right triangle (rejected reconfiguration)", right));
    Ok(steps)
}

fn demo_output(format: Format, reporter: &impl Reporter) -> Result<String> {
    let steps = demo_steps()?;
    match format {
        Format::Text => Ok(steps
            .iter()
            .map(|(title, t)| format!("=== {title} ===\n{}", reporter.render(t)))
            .collect()),
        Format::Json => {
            let docs: Vec<DemoStep> = steps
                .iter()
                .map(|(title, t)| DemoStep {
                    title: *title,
                    triangle: TriangleReport::from(t),
                })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&docs)?))
        }
    }
}
