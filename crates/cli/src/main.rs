mod provenance;

use anyhow::{bail, Context, Result};
use brauer::prelude::*;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "brauer")]
#[command(about = "Minimal U/T factorizations of Brauer diagrams")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Factorize a diagram given as `a:b` pairs, e.g. `1:2,1':2'`
    Factorize {
        diagram: String,
        /// Check the crossing cache against a full recomputation after each step
        #[arg(long)]
        validate: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print length, crossing number, and component count of a diagram
    Length {
        diagram: String,
        #[arg(long)]
        json: bool,
    },
    /// Evaluate a generator word such as `U1,T2` in order N
    Compose {
        #[arg(long)]
        n: usize,
        word: String,
    },
    /// Factorize random diagrams and verify length and round trip
    Sample {
        #[arg(long)]
        n: usize,
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Write the summary JSON here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct FactorizeReport {
    diagram: String,
    n: usize,
    length: usize,
    crossings: usize,
    factorization: Vec<String>,
    t_count: usize,
    u_count: usize,
}

#[derive(Serialize)]
struct LengthReport {
    diagram: String,
    n: usize,
    length: usize,
    crossings: usize,
    components: usize,
}

#[derive(Serialize, Default)]
struct SampleSummary {
    n: usize,
    count: u64,
    seed: u64,
    total_length: usize,
    max_length: usize,
    t_count: usize,
    u_count: usize,
    failures: Vec<String>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Factorize {
            diagram,
            validate,
            json,
        } => factorize(diagram, validate, json),
        Action::Length { diagram, json } => length(diagram, json),
        Action::Compose { n, word } => compose(n, word),
        Action::Sample {
            n,
            count,
            seed,
            out,
        } => sample(n, count, seed, out),
        Action::Report => report(),
    }
}

fn parse_tangle(text: &str) -> Result<Tangle> {
    text.parse()
        .with_context(|| format!("decoding diagram `{text}`"))
}

fn factorize(diagram: String, validate: bool, json: bool) -> Result<()> {
    let tangle = parse_tangle(&diagram)?;
    tracing::info!(n = tangle.n(), length = tangle.length(), "factorize");
    let cfg = FactorizeCfg {
        validate_crossings: validate,
    };
    let f = factorize_bn(tangle.clone(), cfg)?;
    if json {
        let report = FactorizeReport {
            diagram: tangle.to_string(),
            n: tangle.n(),
            length: tangle.length(),
            crossings: tangle.crossing_number(),
            factorization: f.tokens(),
            t_count: f.t_count(),
            u_count: f.u_count(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{f}");
    }
    Ok(())
}

fn length(diagram: String, json: bool) -> Result<()> {
    let tangle = parse_tangle(&diagram)?;
    let report = LengthReport {
        diagram: tangle.to_string(),
        n: tangle.n(),
        length: tangle.length(),
        crossings: tangle.crossing_number(),
        components: tangle.n_components(),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "length={} crossings={} components={}",
            report.length, report.crossings, report.components
        );
    }
    Ok(())
}

fn compose(n: usize, word: String) -> Result<()> {
    let word: Factorization = word
        .parse()
        .with_context(|| format!("decoding word `{word}`"))?;
    let tangle = word.evaluate(n)?;
    tracing::info!(n, word_len = word.len(), length = tangle.length(), "compose");
    println!("{tangle}");
    Ok(())
}

fn sample(n: usize, count: u64, seed: u64, out: Option<String>) -> Result<()> {
    tracing::info!(n, count, seed, out = ?out, "sample");
    let mut summary = SampleSummary {
        n,
        count,
        seed,
        ..Default::default()
    };
    let cfg = FactorizeCfg {
        validate_crossings: true,
    };
    for index in 0..count {
        let tangle = random_tangle(n, ReplayToken::new(seed, index))?;
        let length = tangle.length();
        let f = factorize_bn(tangle.clone(), cfg)?;
        summary.total_length += length;
        summary.max_length = summary.max_length.max(length);
        summary.t_count += f.t_count();
        summary.u_count += f.u_count();
        if f.len() != length || f.evaluate(n)? != tangle {
            tracing::warn!(index, %tangle, %f, "factorization check failed");
            summary.failures.push(tangle.to_string());
        }
    }

    let body = serde_json::to_vec_pretty(&summary)?;
    match &out {
        Some(out) => {
            let out_path = Path::new(out);
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(out_path, &body).with_context(|| format!("writing {out}"))?;
            let payload = provenance::Payload::new(serde_json::json!({
                "n": n,
                "count": count,
                "seed": seed
            }));
            let sidecar = provenance::write_sidecar(out_path, payload)?;
            tracing::info!(sidecar = %sidecar.display(), "wrote summary");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }

    if !summary.failures.is_empty() {
        bail!(
            "{} of {count} sampled diagrams failed the factorization check",
            summary.failures.len()
        );
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::document(serde_json::json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
