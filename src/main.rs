//! Builds every puzzle binary and runs them one after another, collecting
//! their answers and benchmark reports.

use std::ffi::OsString;
use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use lib::cli::Report;
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::Deserialize;
use serde_json::Value;

/// The package which holds the puzzle binaries.
const PACKAGE: &str = "y2022";

#[derive(Default)]
struct Opts {
    quiet: bool,
    verbose: bool,
    /// Arguments forwarded to every puzzle.
    args: Vec<OsString>,
}

impl Opts {
    fn parse() -> Result<Self> {
        let mut opts = Self::default();
        let mut it = std::env::args_os().skip(1);

        for arg in it.by_ref() {
            let Some(arg) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match arg {
                "-q" | "--quiet" => {
                    opts.quiet = true;
                }
                "-V" | "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                other => {
                    bail!("unsupported argument: {other}");
                }
            }
        }

        opts.args.extend(it);
        Ok(opts)
    }

    fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }
}

#[derive(Deserialize)]
struct Target {
    name: String,
    kind: Vec<String>,
}

#[derive(Deserialize)]
struct Artifact {
    target: Target,
    executable: Option<PathBuf>,
}

struct Executable {
    name: String,
    path: PathBuf,
}

#[derive(Deserialize)]
struct Data<T> {
    data: T,
}

#[derive(Deserialize)]
struct Parts {
    part1: String,
    part2: String,
}

#[derive(Deserialize)]
struct Message {
    kind: String,
    output: String,
}

impl Message {
    fn is_error(&self) -> bool {
        self.kind == "error"
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse()?;
    let executables = build()?;

    let mut total = Report::default();
    let mut failed = Vec::new();

    for e in &executables {
        if !run(&opts, e, &mut total)? {
            failed.push(e.name.as_str());
        }
    }

    if total.count > 0 {
        println!("total: {total}");
    }

    if !failed.is_empty() {
        bail!("failed: {}", failed.join(", "));
    }

    Ok(())
}

/// Build the puzzle binaries in release mode and collect their paths, sorted
/// by name.
fn build() -> Result<Vec<Executable>> {
    let mut cmd = Command::new("cargo");
    cmd.stdout(Stdio::piped());
    cmd.args(["build", "--release", "-p", PACKAGE]);
    cmd.args(["--message-format", "json"]);

    let mut child = cmd.spawn().context("spawning cargo")?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let mut executables = Vec::new();

    for value in lines(stdout) {
        let value = value?;

        if value.get("reason").and_then(Value::as_str) != Some("compiler-artifact") {
            continue;
        }

        let artifact = Artifact::deserialize(value.into_deserializer())?;

        if artifact.target.kind != ["bin"] {
            continue;
        }

        executables.push(Executable {
            name: artifact.target.name,
            path: artifact.executable.context("missing executable")?,
        });
    }

    let status = child.wait()?;

    if !status.success() {
        bail!("cargo build failed: {status}");
    }

    executables.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(executables)
}

/// Run a single puzzle, returns `false` if it failed.
fn run(opts: &Opts, e: &Executable, total: &mut Report) -> Result<bool> {
    let mut cmd = Command::new(&e.path);
    cmd.stdout(Stdio::piped());
    cmd.args(&opts.args);
    cmd.arg("--json");

    let mut child = cmd.spawn().with_context(|| e.path.display().to_string())?;
    let stdout = child.stdout.take().context("missing stdout")?;

    let name = &e.name;

    for value in lines(stdout) {
        let value = value?;

        match value.get("type").and_then(Value::as_str) {
            Some("answer") => {
                let Parts { part1, part2 } = data(value)?;

                if !opts.quiet {
                    for (n, part) in [(1, part1), (2, part2)] {
                        if part.contains('\n') {
                            println!("{name}: part {n}:\n{part}");
                        } else {
                            println!("{name}: part {n}: {part}");
                        }
                    }
                }
            }
            Some("report") => {
                let report = data::<Report>(value)?;

                if !opts.quiet {
                    println!("{name}: {report}");
                }

                *total += &report;
            }
            Some("message") => {
                let message = data::<Message>(value)?;

                if opts.is_verbose() || message.is_error() {
                    println!("{name}: {}: {}", message.kind, message.output);
                }
            }
            _ => {}
        }
    }

    let status = child.wait()?;

    if opts.is_verbose() || !status.success() {
        println!("{name}: {status}");
    }

    Ok(status.success())
}

/// Decode a stream of JSON documents.
fn lines<R>(reader: R) -> impl Iterator<Item = Result<Value>>
where
    R: Read,
{
    serde_json::Deserializer::from_reader(reader)
        .into_iter::<Value>()
        .map(|value| Ok(value?))
}

/// Extract the `data` field of an output line.
fn data<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    Ok(Data::<T>::deserialize(value.into_deserializer())?.data)
}
