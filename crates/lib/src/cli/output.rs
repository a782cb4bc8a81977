use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// The answer of a puzzle, one for each part.
pub trait Answer {
    /// Access the answers to part 1 and part 2.
    fn parts(&self) -> [&dyn fmt::Display; 2];
}

impl<A, B> Answer for (A, B)
where
    A: fmt::Display,
    B: fmt::Display,
{
    #[inline]
    fn parts(&self) -> [&dyn fmt::Display; 2] {
        [&self.0, &self.1]
    }
}

pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    /// Write the answer of a puzzle.
    ///
    /// Answers spanning multiple lines start on the line after their label.
    pub(crate) fn answer(&mut self, answer: &dyn Answer) -> io::Result<()> {
        let [part1, part2] = answer.parts();

        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Answer,
                    data: Parts {
                        part1: DisplayString(part1),
                        part2: DisplayString(part2),
                    },
                })?;
            }
            OutputKind::Normal => {
                for (n, part) in [(1, part1), (2, part2)] {
                    let part = part.to_string();

                    if part.contains('\n') {
                        writeln!(self.out, "part {n}:\n{part}")?;
                    } else {
                        writeln!(self.out, "part {n}: {part}")?;
                    }
                }
            }
        }

        Ok(())
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Report,
                    data: report,
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{report}")?;
            }
        }

        Ok(())
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => {
                self.json(&Line {
                    ty: LineType::Message,
                    data: Message {
                        kind,
                        output: DisplayString(m),
                    },
                })?;
            }
            OutputKind::Normal => {
                writeln!(self.out, "{kind}: {m}")?;
            }
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Answer,
    Message,
    Report,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Info => write!(f, "info"),
            MessageKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Serialize)]
struct Message<T> {
    kind: MessageKind,
    output: T,
}

#[derive(Serialize)]
struct Parts<A, B> {
    part1: A,
    part2: B,
}

/// Serialize anything displayable as a string.
struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{Output, OutputKind};

    fn answer(kind: OutputKind, answer: (u32, &str)) -> String {
        let mut out = Vec::new();
        Output::new(&mut out, kind)
            .answer(&answer)
            .expect("writing to a vector");
        String::from_utf8(out).expect("utf-8 output")
    }

    #[test]
    fn test_normal_answer() {
        assert_eq!(
            answer(OutputKind::Normal, (21, "8")),
            "part 1: 21\npart 2: 8\n"
        );

        assert_eq!(
            answer(OutputKind::Normal, (21, "##..\n..##")),
            "part 1: 21\npart 2:\n##..\n..##\n"
        );
    }

    #[test]
    fn test_json_answer() {
        assert_eq!(
            answer(OutputKind::Json, (21, "8")),
            "{\"type\":\"answer\",\"data\":{\"part1\":\"21\",\"part2\":\"8\"}}\n"
        );
    }

    #[test]
    fn test_json_message() {
        let mut out = Vec::new();
        Output::new(&mut out, OutputKind::Json)
            .error("boom")
            .expect("writing to a vector");

        assert_eq!(
            String::from_utf8(out).expect("utf-8 output"),
            "{\"type\":\"message\",\"data\":{\"kind\":\"error\",\"output\":\"boom\"}}\n"
        );
    }
}
