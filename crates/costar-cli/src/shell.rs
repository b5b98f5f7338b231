//! Interactive shell.
//!
//! Line-oriented command loop over the query session. All formatting
//! happens here; the session and engine only ever return structured
//! values. Reader and writer are generic so the whole loop is testable
//! with in-memory buffers.

use std::io::{self, BufRead, Write};

use costar_graph::GraphError;

use crate::session::Session;

const HELP: &str = "Commands:
  c <n>           top (n > 0) or bottom (n < 0) centers by average separation
  d <low> <high>  performers with co-star degree in the range
  i               performers with infinite separation from the center
  p <name>        path from a performer to the center
  s <low> <high>  performers by separation from the center, in the range
  u <name>        make a performer the center
  h               show this help
  q               quit";

/// One parsed shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Centers(i64),
    Degrees(usize, usize),
    Infinite,
    Path(String),
    Separations(usize, usize),
    Recenter(String),
    Help,
    Quit,
}

impl Command {
    /// Parse a single input line. Errors are complete usage messages.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        match cmd {
            "c" => {
                let n: i64 = rest
                    .parse()
                    .map_err(|_| "usage: c <n> (positive for top, negative for bottom)")?;
                if n == 0 {
                    return Err("c: <n> must be nonzero".to_string());
                }
                Ok(Command::Centers(n))
            }
            "d" => bounds(rest, "d").map(|(low, high)| Command::Degrees(low, high)),
            "s" => bounds(rest, "s").map(|(low, high)| Command::Separations(low, high)),
            "i" => Ok(Command::Infinite),
            "p" => name(rest, "p").map(Command::Path),
            "u" => name(rest, "u").map(Command::Recenter),
            "h" | "?" | "help" => Ok(Command::Help),
            "q" => Ok(Command::Quit),
            other => Err(format!("unknown command {other:?} (h for help)")),
        }
    }
}

fn bounds(rest: &str, cmd: &str) -> Result<(usize, usize), String> {
    let mut parts = rest.split_whitespace();
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some(low), Some(high), None) => low.parse().ok().zip(high.parse().ok()),
        _ => None,
    };
    match parsed {
        Some((low, high)) if low <= high => Ok((low, high)),
        Some(_) => Err(format!("{cmd}: <low> must not exceed <high>")),
        None => Err(format!("usage: {cmd} <low> <high>")),
    }
}

fn name(rest: &str, cmd: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("usage: {cmd} <name>"))
    } else {
        Ok(rest.to_string())
    }
}

pub struct Shell {
    session: Session,
}

impl Shell {
    #[must_use]
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Run the command loop until `q` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        writeln!(out, "{HELP}")?;
        self.status(&mut out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Err(usage) => writeln!(out, "{usage}")?,
                Ok(Command::Quit) => break,
                Ok(command) => self.dispatch(command, &mut out)?,
            }
            out.flush()?;
        }
        Ok(())
    }

    fn status(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(
            out,
            "center is {}, reaching {} of {} performers",
            self.session.center(),
            self.session.tree().num_vertices(),
            self.session.graph().num_vertices()
        )
    }

    fn dispatch(&mut self, command: Command, out: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Centers(n) => self.centers(n, out),
            Command::Degrees(low, high) => self.degrees(low, high, out),
            Command::Infinite => self.infinite(out),
            Command::Path(name) => self.path(&name, out),
            Command::Separations(low, high) => self.separations(low, high, out),
            Command::Recenter(name) => self.recenter(name, out),
            Command::Help => writeln!(out, "{HELP}"),
            Command::Quit => Ok(()),
        }
    }

    fn centers(&self, n: i64, out: &mut impl Write) -> io::Result<()> {
        let limit = n.unsigned_abs() as usize;
        let total = self.session.graph().num_vertices();
        if limit > total {
            return writeln!(out, "only {total} performers exist");
        }
        let ranking = match self.session.rank_centers() {
            Ok(ranking) => ranking,
            Err(err) => return writeln!(out, "{err}"),
        };
        if n > 0 {
            for (name, avg) in ranking.iter().take(limit) {
                writeln!(out, "{name}: average separation {avg:.3}")?;
            }
        } else {
            for (name, avg) in ranking.iter().rev().take(limit) {
                writeln!(out, "{name}: average separation {avg:.3}")?;
            }
        }
        Ok(())
    }

    fn degrees(&self, low: usize, high: usize, out: &mut impl Write) -> io::Result<()> {
        let performers = match self.session.degrees_between(low, high) {
            Ok(performers) => performers,
            Err(err) => return writeln!(out, "{err}"),
        };
        if performers.is_empty() {
            return writeln!(out, "no performers with degree in [{low}, {high}]");
        }
        for (name, degree) in performers {
            writeln!(out, "{name}: {degree}")?;
        }
        Ok(())
    }

    fn infinite(&self, out: &mut impl Write) -> io::Result<()> {
        let mut missing: Vec<String> = self.session.infinite_separation().into_iter().collect();
        if missing.is_empty() {
            return writeln!(
                out,
                "every performer is reachable from {}",
                self.session.center()
            );
        }
        missing.sort();
        for name in missing {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }

    fn path(&self, name: &str, out: &mut impl Write) -> io::Result<()> {
        if !self.session.graph().has_vertex(&name.to_string()) {
            return writeln!(out, "{name} does not exist.");
        }
        let path = match self.session.path_to_center(name) {
            Ok(path) => path,
            Err(GraphError::NotReachable(_)) => {
                return writeln!(
                    out,
                    "no path between {} and {name}",
                    self.session.center()
                );
            }
            Err(err) => return writeln!(out, "{err}"),
        };
        writeln!(out, "{name}'s number is {}", path.len() - 1)?;
        for hop in path.windows(2) {
            match self.session.shared_productions(&hop[0], &hop[1]) {
                Ok(titles) => writeln!(
                    out,
                    "{} appeared in [{}] with {}",
                    hop[0],
                    titles.join(", "),
                    hop[1]
                )?,
                Err(err) => writeln!(out, "{err}")?,
            }
        }
        Ok(())
    }

    fn separations(&self, low: usize, high: usize, out: &mut impl Write) -> io::Result<()> {
        let performers = match self.session.separations_between(low, high) {
            Ok(performers) => performers,
            Err(err) => return writeln!(out, "{err}"),
        };
        if performers.is_empty() {
            return writeln!(out, "no performers with separation in [{low}, {high}]");
        }
        for (name, sep) in performers {
            writeln!(out, "{name}: {sep}")?;
        }
        Ok(())
    }

    fn recenter(&mut self, name: String, out: &mut impl Write) -> io::Result<()> {
        if self.session.set_center(name.clone()).is_err() {
            return writeln!(out, "{name} does not exist.");
        }
        self.status(out)
    }
}
