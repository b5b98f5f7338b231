//! Flat-file loader for the co-star graph.
//!
//! Three pipe-delimited UTF-8 tables feed the base graph:
//!
//! - performers: `id|name`, one performer per line
//! - productions: `id|title`, one production per line
//! - credits: `production_id|performer_id`, one cast membership per line
//!
//! Every performer becomes a vertex. For each production, every unordered
//! pair of distinct cast members shares an undirected edge labeled with
//! the set of production titles they have in common; the set grows by
//! fetching the shared label handle and inserting in place, so both edge
//! directions see every accumulated title.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use costar_graph::LabeledGraph;

use crate::error::{CliError, CliResult};

/// The concrete graph the whole CLI operates on: performer names keyed by
/// value, production-title sets as edge labels. `BTreeSet` keeps titles in
/// display order.
pub type CostarGraph = LabeledGraph<String, BTreeSet<String>>;

/// Parse the three tables and build the base graph.
pub fn load_graph(performers: &Path, productions: &Path, credits: &Path) -> CliResult<CostarGraph> {
    let performer_names = parse_directory(performers)?;
    let production_titles = parse_directory(productions)?;
    let casts = parse_credits(credits, &production_titles, &performer_names)?;

    let mut graph = LabeledGraph::new();
    for name in performer_names.values() {
        graph.insert_vertex(name.clone());
    }

    let mut edges = 0usize;
    for (title, cast) in casts.values() {
        for j in 0..cast.len() {
            for k in (j + 1)..cast.len() {
                let (a, b) = (&cast[j], &cast[k]);
                if a == b {
                    // A performer credited twice in one production must
                    // not produce a self-edge.
                    continue;
                }
                if !graph.has_edge(a, b) {
                    graph.insert_undirected(a, b, BTreeSet::new())?;
                    edges += 1;
                }
                graph.label(a, b)?.borrow_mut().insert(title.clone());
            }
        }
    }

    info!(
        performers = performer_names.len(),
        productions = production_titles.len(),
        costar_pairs = edges,
        "loaded co-star graph"
    );
    Ok(graph)
}

/// Parse an `id|value` directory table.
fn parse_directory(path: &Path) -> CliResult<HashMap<u32, String>> {
    let reader = open(path)?;
    let mut map = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| read_failure(path, source))?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let (id, value) = split_row(path, lineno, &line)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(malformed(path, lineno, "empty value after `|`"));
        }
        map.insert(id, value.to_string());
    }
    debug!(path = %path.display(), entries = map.len(), "parsed directory table");
    Ok(map)
}

/// Parse the `production_id|performer_id` credits table, resolving both
/// ids against their directories. Returns each production's title and
/// cast, keyed by production id.
fn parse_credits(
    path: &Path,
    titles: &HashMap<u32, String>,
    names: &HashMap<u32, String>,
) -> CliResult<HashMap<u32, (String, Vec<String>)>> {
    let reader = open(path)?;
    let mut casts: HashMap<u32, (String, Vec<String>)> = HashMap::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| read_failure(path, source))?;
        if line.trim().is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let (production_id, rest) = split_row(path, lineno, &line)?;
        let performer_id: u32 = rest.trim().parse().map_err(|_| {
            malformed(path, lineno, &format!("invalid performer id {:?}", rest.trim()))
        })?;

        let title = titles.get(&production_id).ok_or(CliError::UnknownId {
            path: path.display().to_string(),
            line: lineno,
            kind: "production",
            id: production_id,
        })?;
        let name = names.get(&performer_id).ok_or(CliError::UnknownId {
            path: path.display().to_string(),
            line: lineno,
            kind: "performer",
            id: performer_id,
        })?;

        casts
            .entry(production_id)
            .or_insert_with(|| (title.clone(), Vec::new()))
            .1
            .push(name.clone());
    }
    debug!(path = %path.display(), productions_cast = casts.len(), "parsed credits table");
    Ok(casts)
}

fn open(path: &Path) -> CliResult<BufReader<File>> {
    let file = File::open(path).map_err(|source| read_failure(path, source))?;
    Ok(BufReader::new(file))
}

fn read_failure(path: &Path, source: io::Error) -> CliError {
    CliError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn malformed(path: &Path, line: usize, reason: &str) -> CliError {
    CliError::Malformed {
        path: path.display().to_string(),
        line,
        reason: reason.to_string(),
    }
}

fn split_row<'l>(path: &Path, line: usize, text: &'l str) -> CliResult<(u32, &'l str)> {
    let (id, rest) = text
        .split_once('|')
        .ok_or_else(|| malformed(path, line, "expected `id|value`"))?;
    let id = id
        .trim()
        .parse()
        .map_err(|_| malformed(path, line, &format!("invalid id {:?}", id.trim())))?;
    Ok((id, rest))
}
