//! Network loader: reads the direction tape and node definitions into a [`Graph`].
//!
//! Loading is two-pass. Node lines declare their node right away and cache
//! the edge record, because left/right may name nodes further down the file.
//! Once the input is exhausted the cached edges are replayed against the
//! complete graph.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use regex::Regex;
use tracing::{debug, instrument, trace};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{Direction, Graph};

/// `NAME = (LEFT, RIGHT)`, three uppercase letters each
const NODE_LINE: &str = r"^([A-Z]{3}) = \(([A-Z]{3}), ([A-Z]{3})\)$";

/// Where the loader is in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LoadPhase {
    #[default]
    AwaitingDirections,
    ReadingNodes,
}

/// Edge record cached during the parse pass.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingEdge {
    from: String,
    left: String,
    right: String,
}

/// Closed set of input line kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Blank,
    Directions(&'a str),
    Node(&'a str),
}

/// Builds a [`Graph`] from line-oriented input.
pub struct GraphLoader {
    phase: LoadPhase,
    pending: Vec<PendingEdge>,
    node_regex: Regex,
}

impl Default for GraphLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphLoader {
    pub fn new() -> Self {
        Self {
            phase: LoadPhase::default(),
            pending: Vec::new(),
            node_regex: Regex::new(NODE_LINE).expect("node line pattern is valid"),
        }
    }

    /// Load a network file.
    #[instrument(level = "debug", skip(self))]
    pub fn load_path(&mut self, path: &Path) -> ApplicationResult<Graph> {
        let file = File::open(path).map_err(|source| ApplicationError::InputUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(BufReader::new(file))
    }

    pub fn load_str(&mut self, content: &str) -> ApplicationResult<Graph> {
        self.load_reader(content.as_bytes())
    }

    /// Load a network from any buffered reader.
    ///
    /// # Errors
    /// - `InvalidDirection` / `InvalidNodeLine` for malformed lines
    /// - `MissingDirections` if no non-blank line was found
    /// - `UnresolvedEdge` if an edge names an undeclared node
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> ApplicationResult<Graph> {
        // Reset state for a fresh load
        self.phase = LoadPhase::default();
        self.pending.clear();

        let mut graph = Graph::new();
        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.with_context(format!("read line {line_no}"))?;
            let line = line.strip_suffix('\r').unwrap_or(&line);
            self.parse_line(&mut graph, line_no, line)?;
        }

        if self.phase == LoadPhase::AwaitingDirections {
            return Err(ApplicationError::MissingDirections);
        }

        self.link_edges(&mut graph)?;
        debug!(
            "loaded {} nodes, {} directions",
            graph.len(),
            graph.directions().len()
        );
        Ok(graph)
    }

    fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        match self.phase {
            LoadPhase::AwaitingDirections => LineKind::Directions(line),
            LoadPhase::ReadingNodes => LineKind::Node(line),
        }
    }

    fn parse_line(&mut self, graph: &mut Graph, line_no: usize, line: &str) -> ApplicationResult<()> {
        match self.classify(line) {
            LineKind::Blank => Ok(()),
            LineKind::Directions(tape) => {
                Self::parse_directions(graph, line_no, tape)?;
                self.phase = LoadPhase::ReadingNodes;
                Ok(())
            }
            LineKind::Node(definition) => self.parse_node(graph, line_no, definition),
        }
    }

    fn parse_directions(graph: &mut Graph, line_no: usize, tape: &str) -> ApplicationResult<()> {
        for c in tape.chars() {
            let direction = Direction::from_char(c).ok_or(ApplicationError::InvalidDirection {
                line: line_no,
                found: c,
            })?;
            graph.add_direction(direction);
        }
        trace!("tape: {tape}");
        Ok(())
    }

    fn parse_node(&mut self, graph: &mut Graph, line_no: usize, line: &str) -> ApplicationResult<()> {
        let caps = self
            .node_regex
            .captures(line)
            .ok_or_else(|| ApplicationError::InvalidNodeLine {
                line: line_no,
                content: line.to_string(),
            })?;
        let (_, [from, left, right]) = caps.extract();

        graph.add_node(from);
        self.pending.push(PendingEdge {
            from: from.to_string(),
            left: left.to_string(),
            right: right.to_string(),
        });
        Ok(())
    }

    fn link_edges(&self, graph: &mut Graph) -> ApplicationResult<()> {
        for edge in &self.pending {
            graph
                .add_edge(&edge.from, &edge.left, &edge.right)
                .map_err(|source| ApplicationError::UnresolvedEdge {
                    from: edge.from.clone(),
                    left: edge.left.clone(),
                    right: edge.right.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_classify_follows_phase() {
        let mut loader = GraphLoader::new();
        assert_eq!(loader.classify(""), LineKind::Blank);
        assert_eq!(loader.classify("   "), LineKind::Blank);
        assert_eq!(loader.classify("LR"), LineKind::Directions("LR"));
        loader.phase = LoadPhase::ReadingNodes;
        assert_eq!(loader.classify("LR"), LineKind::Node("LR"));
        assert_eq!(loader.classify(""), LineKind::Blank);
    }

    #[test]
    fn test_forward_references_are_linked_after_parse() {
        let mut loader = GraphLoader::new();
        let graph = loader
            .load_str("L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\n")
            .unwrap();
        assert_eq!(
            loader.pending[0],
            PendingEdge {
                from: "AAA".into(),
                left: "BBB".into(),
                right: "BBB".into()
            }
        );
        let aaa = graph.lookup("AAA").unwrap();
        let next = graph.step(aaa, Direction::Left).unwrap();
        assert_eq!(graph.name(next).unwrap(), "BBB");
    }

    #[test]
    fn test_crlf_line_endings_are_accepted() {
        let mut loader = GraphLoader::new();
        let graph = loader.load_str("LR\r\n\r\nAAA = (AAA, AAA)\r\n").unwrap();
        assert_eq!(graph.directions(), &[Direction::Left, Direction::Right]);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_leading_blank_lines_are_skipped() {
        let mut loader = GraphLoader::new();
        let graph = loader.load_str("\n\nRL\nAAA = (AAA, AAA)").unwrap();
        assert_eq!(graph.directions(), &[Direction::Right, Direction::Left]);
    }

    #[rstest]
    #[case("AAA = (BBB,CCC)")]
    #[case("AAA=(BBB, CCC)")]
    #[case("AAA = (BB, CCC)")]
    #[case("aaa = (BBB, CCC)")]
    #[case("AAA = (BBB, CCC) ")]
    #[case("AAAA = (BBB, CCC)")]
    fn test_malformed_node_line_is_rejected(#[case] line: &str) {
        let mut loader = GraphLoader::new();
        let err = loader.load_str(&format!("L\n\n{line}\n")).unwrap_err();
        assert!(
            matches!(err, ApplicationError::InvalidNodeLine { line: 3, ref content } if content == line),
            "unexpected: {err:?}"
        );
    }

    #[test]
    fn test_invalid_direction_reports_character() {
        let mut loader = GraphLoader::new();
        let err = loader.load_str("LRX\n\nAAA = (AAA, AAA)\n").unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::InvalidDirection { line: 1, found: 'X' }
        ));
    }

    #[test]
    fn test_empty_input_has_no_directions() {
        let mut loader = GraphLoader::new();
        let err = loader.load_str("\n\n").unwrap_err();
        assert!(matches!(err, ApplicationError::MissingDirections));
    }

    #[test]
    fn test_loader_is_reusable() {
        let mut loader = GraphLoader::new();
        let first = loader.load_str("L\nAAA = (AAA, AAA)\n").unwrap();
        let second = loader.load_str("R\nBBB = (BBB, BBB)\n").unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(loader.pending.len(), 1);
        assert!(second.lookup("AAA").is_err());
    }
}
