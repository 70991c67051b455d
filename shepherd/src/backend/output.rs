//! Parsers for the cluster tool's raw (`-r`) tabular output.
//!
//! Three entry points, all pure: cluster capacity summary (`node info -r`),
//! full volume listing (`vdi list -r`) and single-volume usage
//! (`vdi list <name> -r`). Input is captured stdout, `\n`-separated; a
//! trailing record without its newline is treated as unterminated.

use shepherd_shared::{ShepherdError, ShepherdResult};

use crate::pool::{Volume, VolumeKind};

/// Aggregate cluster capacity, from the `Total` line of `node info -r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ClusterSummary {
    pub capacity: u64,
    pub allocation: u64,
    pub available: u64,
}

/// Size and usage of a single volume's current revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct VdiUsage {
    pub capacity: u64,
    pub allocation: u64,
}

/// A record span plus whether its terminating newline was present.
struct Line<'a> {
    text: &'a str,
    terminated: bool,
}

/// Lazy line-splitting pass over the captured buffer.
struct Lines<'a> {
    rest: &'a str,
}

impl<'a> Lines<'a> {
    fn new(buf: &'a str) -> Self {
        Lines { rest: buf }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    fn next(&mut self) -> Option<Line<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find('\n') {
            Some(idx) => {
                let text = &self.rest[..idx];
                self.rest = &self.rest[idx + 1..];
                Some(Line {
                    text,
                    terminated: true,
                })
            }
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Line {
                    text,
                    terminated: false,
                })
            }
        }
    }
}

/// Field tokenizer for one vdi-list record, aware of backslash escaping in
/// the name field.
struct FieldCursor<'a> {
    rest: &'a str,
}

impl<'a> FieldCursor<'a> {
    fn new(rest: &'a str) -> Self {
        FieldCursor { rest }
    }

    /// Un-escaped span up to the first unescaped space. A backslash takes
    /// the following character literally, consuming both. The separator
    /// space is consumed too.
    fn take_name(&mut self) -> String {
        let mut name = String::new();
        let mut it = self.rest.char_indices();
        let end;
        loop {
            match it.next() {
                None => {
                    end = self.rest.len();
                    break;
                }
                Some((idx, ' ')) => {
                    end = idx + 1;
                    break;
                }
                Some((_, '\\')) => match it.next() {
                    Some((_, escaped)) => name.push(escaped),
                    None => {
                        // trailing lone backslash, nothing left to escape
                        end = self.rest.len();
                        break;
                    }
                },
                Some((_, c)) => name.push(c),
            }
        }
        self.rest = &self.rest[end..];
        name
    }

    /// Next whitespace-delimited token.
    fn take_field(&mut self) -> Option<&'a str> {
        let trimmed = self.rest.trim_start_matches(' ');
        if trimmed.is_empty() {
            self.rest = trimmed;
            return None;
        }
        let (token, rest) = match trimmed.find(' ') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => (trimmed, ""),
        };
        self.rest = rest;
        Some(token)
    }
}

fn parse_u64(field: Option<&str>, what: &str) -> ShepherdResult<u64> {
    let raw =
        field.ok_or_else(|| ShepherdError::Format(format!("missing {} field", what)))?;
    raw.parse()
        .map_err(|_| ShepherdError::Format(format!("bad {} field {:?}", what, raw)))
}

fn parse_i64(field: Option<&str>, what: &str) -> ShepherdResult<i64> {
    let raw =
        field.ok_or_else(|| ShepherdError::Format(format!("missing {} field", what)))?;
    raw.parse()
        .map_err(|_| ShepherdError::Format(format!("bad {} field {:?}", what, raw)))
}

/// Parse `node info -r` output.
///
/// Node rows are skipped; exactly one line starts with `"Total "` and
/// carries whitespace-separated capacity and used-space counts.
pub(crate) fn parse_node_info(output: &str) -> ShepherdResult<ClusterSummary> {
    for line in Lines::new(output) {
        if !line.terminated {
            return Err(ShepherdError::Format(
                "node info output ends without a newline".into(),
            ));
        }
        let Some(rest) = line.text.strip_prefix("Total ") else {
            continue;
        };
        let mut fields = rest.split_ascii_whitespace();
        let capacity = parse_u64(fields.next(), "capacity")?;
        let allocation = parse_u64(fields.next(), "used")?;
        return Ok(ClusterSummary {
            capacity,
            allocation,
            available: capacity.saturating_sub(allocation),
        });
    }
    Err(ShepherdError::Format(
        "no \"Total\" line in node info output".into(),
    ))
}

/// Extract marker-stripped record content from a current (`=`) line.
///
/// Returns `None` for snapshot lines. A current line missing its newline or
/// its separator space (the degenerate bare `=` record) is malformed.
fn current_record<'a>(line: &Line<'a>) -> ShepherdResult<Option<&'a str>> {
    if !line.text.starts_with('=') {
        // snapshots and any other rows are ignored
        return Ok(None);
    }
    if !line.terminated {
        return Err(ShepherdError::Format(
            "vdi list record ends without a newline".into(),
        ));
    }
    line.text[1..]
        .strip_prefix(' ')
        .map(Some)
        .ok_or_else(|| ShepherdError::Format(format!("malformed vdi list record {:?}", line.text)))
}

/// Parse `vdi list -r` output into one `Volume` per current (`=`) line,
/// preserving input order.
///
/// Record shape: `<marker> <name> <id> <size> <used> <shared> <ctime>
/// <vdiId> [<tag>]`. Only name, size and used are kept; id is validated and
/// discarded. Any malformed record aborts the whole parse.
pub(crate) fn parse_vdi_list(source_name: &str, output: &str) -> ShepherdResult<Vec<Volume>> {
    let mut volumes: Vec<Volume> = Vec::new();

    for line in Lines::new(output) {
        let Some(record) = current_record(&line)? else {
            continue;
        };

        let mut cursor = FieldCursor::new(record);
        let name = cursor.take_name();
        if name.is_empty() {
            return Err(ShepherdError::Format(
                "vdi list record has an empty name".into(),
            ));
        }
        parse_i64(cursor.take_field(), "id")?;
        let capacity = parse_u64(cursor.take_field(), "size")?;
        let allocation = parse_u64(cursor.take_field(), "used")?;

        volumes
            .try_reserve(1)
            .map_err(|e| ShepherdError::Allocation(e.to_string()))?;
        volumes.push(Volume {
            key: format!("{}/{}", source_name, name),
            target_path: name.clone(),
            name,
            capacity,
            allocation,
            kind: VolumeKind::Network,
            encryption: None,
        });
    }

    Ok(volumes)
}

/// Parse `vdi list <name> -r` output for one volume's size and usage.
///
/// Same record grammar as the full listing, but the name is skipped (the
/// caller already knows it) and the first current line wins. A buffer with
/// only snapshot lines means no current revision exists.
pub(crate) fn parse_vdi(output: &str) -> ShepherdResult<VdiUsage> {
    for line in Lines::new(output) {
        let Some(record) = current_record(&line)? else {
            continue;
        };

        let mut cursor = FieldCursor::new(record);
        let _ = cursor.take_name();
        parse_i64(cursor.take_field(), "id")?;
        let capacity = parse_u64(cursor.take_field(), "size")?;
        let allocation = parse_u64(cursor.take_field(), "used")?;
        return Ok(VdiUsage {
            capacity,
            allocation,
        });
    }

    Err(ShepherdError::Format(
        "no current revision in vdi list output".into(),
    ))
}
