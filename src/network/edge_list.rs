use{
    std::{
        collections::HashMap,
        fs,
        path::Path,
    },
    serde::{Serialize, Deserialize},
    tracing::debug,
    crate::error::*,
    super::AdjacencyMatrix,
};

/// Delimiters tried, in order, when none is given
pub const DELIMITER_CANDIDATES: [char; 4] = [',', ' ', ':', '\t'];

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct EdgeListOptions
{
    /// Force a delimiter instead of detecting one
    pub delimiter: Option<char>,
    /// Insert every edge in both directions
    pub symmetric: bool
}

/// Plain metadata about a loaded network
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GraphInfo
{
    pub nodes: usize,
    pub edges: usize,
    pub density: f64
}

impl GraphInfo
{
    pub fn new(nodes: usize, edges: usize) -> Self
    {
        let density = if nodes < 2 {
            0.0
        } else {
            edges as f64 / (nodes as f64 * (nodes - 1) as f64 * 0.5)
        };
        Self{nodes, edges, density}
    }
}

#[derive(Clone, Debug)]
pub struct LoadedGraph
{
    pub adjacency: AdjacencyMatrix,
    /// `labels[i]` is the label used in the file for node `i`
    pub labels: Vec<u64>,
    pub delimiter: char,
    pub info: GraphInfo
}

struct RawEdge
{
    from: u64,
    to: u64,
    weight: f64
}

pub fn load_edge_list<P: AsRef<Path>>(path: P, options: &EdgeListOptions) -> Result<LoadedGraph>
{
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|source| SimError::Io{path: path.to_path_buf(), source})?;
    parse_edge_list(&text, options)
}

/// Parses `from<delim>to[<delim>weight]` lines.
///
/// Blank lines and `#` comments are skipped, a first line that is not an
/// edge is taken as a header. Node labels are mapped to dense indices in
/// the order they first appear.
pub fn parse_edge_list(text: &str, options: &EdgeListOptions) -> Result<LoadedGraph>
{
    let lines: Vec<(usize, &str)> = text.lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .collect();

    let (delimiter, edges) = match options.delimiter
    {
        Some(d) => (d, parse_with(&lines, d)?),
        None => detect(&lines)?
    };
    debug!(?delimiter, edges = edges.len(), "parsed edge list");

    let mut index_of: HashMap<u64, usize> = HashMap::new();
    let mut labels = Vec::new();
    let mut index = |label: u64| -> usize {
        *index_of.entry(label)
            .or_insert_with(|| {
                labels.push(label);
                labels.len() - 1
            })
    };
    let indexed: Vec<_> = edges.iter()
        .map(|e| (index(e.from), index(e.to), e.weight))
        .collect();

    let mut adjacency = AdjacencyMatrix::new(labels.len());
    for (i, j, w) in indexed
    {
        adjacency.set(i, j, w)?;
        if options.symmetric {
            adjacency.set(j, i, w)?;
        }
    }

    // undirected graphs count each edge once, like the original density
    let edge_count = if options.symmetric {
        let self_loops = (0..adjacency.size()).filter(|&i| adjacency.get(i, i) > 0.0).count();
        (adjacency.edge_count() - self_loops) / 2 + self_loops
    } else {
        adjacency.edge_count()
    };
    let info = GraphInfo::new(adjacency.size(), edge_count);

    Ok(LoadedGraph{adjacency, labels, delimiter, info})
}

fn detect(lines: &[(usize, &str)]) -> Result<(char, Vec<RawEdge>)>
{
    let mut first_err = None;
    for d in DELIMITER_CANDIDATES
    {
        match parse_with(lines, d)
        {
            Ok(edges) => return Ok((d, edges)),
            // node columns split fine, the weight is bad
            Err(e @ SimError::InvalidInput{field: "weight", ..}) => return Err(e),
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }
    Err(first_err.unwrap_or_else(|| SimError::invalid("edge_list", "no delimiter candidates")))
}

fn parse_with(lines: &[(usize, &str)], delimiter: char) -> Result<Vec<RawEdge>>
{
    let mut edges = Vec::with_capacity(lines.len());
    for (pos, &(line_nr, line)) in lines.iter().enumerate()
    {
        match parse_line(line, delimiter)
        {
            Some(Ok(edge)) => edges.push(edge),
            Some(Err(weight)) => return Err(SimError::invalid(
                "weight",
                format!("line {line_nr}: {weight:?} is not a finite non-negative number")
            )),
            // header
            None if pos == 0 => continue,
            None => return Err(SimError::Parse{line: line_nr, content: line.to_owned()})
        }
    }
    if edges.is_empty() {
        return match lines.first()
        {
            Some(&(line, content)) => Err(SimError::Parse{line, content: content.to_owned()}),
            None => Err(SimError::invalid("edge_list", "file contains no edges"))
        };
    }
    Ok(edges)
}

/// `None` if the line is no edge under `delimiter`,
/// `Some(Err(field))` if it is one but the weight field is unusable.
fn parse_line(line: &str, delimiter: char) -> Option<std::result::Result<RawEdge, String>>
{
    let mut fields = line.split(delimiter)
        .map(str::trim)
        .filter(|f| !f.is_empty());
    let from = fields.next()?.parse().ok()?;
    let to = fields.next()?.parse().ok()?;
    let weight = match fields.next()
    {
        None => 1.0,
        Some(field) => match field.parse::<f64>()
        {
            Ok(w) if w.is_finite() && w >= 0.0 => w,
            _ => return Some(Err(field.to_owned()))
        }
    };
    Some(Ok(RawEdge{from, to, weight}))
}
