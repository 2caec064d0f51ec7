//! Built-in reference graphs.
//!
//! - `tree`: a 17-node tree, handy for checking traversal order by eye
//! - `monster`: 124 nodes with several cycles and long chains, deep enough to
//!   breach the standard depth threshold

use crate::error::{Error, Result};
use crate::graph::Graph;

type Adjacency = &'static [(&'static str, &'static [&'static str])];

/// Names accepted by [`by_name`].
pub const NAMES: &[&str] = &["tree", "monster"];

const TREE: Adjacency = &[
    ("A", &["B", "C", "D"]),
    ("B", &["E", "F"]),
    ("C", &["G", "H"]),
    ("D", &["I", "J"]),
    ("E", &["K"]),
    ("F", &["L", "M"]),
    ("G", &[]),
    ("H", &["N"]),
    ("I", &[]),
    ("J", &["O", "P"]),
    ("K", &[]),
    ("L", &[]),
    ("M", &["Q"]),
    ("N", &[]),
    ("O", &[]),
    ("P", &[]),
    ("Q", &[]),
];

const MONSTER: Adjacency = &[
    ("A", &["B", "C", "D", "A1", "A2"]),
    ("B", &["E", "F", "B1"]),
    ("C", &["G", "H", "C1", "C2"]),
    ("D", &["I", "J"]),
    ("E", &["K", "L", "A"]),
    ("F", &["M", "N", "F1"]),
    ("G", &["O", "P"]),
    ("H", &["Q", "R", "C"]),
    ("I", &["S"]),
    ("J", &["T", "U"]),
    ("K", &["V", "W", "K1"]),
    ("L", &["X"]),
    ("M", &["Y", "Z"]),
    ("N", &["AA", "AB"]),
    ("O", &["AC"]),
    ("P", &["AD", "AE"]),
    ("Q", &["AF"]),
    ("R", &["AG", "H"]),
    ("S", &["AH", "AI"]),
    ("T", &["AJ"]),
    ("U", &["AK", "AL"]),
    ("V", &["AM"]),
    ("W", &["AN", "AO"]),
    ("X", &["AP"]),
    ("Y", &["AQ"]),
    ("Z", &["AR"]),
    ("AA", &["AS"]),
    ("AB", &["AT"]),
    ("AC", &["AU"]),
    ("AD", &["AV"]),
    ("AE", &["AW", "B"]),
    ("AF", &["AX"]),
    ("AG", &["AY"]),
    ("AH", &["AZ"]),
    ("AI", &["BA"]),
    ("AJ", &["BB"]),
    ("AK", &["BC"]),
    ("AL", &["BD"]),
    ("AM", &["BE"]),
    ("AN", &["BF"]),
    ("AO", &["BG"]),
    ("AP", &["BH"]),
    ("AQ", &["BI"]),
    ("AR", &["BJ"]),
    ("AS", &["BK"]),
    ("AT", &["BL"]),
    ("AU", &["BM"]),
    ("AV", &["BN"]),
    ("AW", &["BO"]),
    ("AX", &["BP"]),
    ("AY", &["BQ"]),
    ("AZ", &["BR"]),
    ("BA", &["BS"]),
    ("BB", &["BT"]),
    ("BC", &["BU"]),
    ("BD", &["BV"]),
    ("BE", &["BW"]),
    ("BF", &["BX"]),
    ("BG", &["BY"]),
    ("BH", &["BZ"]),
    ("BI", &["CA"]),
    ("BJ", &["CB"]),
    ("BK", &["CC"]),
    ("BL", &["CD"]),
    ("BM", &["CE"]),
    ("BN", &["CF"]),
    ("BO", &["CG"]),
    ("BP", &["CH"]),
    ("BQ", &["CI"]),
    ("BR", &["CJ"]),
    ("BS", &["CK"]),
    ("BT", &["CL"]),
    ("BU", &["CM"]),
    ("BV", &["CN"]),
    ("BW", &["CO"]),
    ("BX", &["CP"]),
    ("BY", &["CQ"]),
    ("BZ", &["CR"]),
    ("CA", &["CS"]),
    ("CB", &["CT"]),
    ("CC", &["CU"]),
    ("CD", &["CV"]),
    ("CE", &["CW"]),
    ("CF", &["CX"]),
    ("CG", &["CY"]),
    ("CH", &["CZ"]),
    ("CI", &["DA"]),
    ("CJ", &["DB"]),
    ("CK", &["DC"]),
    ("CL", &["DD"]),
    ("CM", &["DE"]),
    ("CN", &["DF"]),
    ("CO", &["DG"]),
    ("CP", &["DH"]),
    ("CQ", &["DI"]),
    ("CR", &["DJ"]),
    ("DI", &["EA"]),
    ("DJ", &["EB"]),
    ("EA", &["A", "M", "X"]),
    ("EB", &["Q", "R", "EB1"]),
    ("EB1", &["EB"]),
    ("A1", &[]),
    ("A2", &[]),
    ("B1", &[]),
    ("C1", &[]),
    ("C2", &[]),
    ("F1", &[]),
    ("K1", &[]),
];

/// The 17-node tree graph.
#[must_use]
pub fn tree() -> Graph {
    Graph::from_adjacency(
        TREE.iter()
            .map(|(node, successors)| (*node, successors.iter().copied())),
    )
}

/// The large cyclic graph.
#[must_use]
pub fn monster() -> Graph {
    Graph::from_adjacency(
        MONSTER
            .iter()
            .map(|(node, successors)| (*node, successors.iter().copied())),
    )
}

/// Look up a built-in graph by name.
///
/// # Errors
///
/// Returns [`Error::UnknownGraph`] if `name` is not one of [`NAMES`].
pub fn by_name(name: &str) -> Result<Graph> {
    match name {
        "tree" => Ok(tree()),
        "monster" => Ok(monster()),
        other => Err(Error::UnknownGraph(format!(
            "'{other}' (available: {})",
            NAMES.join(", ")
        ))),
    }
}
