// Copyright 2025 Cowboy AI, LLC.

//! Textual renderings of cyclers

use std::fmt::{self, Debug, Display, Formatter};

use crate::cycler::{Cycler, Node};

impl<V: Debug> Display for Cycler<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.node {
            Node::Empty => f.write_str("cycler()"),
            Node::Leaf { key, values } => write!(f, "cycler({key:?}, {values:?})"),
            Node::Composite { op, left, right } => {
                write!(f, "({left} {} {right})", op.symbol())
            }
        }
    }
}

impl<V: Clone + Debug> Cycler<V> {
    /// Render the records as an HTML table, one column per key.
    ///
    /// Columns are ordered by the debug rendering of their key.
    pub fn html_table(&self) -> String {
        let mut keys: Vec<&String> = self.keys.iter().collect();
        keys.sort_by_key(|key| format!("{key:?}"));

        let mut out = String::from("<table>");
        for key in &keys {
            out.push_str(&format!("<th>{key:?}</th>"));
        }
        for record in self.iter() {
            out.push_str("<tr>");
            for key in &keys {
                if let Some(value) = record.get(key.as_str()) {
                    out.push_str(&format!("<td>{value:?}</td>"));
                }
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        out
    }
}
