use crate::board::Square;
use crate::chain::Landings;
use anyhow::Context;
use anyhow::Result;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

/// Column order for the history table: square names sorted
/// lexicographically. This ordering, and zero cells for squares never
/// landed on, are a compatibility contract with the original
/// `monopoly_landings.csv` output.
pub fn columns() -> Vec<Square> {
    let mut squares = Square::all().collect::<Vec<_>>();
    squares.sort_by_key(|square| square.name());
    squares
}

/// Write the snapshot history as CSV: a leading snapshot-index
/// column, then one cumulative-count column per square.
pub fn write_history<W>(mut sink: W, history: &[Landings]) -> std::io::Result<()>
where
    W: Write,
{
    let columns = columns();
    let header = columns
        .iter()
        .map(|square| square.name())
        .collect::<Vec<_>>()
        .join(",");
    writeln!(sink, ",{}", header)?;
    for (index, snapshot) in history.iter().enumerate() {
        let cells = columns
            .iter()
            .map(|&square| snapshot.count(square).to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(sink, "{},{}", index, cells)?;
    }
    sink.flush()
}

/// Persist the history table. Failure leaves the in-memory history
/// untouched for the caller.
pub fn save_history(history: &[Landings], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("create history table {}", path.display()))?;
    write_history(BufWriter::new(file), history)
        .with_context(|| format!("write history table {}", path.display()))
}
