//! Functions for writing sweep tables in CSV format.
use crate::Tabular;
pub use csv::Error;
use csv::Writer;

/// Write states as CSV, with a header row from the first state's columns.
///
/// The states must come from the same mechanism with the same velocity
/// setting, or the rows will not line up.
pub fn write_states<'a, W, I, S>(writer: W, states: I) -> Result<(), Error>
where
    W: std::io::Write,
    I: IntoIterator<Item = &'a S>,
    S: Tabular + 'a,
{
    let mut w = Writer::from_writer(writer);
    let mut header = false;
    for s in states {
        let fields = s.fields();
        if !header {
            w.write_record(fields.iter().map(|(k, _)| k.as_str()))?;
            header = true;
        }
        w.write_record(fields.iter().map(|(_, v)| v.to_string()))?;
    }
    w.flush()?;
    Ok(())
}

/// Dump states to a CSV string.
pub fn dump_states<'a, I, S>(states: I) -> Result<String, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = &'a S>,
    S: Tabular + 'a,
{
    let mut buf = Vec::new();
    write_states(&mut buf, states)?;
    Ok(String::from_utf8(buf)?)
}
