use crate::types::Record;

/// Encode records as CSV text: a header row of the shared field names, then
/// one row per record. The numeric `material_number` is emitted bare; every
/// string field is double-quoted with internal quotes doubled, so a field
/// may contain commas, quotes, or newlines without breaking the row shape.
pub fn encode_csv(records: &[Record]) -> String {
    let mut out = String::new();
    out.push_str(&Record::FIELD_NAMES.join(","));
    out.push('\n');

    for record in records {
        out.push_str(&record.material_number.to_string());
        for value in record.field_values() {
            out.push(',');
            push_quoted(&mut out, value);
        }
        out.push('\n');
    }
    out
}

fn push_quoted(out: &mut String, value: &str) {
    out.push('"');
    for c in value.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}
