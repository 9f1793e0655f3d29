use crawler_core::{encode_csv, Record};

fn record(id: u64, title: &str, tags: &str, tip: &str) -> Record {
    Record {
        title: title.to_string(),
        tags: tags.to_string(),
        tip: tip.to_string(),
        ..Record::blank(id)
    }
}

/// Minimal CSV reader for the encoder's own output: quoted string fields
/// with doubled internal quotes, bare numeric first column.
fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[test]
fn header_row_lists_the_shared_field_names() {
    let csv = encode_csv(&[]);
    assert_eq!(
        csv,
        "material_number,title,category,method,ingredients,tags,tip\n"
    );
}

#[test]
fn three_row_set_round_trips_through_a_column_parser() {
    let records = vec![
        record(1, "Kimchi stew", "soup, stew", "simmer slowly"),
        record(2, "Say \"cheese\"", "snack", ""),
        record(3, "Plain rice", "", "rinse 3 times"),
    ];

    let csv = encode_csv(&records);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);

    let header = parse_row(lines[0]);
    assert_eq!(header, Record::FIELD_NAMES);

    for (line, original) in lines[1..].iter().zip(&records) {
        let fields = parse_row(line);
        assert_eq!(fields.len(), Record::FIELD_NAMES.len());
        assert_eq!(fields[0], original.material_number.to_string());
        assert_eq!(fields[1], original.title);
        assert_eq!(fields[5], original.tags);
        assert_eq!(fields[6], original.tip);
    }
}

#[test]
fn embedded_quotes_are_doubled_on_the_wire() {
    let csv = encode_csv(&[record(7, "a \"b\" c", "", "")]);
    assert!(csv.contains("\"a \"\"b\"\" c\""));
}

#[test]
fn blank_record_emits_bare_id_and_empty_quoted_fields() {
    let csv = encode_csv(&[Record::blank(9)]);
    let data_line = csv.lines().nth(1).unwrap();
    assert_eq!(data_line, "9,\"\",\"\",\"\",\"\",\"\",\"\"");
}

#[test]
fn commas_inside_fields_do_not_split_columns() {
    let csv = encode_csv(&[record(4, "one, two, three", "a,b", "")]);
    let fields = parse_row(csv.lines().nth(1).unwrap());
    assert_eq!(fields[1], "one, two, three");
    assert_eq!(fields[5], "a,b");
}
