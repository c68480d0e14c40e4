use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    print!("{}", render_table(headers, &rows));
}

/// Left-aligned columns separated by two spaces, with a dashed rule under the
/// header. Cells past the last header are dropped.
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect();

    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    let mut out = render_line(headers.iter().copied(), &widths);
    out += &render_line(rule.iter().map(String::as_str), &widths);
    for row in rows {
        out += &render_line(row.iter().map(String::as_str), &widths);
    }
    out
}

fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    let mut line = padded.join("  ").trim_end().to_string();
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_fit_widest_cell() {
        let rows = vec![
            vec!["t1".to_string(), "Household interviews".to_string()],
            vec!["t10".to_string(), "".to_string()],
        ];
        let table = render_table(&["ID", "NAME"], &rows);
        assert_eq!(
            table,
            "ID   NAME\n\
             ---  --------------------\n\
             t1   Household interviews\n\
             t10\n"
        );
    }

    #[test]
    fn extra_cells_are_ignored() {
        let rows = vec![vec!["a".to_string(), "b".to_string(), "c".to_string()]];
        assert_eq!(render_table(&["X", "Y"], &rows), "X  Y\n-  -\na  b\n");
    }
}
