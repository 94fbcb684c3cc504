use cipherforge::optimizer::SearchResult;
use cipherforge::ranking::RankedKey;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_ranking(ranked: &[RankedKey]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("Key").add_attribute(Attribute::Bold),
    ]);

    for i in 0..=1 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (rank, entry) in ranked.iter().enumerate() {
        let key = entry.key.as_deref().unwrap_or("-");
        table.add_row(vec![
            Cell::new(rank + 1),
            Cell::new(format!("{:.4}", entry.score)).fg(Color::Cyan),
            Cell::new(key),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_search_summary(result: &SearchResult) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    let secs = result.elapsed.as_secs_f64();
    let rate = if secs > 0.0 {
        result.scored as f64 / secs
    } else {
        0.0
    };

    table.add_row(vec![Cell::new("Keys scored"), Cell::new(result.scored)]);
    table.add_row(vec![Cell::new("New keys"), Cell::new(result.fresh)]);
    table.add_row(vec![
        Cell::new("Elapsed"),
        Cell::new(format!("{:.2}s ({:.0} keys/s)", secs, rate)),
    ]);

    match &result.best {
        Some((key, score)) => {
            table.add_row(vec![
                Cell::new("Run best").add_attribute(Attribute::Bold),
                Cell::new(format!("{:.4}", score)).fg(Color::Green),
            ]);
            table.add_row(vec![Cell::new("Key"), Cell::new(key)]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Run best").add_attribute(Attribute::Bold),
                Cell::new("-").fg(Color::Red),
            ]);
        }
    }

    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    println!("\n{}", table);
}
