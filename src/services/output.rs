use crate::domain::models::JsonOut;
use serde::Serialize;

fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

/// One row per item, or the whole slice as a `JsonOut` list.
pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        return print_json(data);
    }
    for d in data {
        println!("{}", row(d));
    }
    Ok(())
}

/// Several plain lines for a single report, or the report as a `JsonOut` object.
pub fn print_lines<T: Serialize>(
    json: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        return print_json(data);
    }
    for line in lines(&data) {
        println!("{}", line);
    }
    Ok(())
}
