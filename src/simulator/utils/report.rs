use crate::model::SimResult;

pub const HEADERS: [&str; 12] = [
  "CPU Dies",
  "CPU Cores/Die",
  "NPU Dies",
  "NPU Cores/Die",
  "CPU Time (ms)",
  "NPU Time (ms)",
  "Interconnect (ms)",
  "Coherence (ms)",
  "Sync (ms)",
  "Memory (ms)",
  "Total Time (ms)",
  "Power (W)",
];

/// Padding reserved around each header, as in `tabulate`'s grid format
const HEADER_PADDING: usize = 2;

/// Display cells for one result, integers as-is and floats with two decimals
pub fn result_row(result: &SimResult) -> Vec<String> {
  let mut row = vec![
    result.cpu_dies.to_string(),
    result.cpu_cores_per_die.to_string(),
    result.npu_dies.to_string(),
    result.npu_cores_per_die.to_string(),
  ];
  let floats = [
    result.cpu_time_ms,
    result.npu_time_ms,
    result.interconnect_time_ms,
    result.coherence_time_ms,
    result.sync_time_ms,
    result.memory_time_ms,
    result.total_time_ms,
    result.total_power_w,
  ];
  row.extend(floats.iter().map(|v| format!("{:.2}", v)));
  row
}

fn separator(widths: &[usize], fill: char) -> String {
  let mut line = String::from("+");
  for &w in widths {
    line.extend(std::iter::repeat(fill).take(w + 2));
    line.push('+');
  }
  line
}

fn cells(values: &[String], widths: &[usize]) -> String {
  let mut line = String::from("|");
  for (value, &w) in values.iter().zip(widths) {
    line.push_str(&format!(" {:>w$} |", value, w = w));
  }
  line
}

/// Render results as a grid table, one row per result
pub fn render_table(results: &[SimResult]) -> String {
  let headers: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
  let rows: Vec<Vec<String>> = results.iter().map(result_row).collect();

  let widths: Vec<usize> = headers
    .iter()
    .enumerate()
    .map(|(i, h)| {
      rows
        .iter()
        .map(|r| r[i].len())
        .fold(h.len() + HEADER_PADDING, usize::max)
    })
    .collect();

  let mut lines = vec![separator(&widths, '-'), cells(&headers, &widths), separator(&widths, '=')];
  for row in &rows {
    lines.push(cells(row, &widths));
    lines.push(separator(&widths, '-'));
  }
  lines.join("\n")
}

pub fn render_json(result: &SimResult) -> serde_json::Result<String> {
  serde_json::to_string_pretty(result)
}
